use leptos::prelude::*;

use crate::config::{FEATURE_STAGGER, RevealOptions};
use crate::content::{FEATURES, Feature, PAIN_POINTS, SOLUTIONS};
use crate::icons::{ICON_CHECK, ICON_CHECK_CIRCLE, ICON_X_CIRCLE, Icon, IconKind};
use crate::reveal::{reveal_class, stagger_delay, use_reveal_group};

#[component]
pub fn Features() -> impl IntoView {
    let revealed = use_reveal_group("features", FEATURES.len(), RevealOptions::GRID);

    view! {
        <section id="features" class="section">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">
                        "Why Choose Our"
                        <span class="gradient-text block">"Transaction Management System?"</span>
                    </h2>
                    <p class="section-description">
                        "Stop wasting time on manual processes. Our platform eliminates the pain points "
                        "that cost you money and slow down your business."
                    </p>
                </div>

                <div class="comparison glass-card">
                    <h3 class="comparison-title">"From Manual Chaos to Automated Excellence"</h3>
                    <div class="comparison-grid">
                        <Comparison
                            heading="Current Pain Points"
                            icon=ICON_X_CIRCLE
                            tone="text-red"
                            items=PAIN_POINTS
                        />
                        <Comparison
                            heading="Our Solutions"
                            icon=ICON_CHECK_CIRCLE
                            tone="text-green"
                            items=SOLUTIONS
                        />
                    </div>
                </div>

                <div class="features-grid">
                    {FEATURES
                        .iter()
                        .enumerate()
                        .map(|(index, feature)| {
                            let shown = move || revealed.with(|set| set.is_revealed(index));
                            view! { <FeatureCard index=index feature=feature shown=Signal::derive(shown) /> }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <div class="section-footer">
                    <a href="#final-cta" class="btn btn-primary btn-lg">"See All Features in Action"</a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Comparison(
    heading: &'static str,
    icon: &'static str,
    /// color class for the heading and bullets
    tone: &'static str,
    items: &'static [&'static str],
) -> impl IntoView {
    view! {
        <div>
            <h4 class=format!("comparison-heading {tone}")>
                <Icon path=icon kind=IconKind::Solid class="icon-md" />
                {heading}
            </h4>
            <ul class="comparison-list">
                {items
                    .iter()
                    .map(|item| {
                        view! {
                            <li>
                                <span class=tone>"•"</span>
                                {*item}
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}

#[component]
fn FeatureCard(index: usize, feature: &'static Feature, shown: Signal<bool>) -> impl IntoView {
    view! {
        <article
            class=move || format!("feature-card glass-card {}", reveal_class(shown.get()))
            style=stagger_delay(index, FEATURE_STAGGER)
            data-reveal-group="features"
            data-reveal-index=index.to_string()
        >
            <div class="feature-icon">
                <Icon path=feature.icon class="icon-lg" />
            </div>
            <h3 class="feature-title">{feature.title}</h3>
            <p class="feature-description">{feature.description}</p>
            <ul class="feature-benefits">
                {feature
                    .benefits
                    .iter()
                    .map(|benefit| {
                        view! {
                            <li>
                                <Icon path=ICON_CHECK kind=IconKind::Solid class="icon-xs text-green" />
                                {*benefit}
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </article>
    }
}
