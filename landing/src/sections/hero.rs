use leptos::prelude::*;

use crate::content::{
    DASHBOARD_CARDS, HERO_BADGE, HERO_BENEFITS, HERO_STATS, HERO_SUBHEADLINE, SAMPLE_TRANSACTIONS,
};
use crate::icons::{ICON_ARROW_DOWN, ICON_BADGE_CHECK, ICON_CHECK, Icon, IconKind};

#[component]
pub fn Hero() -> impl IntoView {
    // entrance plays once, right after mount
    let (entered, set_entered) = signal(false);
    Effect::new(move || set_entered.set(true));

    view! {
        <section class="hero">
            <div class="hero-backdrop" aria-hidden="true">
                <div class="blob blob-purple"></div>
                <div class="blob blob-indigo" style="animation-delay: 2s"></div>
                <div class="blob blob-pink" style="animation-delay: 4s"></div>
                <div class="ring ring-lg"></div>
                <div class="ring ring-md" style="animation-delay: 1s"></div>
                <div class="ring ring-sm" style="animation-delay: 2s"></div>
            </div>

            <div class="container hero-inner">
                <div class="hero-grid">
                    <div class=move || {
                        if entered.get() { "hero-content animate-fade-in-up" } else { "hero-content is-hidden" }
                    }>
                        <div class="pill pill-purple">
                            <Icon path=ICON_BADGE_CHECK kind=IconKind::Solid class="icon-sm" />
                            {HERO_BADGE}
                        </div>

                        <h1 class="hero-title">
                            "Transform Your"
                            <span class="gradient-text block">"Transaction Management"</span>
                        </h1>

                        <p class="hero-description">{HERO_SUBHEADLINE}</p>

                        <div class="hero-benefits">
                            {HERO_BENEFITS
                                .iter()
                                .map(|benefit| {
                                    view! {
                                        <div class="check-item">
                                            <Icon path=ICON_CHECK kind=IconKind::Solid class="icon-sm text-green" />
                                            {*benefit}
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>

                        <div class="hero-actions">
                            <a href="#final-cta" class="btn btn-primary btn-lg pulse">"Start Free Demo"</a>
                            <a href="#features" class="btn btn-secondary btn-lg">"Watch Video Tour"</a>
                        </div>

                        <div class="hero-stats">
                            {HERO_STATS
                                .iter()
                                .map(|stat| {
                                    view! {
                                        <div class="stat">
                                            <div class="stat-value">{stat.value}</div>
                                            <div class="stat-label">{stat.label}</div>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    </div>

                    <div class=move || {
                        if entered.get() { "hero-preview animate-slide-in-right" } else { "hero-preview is-hidden" }
                    }>
                        <DashboardPreview />
                    </div>
                </div>

                <a href="#features" class="scroll-indicator">
                    <span>"Scroll to explore"</span>
                    <Icon path=ICON_ARROW_DOWN class="icon-md bounce" />
                </a>
            </div>
        </section>
    }
}

#[component]
fn DashboardPreview() -> impl IntoView {
    view! {
        <div class="dashboard glass-card">
            <div class="dashboard-header">
                <h3>"Transaction Dashboard"</h3>
                <div class="window-dots">
                    <span class="window-dot red"></span>
                    <span class="window-dot yellow"></span>
                    <span class="window-dot green"></span>
                </div>
            </div>

            <div class="dashboard-cards">
                {DASHBOARD_CARDS
                    .iter()
                    .map(|card| {
                        view! {
                            <div class=format!("dashboard-card {}", card.tone.class())>
                                <div class="dashboard-card-value">{card.value}</div>
                                <div class="dashboard-card-label">{card.label}</div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <div class="dashboard-rows">
                {SAMPLE_TRANSACTIONS
                    .iter()
                    .map(|tx| {
                        view! {
                            <div class=format!("dashboard-row {}", tx.tone.class())>
                                <div class="dashboard-row-label">
                                    <span class="dot"></span>
                                    <span>{tx.description}</span>
                                </div>
                                <span class="dashboard-row-amount">{tx.amount}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <div class="float-orb orb-top" aria-hidden="true"></div>
            <div class="float-orb orb-bottom" style="animation-delay: 1s" aria-hidden="true"></div>
        </div>
    }
}
