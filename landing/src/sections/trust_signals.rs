use leptos::prelude::*;

use crate::config::{RevealOptions, TESTIMONIAL_STAGGER};
use crate::content::{
    CERTIFICATIONS, MAX_RATING, PARTNERS, TESTIMONIALS, TRUST_STATS, Testimonial,
};
use crate::icons::{ICON_STAR, Icon, IconKind};
use crate::reveal::{reveal_class, stagger_delay, use_reveal_group};

#[component]
pub fn TrustSignals() -> impl IntoView {
    let revealed = use_reveal_group("testimonials", TESTIMONIALS.len(), RevealOptions::GRID);

    view! {
        <section id="testimonials" class="section">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title section-title-sm">
                        "Trusted by Financial Professionals"
                        <span class="gradient-text block">"Worldwide"</span>
                    </h2>
                    <p class="section-description">
                        "Join thousands of brokers and financial advisors who have transformed their "
                        "transaction management with our secure, compliant platform."
                    </p>
                    <div class="trust-stats">
                        {TRUST_STATS
                            .iter()
                            .map(|item| {
                                view! {
                                    <div class="stat">
                                        <div class="stat-emoji">{item.emoji}</div>
                                        <div class="stat-value stat-value-lg">{item.stat.value}</div>
                                        <div class="stat-label">{item.stat.label}</div>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>

                <div class="testimonials">
                    <h3 class="subsection-title">"What Our Customers Say"</h3>
                    <div class="testimonials-grid">
                        {TESTIMONIALS
                            .iter()
                            .enumerate()
                            .map(|(index, testimonial)| {
                                view! {
                                    <TestimonialCard
                                        index=index
                                        testimonial=testimonial
                                        shown=Signal::derive(move || {
                                            revealed.with(|set| set.is_revealed(index))
                                        })
                                    />
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>

                <div class="certifications glass-card">
                    <h3 class="subsection-title">"Security & Compliance Certifications"</h3>
                    <p class="certifications-intro">
                        "Your data security is our top priority. We maintain the highest standards of "
                        "security and compliance to protect your sensitive financial information."
                    </p>
                    <div class="certifications-grid">
                        {CERTIFICATIONS
                            .iter()
                            .map(|cert| {
                                view! {
                                    <div class="certification">
                                        <div class="certification-icon">
                                            <Icon path=cert.icon class="icon-lg" />
                                        </div>
                                        <h4>{cert.name}</h4>
                                        <p>{cert.description}</p>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>

                <div class="partners">
                    <h3 class="partners-title">"Trusted Integration Partners"</h3>
                    <div class="partners-row">
                        {PARTNERS
                            .iter()
                            .map(|partner| view! { <span class="partner">{*partner}</span> })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn TestimonialCard(
    index: usize,
    testimonial: &'static Testimonial,
    shown: Signal<bool>,
) -> impl IntoView {
    view! {
        <figure
            class=move || format!("testimonial glass-card {}", reveal_class(shown.get()))
            style=stagger_delay(index, TESTIMONIAL_STAGGER)
            data-reveal-group="testimonials"
            data-reveal-index=index.to_string()
        >
            <div class="rating" aria-label=format!("{} out of {MAX_RATING} stars", testimonial.rating)>
                {(0..testimonial.rating.min(MAX_RATING))
                    .map(|_| view! { <Icon path=ICON_STAR kind=IconKind::Solid class="icon-md text-yellow" /> })
                    .collect::<Vec<_>>()}
            </div>

            <blockquote class="testimonial-quote">{format!("\"{}\"", testimonial.quote)}</blockquote>

            <figcaption class="testimonial-author">
                <img src=testimonial.image alt=testimonial.name class="avatar" loading="lazy" />
                <div>
                    <div class="author-name">{testimonial.name}</div>
                    <div class="author-role">{testimonial.role}</div>
                    <div class="author-company">{testimonial.company}</div>
                </div>
            </figcaption>
        </figure>
    }
}
