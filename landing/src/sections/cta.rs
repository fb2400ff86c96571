use leptos::prelude::*;

use crate::config::RevealOptions;
use crate::content::{
    CTA_BADGE, CTA_DISCLAIMER, CTA_SUBHEADLINE, CTA_TRUST_INDICATORS, CTA_VALUE_PROPS,
};
use crate::icons::{ICON_CHECK, ICON_CHECK_CIRCLE, Icon, IconKind};
use crate::reveal::{reveal_class, use_reveal_once};

pub const CTA_SECTION_ID: &str = "final-cta";

#[component]
pub fn Cta() -> impl IntoView {
    let shown = use_reveal_once(CTA_SECTION_ID, RevealOptions::PANEL);

    view! {
        <section id=CTA_SECTION_ID class="section cta">
            <div class="hero-backdrop" aria-hidden="true">
                <div class="blob blob-purple blob-soft"></div>
                <div class="blob blob-pink blob-soft" style="animation-delay: 2s"></div>
            </div>

            <div class="container container-wide">
                <div class=move || format!("cta-panel glass-card {}", reveal_class(shown.get()))>
                    <div class="pill pill-green">
                        <Icon path=ICON_CHECK_CIRCLE kind=IconKind::Solid class="icon-sm" />
                        {CTA_BADGE}
                    </div>

                    <h2 class="cta-title">
                        "Ready to Transform Your"
                        <span class="gradient-text block">"Transaction Management?"</span>
                    </h2>

                    <p class="cta-description">{CTA_SUBHEADLINE}</p>

                    <div class="value-props">
                        {CTA_VALUE_PROPS
                            .iter()
                            .map(|prop| {
                                view! {
                                    <div class="value-prop">
                                        <Icon path=ICON_CHECK kind=IconKind::Solid class="icon-md text-green" />
                                        <span>{*prop}</span>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>

                    <div class="button-row">
                        <a href="#final-cta" class="btn btn-primary btn-xl pulse">"Start Your Free Trial Now"</a>
                        <a href="#contact" class="btn btn-secondary btn-xl">"Schedule Live Demo"</a>
                    </div>

                    <div class="trust-indicators">
                        {CTA_TRUST_INDICATORS
                            .iter()
                            .map(|(icon, label)| {
                                view! {
                                    <div class="check-item">
                                        <Icon path=*icon kind=IconKind::Solid class="icon-sm text-green" />
                                        {*label}
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>

                    <p class="cta-disclaimer">{CTA_DISCLAIMER}</p>
                </div>
            </div>
        </section>
    }
}
