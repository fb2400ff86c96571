use leptos::prelude::*;

use crate::accordion::Accordion;
use crate::config::{FAQ_STAGGER, RevealOptions};
use crate::content::{FAQS, FaqItem};
use crate::icons::{ICON_CHEVRON_DOWN, Icon};
use crate::reveal::{reveal_class, stagger_delay, use_reveal_group};

#[component]
pub fn Faq() -> impl IntoView {
    let revealed = use_reveal_group("faq", FAQS.len(), RevealOptions::GRID);
    let accordion = RwSignal::new(Accordion::default());

    view! {
        <section id="faq" class="section">
            <div class="container container-narrow">
                <div class="section-header">
                    <h2 class="section-title">
                        "Frequently Asked"
                        <span class="gradient-text block">"Questions"</span>
                    </h2>
                    <p class="section-description">
                        "Get answers to common questions about our transaction management system and "
                        "how it can transform your financial operations."
                    </p>
                </div>

                <div class="faq-list">
                    {FAQS
                        .iter()
                        .enumerate()
                        .map(|(index, item)| {
                            view! {
                                <FaqEntry
                                    index=index
                                    item=item
                                    shown=Signal::derive(move || revealed.with(|set| set.is_revealed(index)))
                                    accordion=accordion
                                />
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <div class="section-footer">
                    <h3 class="subsection-title">"Still have questions?"</h3>
                    <p class="section-footer-text">
                        "Our team of experts is here to help you understand how our system can benefit your business."
                    </p>
                    <div class="button-row">
                        <a href="#final-cta" class="btn btn-primary btn-lg">"Schedule Free Consultation"</a>
                        <a href="#contact" class="btn btn-secondary btn-lg">"Contact Support"</a>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn FaqEntry(
    index: usize,
    item: &'static FaqItem,
    shown: Signal<bool>,
    accordion: RwSignal<Accordion>,
) -> impl IntoView {
    let is_open = move || accordion.with(|a| a.is_open(index));
    let answer_id = format!("faq-answer-{index}");

    view! {
        <div
            class=move || format!("faq-item glass-card {}", reveal_class(shown.get()))
            style=stagger_delay(index, FAQ_STAGGER)
            data-reveal-group="faq"
            data-reveal-index=index.to_string()
        >
            <button
                class="faq-question"
                aria-expanded=move || is_open().to_string()
                aria-controls=answer_id.clone()
                on:click=move |_| accordion.update(|a| a.toggle(index))
            >
                <h3>{item.question}</h3>
                <span class=move || if is_open() { "faq-chevron open" } else { "faq-chevron" }>
                    <Icon path=ICON_CHEVRON_DOWN class="icon-md" />
                </span>
            </button>

            <div id=answer_id class=move || if is_open() { "faq-answer open" } else { "faq-answer" }>
                <div class="faq-answer-body">
                    <p>{item.answer}</p>
                </div>
            </div>
        </div>
    }
}
