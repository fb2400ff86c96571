use leptos::prelude::*;

use crate::config::{BRAND, COPYRIGHT_YEAR};
use crate::content::{FOOTER_BLURB, FOOTER_COLUMNS, LEGAL_LINKS, SOCIAL_LINKS};
use crate::icons::{Icon, IconKind};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer id="contact" class="footer">
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <span class="footer-title gradient-text">{BRAND}</span>
                        <p class="footer-blurb">{FOOTER_BLURB}</p>
                        <div class="footer-social">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|(label, icon)| {
                                    view! {
                                        <a href="#" class="footer-link" aria-label=*label>
                                            <Icon path=*icon kind=IconKind::Brand class="icon-md" />
                                        </a>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    </div>

                    {FOOTER_COLUMNS
                        .iter()
                        .map(|column| {
                            view! {
                                <div class="footer-column">
                                    <h4>{column.heading}</h4>
                                    <ul>
                                        {column
                                            .links
                                            .iter()
                                            .map(|link| {
                                                view! {
                                                    <li><a href=link.href class="footer-link">{link.label}</a></li>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <div class="footer-bottom">
                    <p class="footer-copyright">
                        {format!("© {COPYRIGHT_YEAR} {BRAND}. All rights reserved.")}
                    </p>
                    <div class="footer-legal">
                        {LEGAL_LINKS
                            .iter()
                            .map(|link| view! { <a href=link.href class="footer-link">{link.label}</a> })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </div>
        </footer>
    }
}
