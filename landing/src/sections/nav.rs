use leptos::ev;
use leptos::prelude::*;

use crate::config::{BRAND, nav_is_scrolled};
use crate::content::NAV_LINKS;
use crate::icons::{ICON_CLOSE, ICON_MENU};

#[component]
pub fn Nav() -> impl IntoView {
    let (scrolled, set_scrolled) = signal(false);
    let (menu_open, set_menu_open) = signal(false);

    let handle = window_event_listener(ev::scroll, move |_| {
        let scroll_y = window().scroll_y().unwrap_or(0.0);
        let next = nav_is_scrolled(scroll_y);
        // skip writes while the state is unchanged; scroll fires every frame
        if scrolled.get_untracked() != next {
            set_scrolled.set(next);
        }
    });
    on_cleanup(move || handle.remove());

    // a reload mid-page restores the scroll offset before any scroll event fires
    Effect::new(move || {
        if let Ok(scroll_y) = window().scroll_y() {
            set_scrolled.set(nav_is_scrolled(scroll_y));
        }
    });

    let close_menu = move |_| set_menu_open.set(false);

    view! {
        <nav class=move || if scrolled.get() { "nav scrolled" } else { "nav" }>
            <div class="container nav-inner">
                <a href="#" class="nav-brand gradient-text">{BRAND}</a>

                <div class="nav-links">
                    {NAV_LINKS
                        .iter()
                        .map(|link| view! { <a href=link.href class="nav-link">{link.label}</a> })
                        .collect::<Vec<_>>()}
                </div>

                <a href="#final-cta" class="btn btn-primary btn-sm nav-cta">"Get Started"</a>

                <button
                    class="nav-toggle"
                    aria-label="Toggle menu"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    <svg class="icon-md" stroke="currentColor" fill="none" viewBox="0 0 24 24">
                        <path
                            stroke-linecap="round"
                            stroke-linejoin="round"
                            stroke-width="2"
                            d=move || if menu_open.get() { ICON_CLOSE } else { ICON_MENU }
                        ></path>
                    </svg>
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <div class="container">
                    <div class="nav-mobile glass-card">
                        {NAV_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <a href=link.href class="nav-mobile-link" on:click=close_menu>
                                        {link.label}
                                    </a>
                                }
                            })
                            .collect::<Vec<_>>()}
                        <a href="#final-cta" class="btn btn-primary btn-block" on:click=close_menu>
                            "Get Started"
                        </a>
                    </div>
                </div>
            </Show>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    const STYLE: &str = include_str!("../../style.css");

    fn media_block(query: &str, selector: &str) -> bool {
        STYLE.split("@media").any(|block| {
            block.trim_start().starts_with(query)
                && block.contains(&format!("{selector} {{ display: none; }}"))
        })
    }

    #[test]
    fn mobile_menu_hidden_at_desktop_width() {
        assert!(media_block("(min-width: 768px)", ".nav-mobile"));
    }

    #[test]
    fn desktop_links_hidden_at_mobile_width() {
        assert!(media_block("(max-width: 767px)", ".nav-links, .nav-cta"));
    }
}
