// TransactPro Landing Page — Leptos 0.8 CSR
// Developed by The TransactPro Web Team (c)2025

mod accordion;
mod config;
mod content;
mod icons;
mod reveal;
mod sections;

use leptos::prelude::*;
use sections::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(config::LOG_LEVEL) {
        web_sys::console::warn_1(&format!("logger already set: {err}").into());
    }
    log::info!("{} landing mounting", config::BRAND);
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    // whole-page fade once the first frame is on screen
    let (loaded, set_loaded) = signal(false);
    Effect::new(move || {
        set_loaded.set(true);
        log::debug!("landing mounted");
    });

    view! {
        <div class=move || if loaded.get() { "page loaded" } else { "page" }>
            <Nav />
            <main>
                <Hero />
                <Features />
                <TrustSignals />
                <Faq />
                <Cta />
            </main>
            <Footer />
        </div>
    }
}
