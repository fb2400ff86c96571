// Landing page sections, top to bottom
// Developed by The TransactPro Web Team (c)2025

mod cta;
mod faq;
mod features;
mod footer;
mod hero;
mod nav;
mod trust_signals;

pub use cta::Cta;
pub use faq::Faq;
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
pub use trust_signals::TrustSignals;
