// Site-wide tunables (single source of truth)
// Developed by The TransactPro Web Team (c)2025

/// Product name shown in the nav bar and footer.
pub const BRAND: &str = "TransactPro";

/// Year printed in the footer copyright line.
pub const COPYRIGHT_YEAR: u16 = 2025;

/// Vertical scroll offset (px) past which the nav bar turns opaque.
pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;

/// Per-item `animation-delay` steps, in seconds.
pub const FEATURE_STAGGER: f64 = 0.1;
pub const FAQ_STAGGER: f64 = 0.1;
pub const TESTIMONIAL_STAGGER: f64 = 0.2;

#[cfg(debug_assertions)]
pub const LOG_LEVEL: log::Level = log::Level::Debug;
#[cfg(not(debug_assertions))]
pub const LOG_LEVEL: log::Level = log::Level::Info;

/// Options handed to the browser's `IntersectionObserver`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    /// Fraction of the element that must be visible before it counts as seen.
    pub threshold: f64,
    /// CSS margin around the viewport root.
    pub root_margin: &'static str,
}

impl RevealOptions {
    /// Default for staggered card grids.
    pub const GRID: Self = Self {
        threshold: 0.2,
        root_margin: "0px",
    };

    /// Large single panels need more of their area on screen.
    pub const PANEL: Self = Self {
        threshold: 0.3,
        root_margin: "0px",
    };
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self::GRID
    }
}

/// True once the page has scrolled far enough for the solid nav style.
pub fn nav_is_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAV_SCROLL_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn nav_threshold_is_strict() {
        assert!(!nav_is_scrolled(0.0));
        assert!(!nav_is_scrolled(50.0));
        assert!(nav_is_scrolled(50.5));
        assert!(nav_is_scrolled(1200.0));
    }

    #[test]
    fn default_reveal_options_match_grid() {
        assert_eq!(RevealOptions::default(), RevealOptions::GRID);
        assert_eq!(RevealOptions::GRID.threshold, 0.2);
        assert_eq!(RevealOptions::PANEL.threshold, 0.3);
    }
}
