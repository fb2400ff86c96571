//! Scroll-triggered entrance animations.
//!
//! Elements opt in by carrying `data-reveal-group="<group>"` and
//! `data-reveal-index="<n>"`. A section calls [`use_reveal_group`] once for
//! its group; an `IntersectionObserver` watches every element of the group and
//! records the index of each one that scrolls into view. Revealed indices are
//! never removed, so an element that leaves the viewport stays visible.
//!
//! When the observer cannot be attached (no window, no document, no
//! `IntersectionObserver` in the browser) the whole group is revealed at once.

use std::collections::HashSet;

use leptos::prelude::*;
use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::RevealOptions;

const GROUP_ATTR: &str = "data-reveal-group";
const INDEX_ATTR: &str = "data-reveal-index";

const HIDDEN_CLASS: &str = "reveal";
const VISIBLE_CLASS: &str = "reveal is-visible";

#[derive(Debug, Error)]
pub enum RevealError {
    #[error("no window object")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("no element with id `{0}`")]
    MissingElement(String),
    #[error("intersection observer failed: {0}")]
    Observer(String),
}

impl From<JsValue> for RevealError {
    fn from(value: JsValue) -> Self {
        Self::Observer(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

/// Indices of the items in a group that have entered the viewport.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealSet {
    items: HashSet<usize>,
}

impl RevealSet {
    /// Marks `index` as revealed. Returns `true` if it was not revealed before.
    pub fn reveal(&mut self, index: usize) -> bool {
        self.items.insert(index)
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.items.contains(&index)
    }

    /// Reveals `0..count`, used when observation is unavailable.
    pub fn reveal_all(&mut self, count: usize) {
        self.items.extend(0..count);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// CSS class for an item: hidden until revealed, then the fade-in-up animation.
pub fn reveal_class(revealed: bool) -> &'static str {
    if revealed { VISIBLE_CLASS } else { HIDDEN_CLASS }
}

/// Inline style staggering the entrance of the `index`-th item by `step` seconds.
pub fn stagger_delay(index: usize, step: f64) -> String {
    // whole milliseconds keep float noise (0.30000000000000004s) out of the CSS
    let ms = (index as f64 * step * 1000.0).round() as u64;
    format!("animation-delay: {ms}ms")
}

/// Parses a `data-reveal-index` attribute value.
pub fn parse_index(attr: Option<String>) -> Option<usize> {
    attr?.trim().parse().ok()
}

/// Records the item named by a `data-reveal-index` value.
/// Returns `true` only the first time that item is seen.
fn record_visible(set: &mut RevealSet, attr: Option<String>) -> bool {
    parse_index(attr).is_some_and(|index| set.reveal(index))
}

/// Failure path for a group: nothing stays hidden.
fn fall_back(set: &mut RevealSet, count: usize) {
    set.reveal_all(count);
}

/// Keeps the attached observer, or hands the error to `on_error` and keeps nothing.
fn settle<T>(attached: Result<T, RevealError>, on_error: impl FnOnce(RevealError)) -> Option<T> {
    match attached {
        Ok(observer) => Some(observer),
        Err(err) => {
            on_error(err);
            None
        }
    }
}

fn group_selector(group: &str) -> String {
    format!("[{GROUP_ATTR}=\"{group}\"]")
}

/// Live observer plus the JS callback it calls into. Disconnects on drop.
struct Observer {
    inner: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.inner.disconnect();
    }
}

fn document() -> Result<web_sys::Document, RevealError> {
    web_sys::window()
        .ok_or(RevealError::NoWindow)?
        .document()
        .ok_or(RevealError::NoDocument)
}

fn group_targets(group: &str) -> Result<Vec<Element>, RevealError> {
    let nodes = document()?.query_selector_all(&group_selector(group))?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

fn element_by_id(id: &str) -> Result<Element, RevealError> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| RevealError::MissingElement(id.to_string()))
}

/// Observes `targets` and calls `on_visible` the first time each one intersects.
fn observe<F>(
    targets: &[Element],
    options: RevealOptions,
    mut on_visible: F,
) -> Result<Observer, RevealError>
where
    F: FnMut(&Element) + 'static,
{
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                on_visible(&target);
                // one-shot: revealed items never hide again
                observer.unobserve(&target);
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(options.root_margin);

    let inner = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    for target in targets {
        inner.observe(target);
    }

    Ok(Observer {
        inner,
        _callback: callback,
    })
}

/// Tracks which items of `group` have scrolled into view.
///
/// `count` is the number of items in the group; it bounds the fallback reveal.
/// The observer lives as long as the calling component.
pub fn use_reveal_group(
    group: &'static str,
    count: usize,
    options: RevealOptions,
) -> ReadSignal<RevealSet> {
    let (revealed, set_revealed) = signal(RevealSet::default());

    Effect::new(move |_| {
        let attached = group_targets(group).and_then(|targets| {
            log::debug!("reveal[{group}]: observing {} elements", targets.len());
            observe(&targets, options, move |el| {
                let attr = el.get_attribute(INDEX_ATTR);
                set_revealed.maybe_update(|set| {
                    let fresh = record_visible(set, attr);
                    if fresh {
                        log::debug!("reveal[{group}]: {}/{count} visible", set.len());
                    }
                    fresh
                });
            })
        });

        settle(attached, |err| {
            log::warn!("reveal[{group}]: {err}; showing all {count} items");
            set_revealed.update(|set| fall_back(set, count));
        })
    });

    revealed
}

/// Flips to `true` the first time the element with `element_id` scrolls into view.
pub fn use_reveal_once(element_id: &'static str, options: RevealOptions) -> ReadSignal<bool> {
    let (seen, set_seen) = signal(false);

    Effect::new(move |_| {
        let attached = element_by_id(element_id).and_then(|el| {
            observe(std::slice::from_ref(&el), options, move |_| set_seen.set(true))
        });

        settle(attached, |err| {
            log::warn!("reveal[#{element_id}]: {err}; showing immediately");
            set_seen.set(true);
        })
    });

    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn reveal_set_starts_empty() {
        let set = RevealSet::default();
        assert_eq!(set.len(), 0);
        assert!(!set.is_revealed(0));
    }

    #[test]
    fn reveal_reports_first_insertion_only() {
        let mut set = RevealSet::default();
        assert!(set.reveal(2));
        assert!(!set.reveal(2));
        assert!(set.is_revealed(2));
        assert!(!set.is_revealed(1));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn reveal_is_monotonic() {
        let mut set = RevealSet::default();
        for index in [4, 0, 4, 1] {
            set.reveal(index);
        }
        assert_eq!(set.len(), 3);
        assert!(set.is_revealed(0));
        assert!(set.is_revealed(1));
        assert!(set.is_revealed(4));
    }

    #[test]
    fn reveal_all_covers_range() {
        let mut set = RevealSet::default();
        set.reveal(1);
        set.reveal_all(6);
        assert_eq!(set.len(), 6);
        assert!((0..6).all(|i| set.is_revealed(i)));
        assert!(!set.is_revealed(6));
    }

    #[test]
    fn class_follows_visibility() {
        assert_eq!(reveal_class(false), "reveal");
        assert_eq!(reveal_class(true), "reveal is-visible");
    }

    #[test]
    fn stagger_is_whole_milliseconds() {
        assert_eq!(stagger_delay(0, 0.1), "animation-delay: 0ms");
        assert_eq!(stagger_delay(3, 0.1), "animation-delay: 300ms");
        assert_eq!(stagger_delay(7, 0.1), "animation-delay: 700ms");
        assert_eq!(stagger_delay(2, 0.2), "animation-delay: 400ms");
    }

    #[test]
    fn parse_index_accepts_digits_only() {
        assert_eq!(parse_index(Some("5".into())), Some(5));
        assert_eq!(parse_index(Some(" 12 ".into())), Some(12));
        assert_eq!(parse_index(Some("-1".into())), None);
        assert_eq!(parse_index(Some("abc".into())), None);
        assert_eq!(parse_index(None), None);
    }

    #[test]
    fn selector_matches_group_attribute() {
        assert_eq!(group_selector("faq"), r#"[data-reveal-group="faq"]"#);
    }

    #[test]
    fn record_visible_reveals_each_index_once() {
        let mut set = RevealSet::default();
        assert!(record_visible(&mut set, Some("3".into())));
        assert!(!record_visible(&mut set, Some("3".into())));
        assert!(record_visible(&mut set, Some(" 0 ".into())));
        assert!(set.is_revealed(0));
        assert!(set.is_revealed(3));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn record_visible_ignores_bad_attributes() {
        let mut set = RevealSet::default();
        set.reveal(1);
        for attr in [None, Some(String::new()), Some("x".into()), Some("-2".into())] {
            assert!(!record_visible(&mut set, attr));
        }
        assert_eq!(set.len(), 1);
        assert!(set.is_revealed(1));
    }

    #[test]
    fn record_visible_never_hides_an_item() {
        let mut set = RevealSet::default();
        for attr in ["2", "5", "2", "bogus", "5"] {
            record_visible(&mut set, Some(attr.into()));
            assert!(set.is_revealed(2));
        }
        assert_eq!(set.len(), 2);
    }

    fn every_error() -> Vec<RevealError> {
        vec![
            RevealError::NoWindow,
            RevealError::NoDocument,
            RevealError::MissingElement("final-cta".into()),
            RevealError::Observer("IntersectionObserver is not defined".into()),
        ]
    }

    #[test]
    fn failed_group_is_fully_revealed() {
        for err in every_error() {
            let label = err.to_string();
            let mut set = RevealSet::default();
            set.reveal(2);
            let kept: Option<()> = settle(Err(err), |_| fall_back(&mut set, 8));
            assert!(kept.is_none(), "{label}");
            assert_eq!(set.len(), 8, "{label}");
            assert!((0..8).all(|i| set.is_revealed(i)), "{label}");
        }
    }

    #[test]
    fn failed_once_hook_shows_panel() {
        for err in every_error() {
            let mut seen = false;
            let kept: Option<()> = settle(Err(err), |_| seen = true);
            assert!(kept.is_none());
            assert!(seen);
        }
    }

    #[test]
    fn attached_observer_is_kept_without_fallback() {
        let mut set = RevealSet::default();
        let kept = settle(Ok(7_u8), |_| fall_back(&mut set, 8));
        assert_eq!(kept, Some(7));
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn errors_render_readably() {
        assert_eq!(
            RevealError::MissingElement("final-cta".into()).to_string(),
            "no element with id `final-cta`"
        );
        assert_eq!(
            RevealError::Observer("TypeError".into()).to_string(),
            "intersection observer failed: TypeError"
        );
    }
}
