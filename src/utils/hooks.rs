use std::cell::RefCell;

use yew::prelude::*;

use crate::utils::scroll::{ActiveIndex, ScrollGeometry};
use crate::utils::viewport::ViewportObserver;

/// The page-wide viewport observer, if one is provided above this component.
#[hook]
pub fn use_viewport() -> Option<ViewportObserver> {
    use_context::<ViewportObserver>()
}

/// Index of the item in `section_id` the reader is currently on, out of
/// `count` items laid out top to bottom. Starts at 0.
#[hook]
pub fn use_active_index(section_id: &'static str, count: usize) -> usize {
    let active = use_state_eq(|| 0usize);
    let viewport = use_viewport();
    {
        let active = active.clone();
        use_effect_with_deps(
            move |(viewport, count)| {
                let selector = RefCell::new(ActiveIndex::with_active(*active, *count));
                let subscription = viewport.as_ref().map(|viewport| {
                    let subscription = viewport.subscribe(move |source| {
                        let mut selector = selector.borrow_mut();
                        if selector.observe(ScrollGeometry::measure(source, section_id)) {
                            active.set(selector.active());
                        }
                    });
                    viewport.refresh();
                    subscription
                });
                move || drop(subscription)
            },
            (viewport, count),
        );
    }
    *active
}

/// True once the page has scrolled further than `threshold` pixels.
#[hook]
pub fn use_scrolled_past(threshold: f64) -> bool {
    let scrolled = use_state_eq(|| false);
    let viewport = use_viewport();
    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |viewport| {
                let subscription = viewport.as_ref().map(|viewport| {
                    let subscription = viewport.subscribe(move |source| {
                        scrolled.set(source.scroll_top() > threshold);
                    });
                    viewport.refresh();
                    subscription
                });
                move || drop(subscription)
            },
            viewport,
        );
    }
    *scrolled
}
