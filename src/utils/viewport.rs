use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions, Window};

use crate::utils::throttle::{Gate, Throttle};

const WINDOW_EVENTS: [&str; 2] = ["scroll", "resize"];

/// Read access to scroll position and element geometry.
#[cfg_attr(test, mockall::automock)]
pub trait ViewportSource {
    fn scroll_top(&self) -> f64;
    fn viewport_height(&self) -> f64;
    /// Top offset and height of the element with this id, if it is mounted.
    fn element_bounds(&self, id: &str) -> Option<(f64, f64)>;
    fn now_ms(&self) -> f64;
}

/// `ViewportSource` backed by the browser window.
pub struct WindowViewport;

impl ViewportSource for WindowViewport {
    fn scroll_top(&self) -> f64 {
        match web_sys::window().map(|w| w.scroll_y()) {
            Some(Ok(y)) => y,
            _ => {
                log::debug!("scroll offset unavailable, using 0");
                0.0
            }
        }
    }

    fn viewport_height(&self) -> f64 {
        web_sys::window()
            .and_then(|w| w.inner_height().ok())
            .and_then(|h| h.as_f64())
            .unwrap_or_else(|| {
                log::debug!("viewport height unavailable, using 0");
                0.0
            })
    }

    fn element_bounds(&self, id: &str) -> Option<(f64, f64)> {
        let element = web_sys::window()?.document()?.get_element_by_id(id)?;
        let element: HtmlElement = element.dyn_into().ok()?;
        Some((f64::from(element.offset_top()), f64::from(element.offset_height())))
    }

    fn now_ms(&self) -> f64 {
        web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or(0.0)
    }
}

/// Smooth-scrolls the element with `id` into view. Does nothing if it is not
/// mounted.
pub fn scroll_to_section(id: &str) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));
    match element {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => log::debug!("no section #{} to scroll to", id),
    }
}

type Listener = Rc<dyn Fn(&dyn ViewportSource)>;

struct Shared {
    source: Box<dyn ViewportSource>,
    listeners: RefCell<Vec<(usize, Listener)>>,
    next_id: Cell<usize>,
    throttle: RefCell<Throttle>,
}

/// Fans window scroll and resize events out to subscribed components.
///
/// One observer is created at the application root and handed down through a
/// `ContextProvider`, so the page carries a single pair of window listeners no
/// matter how many components track scrolling.
#[derive(Clone)]
pub struct ViewportObserver {
    shared: Rc<Shared>,
}

impl PartialEq for ViewportObserver {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.shared, &other.shared)
    }
}

impl ViewportObserver {
    pub fn new(source: impl ViewportSource + 'static, throttle_ms: u32) -> Self {
        Self {
            shared: Rc::new(Shared {
                source: Box::new(source),
                listeners: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
                throttle: RefCell::new(Throttle::new(throttle_ms)),
            }),
        }
    }

    /// Registers `listener` until the returned `Subscription` is dropped.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&dyn ViewportSource) + 'static,
    {
        let id = self.shared.next_id.get();
        self.shared.next_id.set(id + 1);
        self.shared
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));
        Subscription {
            shared: Rc::downgrade(&self.shared),
            id,
        }
    }

    pub fn listener_count(&self) -> usize {
        self.shared.listeners.borrow().len()
    }

    /// Notifies every listener right away, bypassing the throttle.
    pub fn refresh(&self) {
        // Snapshot so listeners can (un)subscribe while being notified.
        let listeners: Vec<Listener> = self
            .shared
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in listeners {
            listener(self.shared.source.as_ref());
        }
    }

    /// Handles one raw window event.
    pub fn on_event(&self) -> Gate {
        let now = self.shared.source.now_ms();
        let gate = self.shared.throttle.borrow_mut().poll(now);
        if gate == Gate::Run {
            self.refresh();
        }
        gate
    }

    /// Runs the trailing notification scheduled by a deferred event.
    pub fn flush_trailing(&self) {
        let now = self.shared.source.now_ms();
        self.shared.throttle.borrow_mut().complete_trailing(now);
        self.refresh();
    }

    /// Installs the window scroll and resize listeners. They stay attached
    /// until the returned binding is dropped.
    pub fn attach(&self) -> WindowBinding {
        let Some(window) = web_sys::window() else {
            log::warn!("no window available, viewport listeners not attached");
            return WindowBinding::detached();
        };

        let trailing: Rc<RefCell<Option<Timeout>>> = Rc::default();
        let callback = Closure::<dyn Fn()>::new({
            let observer = self.clone();
            let trailing = trailing.clone();
            move || {
                if let Gate::Defer(wait) = observer.on_event() {
                    let observer = observer.clone();
                    let timeout = Timeout::new(wait, move || observer.flush_trailing());
                    *trailing.borrow_mut() = Some(timeout);
                }
            }
        });

        for event in WINDOW_EVENTS {
            if let Err(err) =
                window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            {
                log::warn!("failed to attach {} listener: {:?}", event, err);
            }
        }
        log::debug!("viewport observer attached, {} listeners", self.listener_count());

        WindowBinding {
            window: Some(window),
            callback: Some(callback),
            trailing,
        }
    }
}

/// Keeps a listener registered with a `ViewportObserver`.
pub struct Subscription {
    shared: Weak<Shared>,
    id: usize,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(shared) = self.shared.upgrade() {
            shared
                .listeners
                .borrow_mut()
                .retain(|(id, _)| *id != self.id);
        }
    }
}

/// Window listeners installed by `ViewportObserver::attach`.
pub struct WindowBinding {
    window: Option<Window>,
    callback: Option<Closure<dyn Fn()>>,
    trailing: Rc<RefCell<Option<Timeout>>>,
}

impl WindowBinding {
    fn detached() -> Self {
        Self {
            window: None,
            callback: None,
            trailing: Rc::default(),
        }
    }
}

impl Drop for WindowBinding {
    fn drop(&mut self) {
        if let (Some(window), Some(callback)) = (&self.window, &self.callback) {
            for event in WINDOW_EVENTS {
                let _ = window
                    .remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
            }
        }
        // cancels a pending trailing run
        self.trailing.borrow_mut().take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::scroll::{ActiveIndex, ScrollGeometry};

    fn clock(times: Vec<f64>) -> MockViewportSource {
        let mut times = times.into_iter();
        let mut source = MockViewportSource::new();
        source
            .expect_now_ms()
            .returning(move || times.next().unwrap_or(0.0));
        source
    }

    fn counter(observer: &ViewportObserver) -> (Rc<Cell<usize>>, Subscription) {
        let hits = Rc::new(Cell::new(0));
        let subscription = observer.subscribe({
            let hits = hits.clone();
            move |_| hits.set(hits.get() + 1)
        });
        (hits, subscription)
    }

    #[test]
    fn refresh_reaches_every_subscriber() {
        let observer = ViewportObserver::new(MockViewportSource::new(), 50);
        let (first, _a) = counter(&observer);
        let (second, _b) = counter(&observer);
        observer.refresh();
        assert_eq!(first.get(), 1);
        assert_eq!(second.get(), 1);
    }

    #[test]
    fn dropped_subscription_stops_notifications() {
        let observer = ViewportObserver::new(MockViewportSource::new(), 50);
        let (hits, subscription) = counter(&observer);
        observer.refresh();
        drop(subscription);
        observer.refresh();
        assert_eq!(hits.get(), 1);
        assert_eq!(observer.listener_count(), 0);
    }

    #[test]
    fn burst_of_events_notifies_leading_and_trailing_only() {
        let observer = ViewportObserver::new(clock(vec![0.0, 10.0, 20.0, 30.0, 50.0]), 50);
        let (hits, _subscription) = counter(&observer);

        assert_eq!(observer.on_event(), Gate::Run);
        assert_eq!(observer.on_event(), Gate::Defer(40));
        assert_eq!(observer.on_event(), Gate::Pending);
        assert_eq!(observer.on_event(), Gate::Pending);
        assert_eq!(hits.get(), 1);

        observer.flush_trailing();
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn listener_may_unsubscribe_during_notification() {
        let observer = ViewportObserver::new(MockViewportSource::new(), 50);
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::default();
        let subscription = observer.subscribe({
            let slot = slot.clone();
            move |_| {
                slot.borrow_mut().take();
            }
        });
        *slot.borrow_mut() = Some(subscription);

        observer.refresh();
        assert_eq!(observer.listener_count(), 0);
    }

    #[test]
    fn subscription_outliving_observer_is_harmless() {
        let observer = ViewportObserver::new(MockViewportSource::new(), 50);
        let (_hits, subscription) = counter(&observer);
        drop(observer);
        drop(subscription);
    }

    #[test]
    fn subscriber_tracks_active_service_from_fake_source() {
        let mut source = MockViewportSource::new();
        source.expect_scroll_top().return_const(100.0);
        source.expect_viewport_height().return_const(800.0);
        source
            .expect_element_bounds()
            .return_const(Some((0.0_f64, 1200.0_f64)));

        let observer = ViewportObserver::new(source, 50);
        let active = Rc::new(RefCell::new(ActiveIndex::with_active(0, 6)));
        let _subscription = observer.subscribe({
            let active = active.clone();
            move |source| {
                active
                    .borrow_mut()
                    .observe(ScrollGeometry::measure(source, "services"));
            }
        });

        observer.refresh();
        assert_eq!(active.borrow().active(), 2);
    }

    #[test]
    fn unmounted_section_leaves_index_alone() {
        let mut source = MockViewportSource::new();
        source.expect_element_bounds().return_const(None::<(f64, f64)>);

        let observer = ViewportObserver::new(source, 50);
        let active = Rc::new(RefCell::new(ActiveIndex::with_active(3, 6)));
        let _subscription = observer.subscribe({
            let active = active.clone();
            move |source| {
                active
                    .borrow_mut()
                    .observe(ScrollGeometry::measure(source, "services"));
            }
        });

        observer.refresh();
        assert_eq!(active.borrow().active(), 3);
    }
}
