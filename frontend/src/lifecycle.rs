use std::cell::Cell;

use gloo_timers::callback::Interval;
use log::{debug, info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::Callback;

use crate::config;
use crate::countdown::{Clock, Countdown, CountdownEngine};
use crate::document::{inject_metadata, DocumentSink};

/// Releases whatever it guards when dropped.
#[must_use = "dropping a subscription cancels it immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self { release: Some(Box::new(release)) }
    }

    pub fn noop() -> Self {
        Self { release: None }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

pub trait Scheduler {
    fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> Subscription;
}

pub trait ScrollSource {
    /// `on_scroll` receives the window's vertical offset in pixels.
    fn subscribe(&self, on_scroll: Box<dyn FnMut(f64)>) -> Subscription;
}

#[derive(Clone, Copy, Default)]
pub struct IntervalScheduler;

impl Scheduler for IntervalScheduler {
    fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> Subscription {
        let interval = Interval::new(period_ms, tick);
        // Dropping the gloo handle clears the interval
        Subscription::new(move || drop(interval))
    }
}

#[derive(Clone, Copy, Default)]
pub struct WindowScroll;

impl ScrollSource for WindowScroll {
    fn subscribe(&self, mut on_scroll: Box<dyn FnMut(f64)>) -> Subscription {
        let Some(window) = web_sys::window() else {
            warn!("No window available, scroll observer not attached");
            return Subscription::noop();
        };

        let window_clone = window.clone();
        let scroll_callback = Closure::wrap(Box::new(move || {
            on_scroll(window_clone.scroll_y().unwrap_or(0.0));
        }) as Box<dyn FnMut()>);

        let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());

        Subscription::new(move || {
            let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
        })
    }
}

pub struct SessionCallbacks {
    pub on_scrolled: Callback<bool>,
    pub on_tick: Callback<Countdown>,
}

/// Mounted page effects: metadata written once, scroll observer and countdown
/// ticker held until the session is dropped.
pub struct PageSession {
    _scroll: Subscription,
    _ticker: Option<Subscription>,
}

impl PageSession {
    pub fn mount<C: Clock + 'static>(
        document: &dyn DocumentSink,
        scroll: &dyn ScrollSource,
        scheduler: &dyn Scheduler,
        engine: Option<CountdownEngine<C>>,
        callbacks: SessionCallbacks,
    ) -> Self {
        let SessionCallbacks { on_scrolled, on_tick } = callbacks;

        inject_metadata(document);

        let scrolled = Cell::new(false);
        let scroll = scroll.subscribe(Box::new(move |offset| {
            let past = offset > config::SCROLL_THRESHOLD_PX;
            if scrolled.replace(past) != past {
                on_scrolled.emit(past);
            }
        }));

        let ticker = match engine {
            Some(engine) => Some(scheduler.every(
                config::COUNTDOWN_TICK_MS,
                Box::new(move || on_tick.emit(engine.remaining())),
            )),
            None => {
                warn!("Launch date could not be resolved, countdown stays at zero");
                None
            }
        };

        info!("Landing page session mounted");
        Self { _scroll: scroll, _ticker: ticker }
    }
}

impl Drop for PageSession {
    fn drop(&mut self) {
        debug!("Landing page session torn down");
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::document::testing::MemoryDocument;

    type Slots<T> = Rc<RefCell<Vec<Option<T>>>>;

    fn register<T: 'static>(slots: &Slots<T>, entry: T) -> Subscription {
        let id = {
            let mut slots = slots.borrow_mut();
            slots.push(Some(entry));
            slots.len() - 1
        };
        let slots = Rc::clone(slots);
        Subscription::new(move || slots.borrow_mut()[id] = None)
    }

    fn live<T>(slots: &Slots<T>) -> usize {
        slots.borrow().iter().filter(|slot| slot.is_some()).count()
    }

    #[derive(Clone, Default)]
    struct ManualScheduler {
        ticks: Slots<Box<dyn FnMut()>>,
    }

    impl ManualScheduler {
        fn fire(&self) {
            for tick in self.ticks.borrow_mut().iter_mut().flatten() {
                tick();
            }
        }
    }

    impl Scheduler for ManualScheduler {
        fn every(&self, _period_ms: u32, tick: Box<dyn FnMut()>) -> Subscription {
            register(&self.ticks, tick)
        }
    }

    #[derive(Clone, Default)]
    struct ManualScroll {
        listeners: Slots<Box<dyn FnMut(f64)>>,
    }

    impl ManualScroll {
        fn scroll_to(&self, offset: f64) {
            for listener in self.listeners.borrow_mut().iter_mut().flatten() {
                listener(offset);
            }
        }
    }

    impl ScrollSource for ManualScroll {
        fn subscribe(&self, on_scroll: Box<dyn FnMut(f64)>) -> Subscription {
            register(&self.listeners, on_scroll)
        }
    }

    #[derive(Clone, Default)]
    struct ManualClock(Rc<Cell<i64>>);

    impl ManualClock {
        fn advance(&self, ms: i64) {
            self.0.set(self.0.get() + ms);
        }
    }

    impl Clock for ManualClock {
        fn now_millis(&self) -> i64 {
            self.0.get()
        }
    }

    struct Harness {
        document: MemoryDocument,
        scheduler: ManualScheduler,
        scroll: ManualScroll,
        clock: ManualClock,
        scrolled: Rc<RefCell<Vec<bool>>>,
        ticks: Rc<RefCell<Vec<Countdown>>>,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                document: MemoryDocument::default(),
                scheduler: ManualScheduler::default(),
                scroll: ManualScroll::default(),
                clock: ManualClock::default(),
                scrolled: Rc::default(),
                ticks: Rc::default(),
            }
        }

        fn mount(&self, target_ms: i64) -> PageSession {
            let scrolled = Rc::clone(&self.scrolled);
            let ticks = Rc::clone(&self.ticks);
            PageSession::mount(
                &self.document,
                &self.scroll,
                &self.scheduler,
                Some(CountdownEngine::new(target_ms, self.clock.clone())),
                SessionCallbacks {
                    on_scrolled: Callback::from(move |past| scrolled.borrow_mut().push(past)),
                    on_tick: Callback::from(move |remaining| ticks.borrow_mut().push(remaining)),
                },
            )
        }
    }

    #[test]
    fn mount_injects_metadata_once() {
        let harness = Harness::new();
        let _session = harness.mount(0);
        let _again = harness.mount(0);

        assert_eq!(harness.document.icon_links.borrow().len(), 1);
        assert_eq!(*harness.document.title.borrow(), config::PAGE_TITLE);
    }

    #[test]
    fn scroll_threshold_flips_once_per_crossing() {
        let harness = Harness::new();
        let _session = harness.mount(0);

        for offset in [0.0, 10.0, 20.0, 20.0, 20.5, 40.0, 300.0, 21.0, 20.0, 5.0, 0.0] {
            harness.scroll.scroll_to(offset);
        }

        assert_eq!(*harness.scrolled.borrow(), vec![true, false]);
    }

    #[test]
    fn exactly_twenty_pixels_is_not_scrolled() {
        let harness = Harness::new();
        let _session = harness.mount(0);

        harness.scroll.scroll_to(20.0);
        assert!(harness.scrolled.borrow().is_empty());
    }

    #[test]
    fn each_tick_publishes_the_remaining_time() {
        let harness = Harness::new();
        let _session = harness.mount(90_000);

        harness.scheduler.fire();
        harness.clock.advance(1_000);
        harness.scheduler.fire();
        harness.clock.advance(100_000);
        harness.scheduler.fire();

        let ticks = harness.ticks.borrow();
        assert_eq!(ticks[0], Countdown { days: 0, hours: 0, minutes: 1, seconds: 30 });
        assert_eq!(ticks[1], Countdown { days: 0, hours: 0, minutes: 1, seconds: 29 });
        assert_eq!(ticks[2], Countdown { days: -1, hours: -1, minutes: -1, seconds: -11 });
    }

    #[test]
    fn nothing_fires_after_teardown() {
        let harness = Harness::new();
        let session = harness.mount(60_000);

        harness.scheduler.fire();
        harness.scroll.scroll_to(100.0);
        assert_eq!(harness.ticks.borrow().len(), 1);
        assert_eq!(harness.scrolled.borrow().len(), 1);

        drop(session);
        assert_eq!(live(&harness.scheduler.ticks), 0);
        assert_eq!(live(&harness.scroll.listeners), 0);

        harness.clock.advance(5_000);
        harness.scheduler.fire();
        harness.scroll.scroll_to(0.0);
        assert_eq!(harness.ticks.borrow().len(), 1);
        assert_eq!(harness.scrolled.borrow().len(), 1);
    }

    #[test]
    fn unresolved_launch_date_skips_the_ticker() {
        let harness = Harness::new();
        let _session = PageSession::mount::<ManualClock>(
            &harness.document,
            &harness.scroll,
            &harness.scheduler,
            None,
            SessionCallbacks {
                on_scrolled: Callback::noop(),
                on_tick: Callback::noop(),
            },
        );

        assert_eq!(live(&harness.scheduler.ticks), 0);
        assert_eq!(live(&harness.scroll.listeners), 1);
    }

    #[test]
    fn subscription_releases_exactly_once() {
        let released = Rc::new(Cell::new(0));
        let counter = Rc::clone(&released);
        drop(Subscription::new(move || counter.set(counter.get() + 1)));
        drop(Subscription::noop());
        assert_eq!(released.get(), 1);
    }
}
