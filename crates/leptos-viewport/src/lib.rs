//! Leptos Viewport Utilities
//!
//! Subscriptions for viewport intersection and per-frame animation.
//! Both return handles that own their JS callbacks, so callers decide
//! whether to keep, cancel, or leak them.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

/// Fraction of `duration_ms` elapsed between `start` and `now`, clamped to [0, 1]
pub fn progress(start: f64, now: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return 1.0;
    }
    ((now - start) / duration_ms).clamp(0.0, 1.0)
}

// ========================
// Intersection
// ========================

type EntryCallback = Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>;

/// Live intersection observer plus the closure it calls into
pub struct IntersectionSubscription {
    observer: web_sys::IntersectionObserver,
    _callback: EntryCallback,
}

impl IntersectionSubscription {
    /// Stop observing every element
    pub fn disconnect(&self) {
        self.observer.disconnect();
    }

    /// Keep the observer alive for the rest of the page lifetime
    pub fn leak(self) {
        std::mem::forget(self);
    }
}

/// Observe `elements` and call `on_visible` the first time each one
/// intersects at `threshold`. The element is unobserved before the callback
/// runs, so it fires at most once per element.
pub fn observe_once<F>(
    elements: &[web_sys::Element],
    threshold: f64,
    mut on_visible: F,
) -> Result<IntersectionSubscription, JsValue>
where
    F: FnMut(&web_sys::Element) + 'static,
{
    let callback: EntryCallback = Closure::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    observer.unobserve(&target);
                    on_visible(&target);
                }
            }
        },
    );

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer = web_sys::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    )?;

    for el in elements {
        observer.observe(el);
    }

    Ok(IntersectionSubscription { observer, _callback: callback })
}

// ========================
// Animation Frames
// ========================

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Cancellation token for a running frame loop.
///
/// Dropping the handle does not stop the animation.
#[derive(Clone)]
pub struct AnimationHandle {
    cancelled: Rc<Cell<bool>>,
    frame_id: Rc<Cell<Option<i32>>>,
    slot: FrameSlot,
}

impl AnimationHandle {
    /// Stop the loop before its next frame
    pub fn cancel(&self) {
        self.cancelled.set(true);
        if let (Some(id), Some(win)) = (self.frame_id.take(), web_sys::window()) {
            let _ = win.cancel_animation_frame(id);
        }
        let _ = self.slot.borrow_mut().take();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

/// Run `on_progress` once per animation frame with the elapsed fraction of
/// `duration_ms`. The first frame reports 0.0, the last exactly 1.0.
pub fn animate<F>(duration_ms: f64, mut on_progress: F) -> Option<AnimationHandle>
where
    F: FnMut(f64) + 'static,
{
    let win = web_sys::window()?;
    let slot: FrameSlot = Rc::new(RefCell::new(None));
    let handle = AnimationHandle {
        cancelled: Rc::new(Cell::new(false)),
        frame_id: Rc::new(Cell::new(None)),
        slot: slot.clone(),
    };
    let slot_inner = slot.clone();
    let token = handle.clone();
    let started_at: Cell<Option<f64>> = Cell::new(None);

    *slot.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
        if token.is_cancelled() {
            let _ = slot_inner.borrow_mut().take();
            return;
        }
        let start = match started_at.get() {
            Some(start) => start,
            None => {
                started_at.set(Some(timestamp));
                timestamp
            }
        };

        let p = progress(start, timestamp, duration_ms);
        on_progress(p);

        if p < 1.0 {
            if let (Some(win), Some(cb)) = (web_sys::window(), slot_inner.borrow().as_ref()) {
                token.frame_id.set(win.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
            }
        } else {
            token.frame_id.set(None);
            let _ = slot_inner.borrow_mut().take();
        }
    }));

    if let Some(cb) = slot.borrow().as_ref() {
        handle.frame_id.set(win.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
    }
    Some(handle)
}
