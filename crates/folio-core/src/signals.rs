//! Shared pointer and scroll signals.
//!
//! A single [`SignalBus`] is owned by the front end and handed to every
//! animation. Input handlers are the only writers; animations read copies at
//! the start of a tick, so a tick never observes a half-updated value.

use fnv::FnvHashMap;
use glam::Vec2;

/// Last known pointer state. `active == false` means the pointer left the
/// tracked surface; the coordinates are then stale and must not be used for
/// distance calculations.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSignal {
    pub x: f32,
    pub y: f32,
    pub active: bool,
}

impl PointerSignal {
    pub const INACTIVE: Self = Self {
        x: 0.0,
        y: 0.0,
        active: false,
    };

    #[inline]
    pub fn position(&self) -> Option<Vec2> {
        self.active.then(|| Vec2::new(self.x, self.y))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    #[default]
    Still,
    Down,
}

impl ScrollDirection {
    pub fn sign(self) -> i8 {
        match self {
            ScrollDirection::Up => -1,
            ScrollDirection::Still => 0,
            ScrollDirection::Down => 1,
        }
    }

    fn from_delta(delta: f64) -> Self {
        if delta > 0.0 {
            ScrollDirection::Down
        } else if delta < 0.0 {
            ScrollDirection::Up
        } else {
            ScrollDirection::Still
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollSignal {
    pub offset: f64,
    pub direction: ScrollDirection,
}

/// Payload shape emitted by the smooth-scroll service: `{scroll: {y}}`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SmoothScrollPayload {
    pub scroll_y: Option<f64>,
}

/// Either flavour of scroll event the front end can receive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollInput {
    Native(f64),
    /// Smooth-scroll event; `fallback_y` is the native offset used when the
    /// payload carries no usable position.
    Smooth {
        payload: SmoothScrollPayload,
        fallback_y: f64,
    },
}

impl ScrollInput {
    pub fn offset(&self) -> f64 {
        let raw = match *self {
            ScrollInput::Native(y) => y,
            ScrollInput::Smooth {
                payload,
                fallback_y,
            } => payload
                .scroll_y
                .filter(|y| y.is_finite())
                .unwrap_or(fallback_y),
        };
        if raw.is_finite() {
            raw
        } else {
            0.0
        }
    }
}

/// Where scroll events come from once readiness resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollSource {
    SmoothScroll,
    Native,
}

/// Why the page is being hidden, from `pagehide`'s `persisted` flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageHide {
    /// Entering the back/forward cache. The page may be restored later
    /// without the start hook running again, so everything must stay mounted.
    Cached,
    Unloading,
}

impl PageHide {
    pub fn from_persisted(persisted: bool) -> Self {
        if persisted {
            PageHide::Cached
        } else {
            PageHide::Unloading
        }
    }

    #[inline]
    pub fn disposes(self) -> bool {
        self == PageHide::Unloading
    }
}

type ReadyCallback = Box<dyn FnOnce(ScrollSource)>;

/// One-shot latch: resolves exactly once and runs every waiter with the
/// chosen source. Waiters registered after resolution run immediately.
#[derive(Default)]
pub struct Readiness {
    resolved: Option<ScrollSource>,
    waiters: Vec<ReadyCallback>,
}

impl Readiness {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source(&self) -> Option<ScrollSource> {
        self.resolved
    }

    pub fn on_ready(&mut self, f: impl FnOnce(ScrollSource) + 'static) {
        match self.resolved {
            Some(source) => f(source),
            None => self.waiters.push(Box::new(f)),
        }
    }

    /// Returns `false` if the latch had already resolved.
    pub fn resolve(&mut self, source: ScrollSource) -> bool {
        if self.resolved.is_some() {
            return false;
        }
        self.resolved = Some(source);
        log::info!("[scroll] ready via {:?}", source);
        for waiter in self.waiters.drain(..) {
            waiter(source);
        }
        true
    }
}

pub type ListenerId = u32;

/// Authoritative owner of the process-wide input signals.
#[derive(Default)]
pub struct SignalBus {
    live: bool,
    pointer: PointerSignal,
    scroll: ScrollSignal,
    next_listener: ListenerId,
    scroll_listeners: FnvHashMap<ListenerId, Box<dyn FnMut(ScrollSignal, f64)>>,
}

impl SignalBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn init(&mut self) {
        self.live = true;
        self.pointer = PointerSignal::INACTIVE;
    }

    /// Drops all listeners and parks the pointer. Safe to call twice.
    pub fn dispose(&mut self) {
        self.live = false;
        self.pointer = PointerSignal::INACTIVE;
        self.scroll_listeners.clear();
    }

    #[inline]
    pub fn is_live(&self) -> bool {
        self.live
    }

    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        if !self.live {
            return;
        }
        if !(x.is_finite() && y.is_finite()) {
            self.pointer = PointerSignal::INACTIVE;
            return;
        }
        self.pointer = PointerSignal { x, y, active: true };
    }

    pub fn pointer_left(&mut self) {
        self.pointer.active = false;
    }

    /// Normalizes either scroll flavour and notifies raw-offset listeners.
    pub fn scrolled(&mut self, input: ScrollInput) {
        if !self.live {
            return;
        }
        let offset = input.offset();
        let delta = offset - self.scroll.offset;
        self.scroll = ScrollSignal {
            offset,
            direction: ScrollDirection::from_delta(delta),
        };
        let signal = self.scroll;
        for listener in self.scroll_listeners.values_mut() {
            listener(signal, delta);
        }
    }

    #[inline]
    pub fn pointer(&self) -> PointerSignal {
        self.pointer
    }

    #[inline]
    pub fn scroll(&self) -> ScrollSignal {
        self.scroll
    }

    /// Registers a callback run on every scroll event with the new signal
    /// and the raw offset change.
    pub fn on_scroll(&mut self, f: impl FnMut(ScrollSignal, f64) + 'static) -> ListenerId {
        let id = self.next_listener;
        self.next_listener = self.next_listener.wrapping_add(1);
        self.scroll_listeners.insert(id, Box::new(f));
        id
    }

    pub fn off_scroll(&mut self, id: ListenerId) -> bool {
        self.scroll_listeners.remove(&id).is_some()
    }
}
