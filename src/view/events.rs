//! Typed event bus for view-level notifications.

use std::collections::VecDeque;
use std::fmt;

/// Notifications published by the app view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewEvent {
    /// Every first-load animation finished; controllers may start.
    AppLoad,
    /// The user opened or closed the footer.
    FooterToggled {
        /// New open state.
        open: bool,
    },
    /// The user dragged the footer to a new (clamped) height.
    FooterResized {
        /// New preferred height.
        height: f64,
    },
    /// Theater mode was switched.
    TheaterModeChanged {
        /// New theater state.
        on: bool,
    },
}

impl ViewEvent {
    /// Dotted event name for logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::AppLoad => "app.load",
            Self::FooterToggled { .. } => "footer.toggle",
            Self::FooterResized { .. } => "footer.resize",
            Self::TheaterModeChanged { .. } => "theater.change",
        }
    }
}

type Listener = Box<dyn FnMut(&ViewEvent)>;

/// Subscribers are called synchronously on emit. While nobody is subscribed,
/// events are queued instead so hosts that poll can [`drain`](Self::drain)
/// them.
#[derive(Default)]
pub struct ViewEvents {
    listeners: Vec<Listener>,
    queue: VecDeque<ViewEvent>,
}

impl ViewEvents {
    /// Empty bus.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener called for every subsequent event.
    pub fn subscribe(&mut self, listener: impl FnMut(&ViewEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Publish an event to listeners, or queue it when there are none.
    pub fn emit(&mut self, event: ViewEvent) {
        log::debug!("view event {}", event.name());
        if self.listeners.is_empty() {
            self.queue.push_back(event);
            return;
        }
        for listener in &mut self.listeners {
            listener(&event);
        }
    }

    /// Take every queued event, oldest first.
    pub fn drain(&mut self) -> impl Iterator<Item = ViewEvent> + '_ {
        self.queue.drain(..)
    }

    /// Number of queued events.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}

impl fmt::Debug for ViewEvents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewEvents")
            .field("listeners", &self.listeners.len())
            .field("queue", &self.queue)
            .finish()
    }
}
