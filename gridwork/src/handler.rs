//! Handler plumbing for widget events.
//!
//! This module provides:
//! - `Handler`: closure type for handlers
//! - `WidgetHandlers`: named callbacks passed into widget builders
//! - `HandlerContext`: what a handler receives when invoked
//! - `HandlerRegistry`: stores widget event handlers keyed by (element_id, event_type)
//!
//! Widgets register their own internal handlers at build time. When the host
//! dispatches an input event to an element, the registry closure runs first
//! (updating widget state), then forwards to the user callback with event data
//! describing what changed.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

// =============================================================================
// Handler Type
// =============================================================================

/// A handler closure that receives a HandlerContext.
///
/// The closure captures whatever state it needs at creation time; widgets
/// capture a clone of their `State<T>` so the handler can mutate it later.
pub type Handler = Arc<dyn Fn(&HandlerContext) + Send + Sync>;

/// Map of handler names to handlers, used for passing callbacks to widgets.
///
/// Standard handler names:
/// - `"on_activate"` - click, enter key, selection confirm
/// - `"on_change"` - value changed (checkbox, selection flag)
/// - `"on_focus"` - element gained focus
/// - `"on_blur"` - element lost focus
pub type WidgetHandlers = HashMap<&'static str, Handler>;

// =============================================================================
// Event Data
// =============================================================================

/// Event-specific data passed to handlers via HandlerContext.
///
/// This allows handlers to access data from the event that triggered them,
/// such as the new checked value after a checkbox toggle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EventData {
    /// No event data (default for activation events without a payload).
    #[default]
    None,
    /// A boolean control flipped.
    Toggle {
        /// The value after the toggle.
        selected: bool,
    },
    /// A grid row's selection flag changed.
    Selection {
        /// Stable textual key of the row (its id, or its index when the id
        /// is absent or not unique).
        key: String,
        /// The flag value after the change.
        selected: bool,
    },
}

impl EventData {
    /// Get the post-toggle value from a Toggle or Selection event.
    pub fn selected(&self) -> Option<bool> {
        match self {
            EventData::Toggle { selected } => Some(*selected),
            EventData::Selection { selected, .. } => Some(*selected),
            _ => None,
        }
    }

    /// Get the row key from a Selection event.
    pub fn selection_key(&self) -> Option<&str> {
        match self {
            EventData::Selection { key, .. } => Some(key),
            _ => None,
        }
    }
}

// =============================================================================
// HandlerContext
// =============================================================================

/// Context passed to a handler when it fires.
///
/// Carries the id of the element the event targeted, the event name it was
/// registered under, and any event data. Dispatch constructs the initial
/// context; widgets construct fresh contexts with a payload when forwarding
/// to user callbacks.
#[derive(Debug, Clone)]
pub struct HandlerContext {
    element_id: String,
    event: &'static str,
    event_data: EventData,
}

impl HandlerContext {
    /// Create a context with no event data.
    pub fn new(element_id: impl Into<String>, event: &'static str) -> Self {
        Self {
            element_id: element_id.into(),
            event,
            event_data: EventData::None,
        }
    }

    /// Create a context carrying event data.
    pub fn with_data(
        element_id: impl Into<String>,
        event: &'static str,
        event_data: EventData,
    ) -> Self {
        Self {
            element_id: element_id.into(),
            event,
            event_data,
        }
    }

    /// The id of the element the event targeted.
    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    /// The event name the handler was registered under.
    pub fn event_name(&self) -> &'static str {
        self.event
    }

    /// Get the event data.
    ///
    /// Returns the event-specific data passed when the handler was invoked.
    /// For example, `EventData::Toggle { selected }` for checkbox change
    /// handlers. Returns `EventData::None` if no event data was provided.
    pub fn event(&self) -> &EventData {
        &self.event_data
    }
}

// =============================================================================
// HandlerRegistry
// =============================================================================

/// Registry for widget event handlers.
///
/// Maps (element_id, event_type) to handler closures. Cleared before each
/// rebuild so handlers from previous element trees don't persist.
#[derive(Default, Clone)]
pub struct HandlerRegistry {
    handlers: Arc<RwLock<HashMap<(String, String), Handler>>>,
}

impl HandlerRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for an element event.
    ///
    /// # Arguments
    /// - `element_id`: The element's unique ID (from Element.id)
    /// - `event`: The event type (e.g., "on_activate", "on_change")
    /// - `handler`: The handler closure
    pub fn register(&self, element_id: &str, event: &str, handler: Handler) {
        if let Ok(mut handlers) = self.handlers.write() {
            handlers.insert((element_id.to_string(), event.to_string()), handler);
        }
    }

    /// Get a handler for an element event.
    pub fn get(&self, element_id: &str, event: &str) -> Option<Handler> {
        self.handlers
            .read()
            .ok()?
            .get(&(element_id.to_string(), event.to_string()))
            .cloned()
    }

    /// Clear all handlers.
    ///
    /// Called before a rebuild to remove handlers from previous element trees.
    pub fn clear(&self) {
        if let Ok(mut handlers) = self.handlers.write() {
            handlers.clear();
        }
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.handlers
            .read()
            .map(|h| h.is_empty())
            .unwrap_or(true)
    }

    /// Get the number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.read().map(|h| h.len()).unwrap_or(0)
    }
}

impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.len();
        f.debug_struct("HandlerRegistry")
            .field("handler_count", &count)
            .finish()
    }
}
