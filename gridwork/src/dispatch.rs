//! Event dispatch for widget handlers.
//!
//! Routes trellis events to handlers registered in a `HandlerRegistry`:
//! 1. Clicks activate the element under the cursor (`"on_activate"`)
//! 2. Space/Enter activate the focused element (`"on_activate"`)
//! 3. Focus and blur events notify the element (`"on_focus"` / `"on_blur"`)
//!
//! Dispatch constructs the initial context without event data. Widgets
//! forward to user callbacks with fresh contexts carrying `EventData`
//! describing what changed.

use trellis::{Event, Key};

use crate::handler::{HandlerContext, HandlerRegistry};

// =============================================================================
// DispatchResult
// =============================================================================

/// Result of event dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchResult {
    /// Event was not handled.
    NotHandled,
    /// Event ran a registered widget handler.
    HandledByWidget,
}

impl DispatchResult {
    pub fn is_handled(&self) -> bool {
        !matches!(self, DispatchResult::NotHandled)
    }
}

// =============================================================================
// Dispatch
// =============================================================================

/// Dispatch an event to the matching registered handler.
///
/// This is the main entry point for hosts: feed it every event produced by
/// `FocusState::process_events`. Events with no target, and targets with no
/// registered handler, are reported as `NotHandled`.
pub fn dispatch_event(event: &Event, registry: &HandlerRegistry) -> DispatchResult {
    match event {
        Event::Click {
            target: Some(id), ..
        } => run_handler(registry, id, "on_activate"),

        Event::Key {
            target: Some(id),
            key,
            modifiers,
        } => {
            if is_activation_key(*key) && modifiers.none() {
                run_handler(registry, id, "on_activate")
            } else {
                DispatchResult::NotHandled
            }
        }

        Event::Focus { target } => run_handler(registry, target, "on_focus"),
        Event::Blur { target } => run_handler(registry, target, "on_blur"),

        _ => DispatchResult::NotHandled,
    }
}

/// Space and Enter activate the focused element.
fn is_activation_key(key: Key) -> bool {
    matches!(key, Key::Enter | Key::Char(' '))
}

fn run_handler(registry: &HandlerRegistry, element_id: &str, event: &'static str) -> DispatchResult {
    let Some(handler) = registry.get(element_id, event) else {
        return DispatchResult::NotHandled;
    };
    log::debug!("[dispatch] {} {}", event, element_id);
    handler(&HandlerContext::new(element_id, event));
    DispatchResult::HandledByWidget
}
