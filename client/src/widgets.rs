//! Client-side widget registration.
//!
//! DESIGN
//! ======
//! Board views call [`provide_widgets`] once when they mount; nothing is
//! registered implicitly at load time.

use std::sync::Arc;

use leptos::prelude::*;
use report_cards::{CardConfig, WidgetRegistry, register_status_card};

#[cfg(test)]
#[path = "widgets_test.rs"]
mod widgets_test;

/// Register every card widget this crate ships.
pub fn register_widgets(registry: &mut WidgetRegistry) {
    register_status_card(registry);
}

/// Registry with all client widgets registered.
pub fn widget_registry() -> WidgetRegistry {
    let mut registry = WidgetRegistry::new();
    register_widgets(&mut registry);
    registry
}

/// Provide the widget registry and card config to descendant components.
pub fn provide_widgets(config: CardConfig) {
    provide_context(Arc::new(widget_registry()));
    provide_context(config);
}
