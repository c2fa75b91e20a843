//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render board cards while reading the widget registry and card
//! configuration from Leptos context providers.

pub mod report_kanban_card;
