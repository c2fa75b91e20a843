//! # client
//!
//! Leptos components for daily-report kanban boards. Card styling comes from
//! the `report-cards` crate; this crate registers its widgets and renders them.

pub mod components;
pub mod widgets;
