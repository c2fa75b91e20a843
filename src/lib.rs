//! Status styling for daily-report kanban cards.
//!
//! This crate is UI-framework agnostic: it maps a report's workflow stage to
//! card class flags and a status text color, and provides the widget registry
//! board views use to look card widgets up by name. The `client` crate renders
//! the result with Leptos.

pub mod config;
pub mod presenter;
pub mod record;
pub mod registry;
pub mod state;

pub use config::{CardConfig, ClassScheme, ConfigError};
pub use presenter::{CardClass, StatusCardPresenter, TextColor, card_class, status_color};
pub use record::Record;
pub use registry::{
    CardWidget, RegistryError, STATUS_CARD_WIDGET, WidgetFactory, WidgetRegistry, register_status_card,
};
pub use state::{ParseStateError, ReportState};
