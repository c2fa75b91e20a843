//! Named widget factories for kanban card views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Board views refer to card widgets by a string key. The registry is a plain
//! value owned by whoever renders the board; widgets are added through explicit
//! registration calls such as [`register_status_card`], never at load time.

use std::collections::BTreeMap;
use std::fmt;

use crate::presenter::{CardClass, TextColor, build_status_card};
use crate::record::Record;

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

/// Key under which the status card widget is registered.
pub const STATUS_CARD_WIDGET: &str = "project_report_kanban";

/// Error returned by [`WidgetRegistry::create`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("no widget registered under {key:?}")]
    UnknownWidget { key: String },
}

/// Styling surface a card widget exposes to the view template.
pub trait CardWidget {
    /// Stable name identifying the widget implementation.
    fn widget_name(&self) -> &'static str;

    fn card_class(&self) -> CardClass;

    fn status_color(&self) -> TextColor;

    /// Label for the status badge, `None` when the record has no known stage.
    fn status_label(&self) -> Option<&'static str>;

    fn title(&self) -> String;
}

/// Builds a widget bound to one record.
pub type WidgetFactory = for<'a> fn(&'a Record) -> Box<dyn CardWidget + 'a>;

/// Injectable map of widget keys to factories.
#[derive(Clone, Default)]
pub struct WidgetRegistry {
    entries: BTreeMap<String, WidgetFactory>,
}

impl WidgetRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `factory` under `key`, replacing any previous entry.
    ///
    /// Returns the replaced factory, if there was one.
    pub fn add(&mut self, key: impl Into<String>, factory: WidgetFactory) -> Option<WidgetFactory> {
        let key = key.into();
        let previous = self.entries.insert(key.clone(), factory);
        if previous.is_some() {
            tracing::debug!(%key, "widget registration replaced");
        } else {
            tracing::debug!(%key, "widget registered");
        }
        previous
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<WidgetFactory> {
        self.entries.get(key).copied()
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<WidgetFactory> {
        self.entries.remove(key)
    }

    /// Registered keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Instantiate the widget registered under `key` for `record`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownWidget`] when `key` is not registered.
    pub fn create<'a>(&self, key: &str, record: &'a Record) -> Result<Box<dyn CardWidget + 'a>, RegistryError> {
        let factory = self
            .get(key)
            .ok_or_else(|| RegistryError::UnknownWidget { key: key.to_owned() })?;
        Ok(factory(record))
    }
}

impl fmt::Debug for WidgetRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.keys()).finish()
    }
}

/// Register the status card presenter under [`STATUS_CARD_WIDGET`].
///
/// Calling this again simply replaces the entry with an identical one.
pub fn register_status_card(registry: &mut WidgetRegistry) {
    registry.add(STATUS_CARD_WIDGET, build_status_card);
}
