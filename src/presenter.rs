//! Status card presenter: maps a report's workflow stage to card styling.
//!
//! DESIGN
//! ======
//! Both mappings are pure functions of the stage. An unknown or missing stage
//! gets no border emphasis from [`card_class`] but an explicit muted color from
//! [`status_color`]; the two fallbacks stay distinct.

use serde::{Deserialize, Serialize};

use crate::config::ClassScheme;
use crate::record::Record;
use crate::registry::CardWidget;
use crate::state::ReportState;

#[cfg(test)]
#[path = "presenter_test.rs"]
mod presenter_test;

/// Name reported by [`StatusCardPresenter`] through [`CardWidget::widget_name`].
pub const STATUS_CARD_PRESENTER: &str = "StatusCardPresenter";

/// Class flags for a kanban card. Serializes to the class-name → bool map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardClass {
    #[serde(rename = "card-base")]
    pub base: bool,
    #[serde(rename = "card-clickable")]
    pub clickable: bool,
    #[serde(rename = "border-draft")]
    pub border_draft: bool,
    #[serde(rename = "border-submitted")]
    pub border_submitted: bool,
    #[serde(rename = "border-approved")]
    pub border_approved: bool,
    #[serde(rename = "border-rejected")]
    pub border_rejected: bool,
}

impl CardClass {
    /// Class names paired with their flag, in a fixed order.
    #[must_use]
    pub fn entries(&self, scheme: ClassScheme) -> [(&'static str, bool); 6] {
        let names = class_names(scheme);
        [
            (names[0], self.base),
            (names[1], self.clickable),
            (names[2], self.border_draft),
            (names[3], self.border_submitted),
            (names[4], self.border_approved),
            (names[5], self.border_rejected),
        ]
    }

    /// Space-separated list of the enabled class names.
    #[must_use]
    pub fn class_list(&self, scheme: ClassScheme) -> String {
        self.entries(scheme)
            .into_iter()
            .filter(|(_, on)| *on)
            .map(|(name, _)| name)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The stage whose border is highlighted, if any.
    #[must_use]
    pub fn border_state(&self) -> Option<ReportState> {
        [
            (self.border_draft, ReportState::Draft),
            (self.border_submitted, ReportState::Submitted),
            (self.border_approved, ReportState::Approved),
            (self.border_rejected, ReportState::Rejected),
        ]
        .into_iter()
        .find_map(|(on, state)| on.then_some(state))
    }
}

fn class_names(scheme: ClassScheme) -> [&'static str; 6] {
    match scheme {
        ClassScheme::Semantic => [
            "card-base",
            "card-clickable",
            "border-draft",
            "border-submitted",
            "border-approved",
            "border-rejected",
        ],
        ClassScheme::Bootstrap => [
            "o_kanban_card",
            "o_kanban_global_click",
            "border-primary",
            "border-warning",
            "border-success",
            "border-danger",
        ],
    }
}

/// Text color for the status label.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextColor {
    #[default]
    Muted,
    Warning,
    Success,
    Danger,
}

impl TextColor {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Muted => "muted",
            Self::Warning => "warning",
            Self::Success => "success",
            Self::Danger => "danger",
        }
    }

    /// CSS class for this color under `scheme`.
    #[must_use]
    pub fn css_class(self, scheme: ClassScheme) -> &'static str {
        match (scheme, self) {
            (ClassScheme::Semantic, color) => color.as_str(),
            (ClassScheme::Bootstrap, Self::Muted) => "text-muted",
            (ClassScheme::Bootstrap, Self::Warning) => "text-warning",
            (ClassScheme::Bootstrap, Self::Success) => "text-success",
            (ClassScheme::Bootstrap, Self::Danger) => "text-danger",
        }
    }
}

/// Card class flags for a stage. `None` disables every border flag.
#[must_use]
pub fn card_class(state: Option<ReportState>) -> CardClass {
    CardClass {
        base: true,
        clickable: true,
        border_draft: state == Some(ReportState::Draft),
        border_submitted: state == Some(ReportState::Submitted),
        border_approved: state == Some(ReportState::Approved),
        border_rejected: state == Some(ReportState::Rejected),
    }
}

/// Status label color for a stage. `None` falls back to muted.
#[must_use]
pub fn status_color(state: Option<ReportState>) -> TextColor {
    match state {
        Some(ReportState::Draft) | None => TextColor::Muted,
        Some(ReportState::Submitted) => TextColor::Warning,
        Some(ReportState::Approved) => TextColor::Success,
        Some(ReportState::Rejected) => TextColor::Danger,
    }
}

/// Presenter bound to one record for the duration of a render.
#[derive(Clone, Copy, Debug)]
pub struct StatusCardPresenter<'a> {
    record: &'a Record,
}

impl<'a> StatusCardPresenter<'a> {
    #[must_use]
    pub fn new(record: &'a Record) -> Self {
        Self { record }
    }

    #[must_use]
    pub fn record(&self) -> &'a Record {
        self.record
    }

    #[must_use]
    pub fn card_class(&self) -> CardClass {
        card_class(self.record.state())
    }

    #[must_use]
    pub fn status_color(&self) -> TextColor {
        status_color(self.record.state())
    }
}

impl CardWidget for StatusCardPresenter<'_> {
    fn widget_name(&self) -> &'static str {
        STATUS_CARD_PRESENTER
    }

    fn card_class(&self) -> CardClass {
        StatusCardPresenter::card_class(self)
    }

    fn status_color(&self) -> TextColor {
        StatusCardPresenter::status_color(self)
    }

    fn status_label(&self) -> Option<&'static str> {
        self.record.state().map(ReportState::label)
    }

    fn title(&self) -> String {
        self.record.display_title()
    }
}

/// Registry factory for [`StatusCardPresenter`].
#[must_use]
pub fn build_status_card(record: &Record) -> Box<dyn CardWidget + '_> {
    Box::new(StatusCardPresenter::new(record))
}
