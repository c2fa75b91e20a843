//! Kanban card for a daily report, styled by its workflow stage.
//!
//! DESIGN
//! ======
//! The card resolves its widget through the registry in context so board
//! views can swap the presenter by key. A missing registry or key still renders
//! a card through the status presenter with neutral styling.

use std::sync::Arc;

use leptos::prelude::*;
use report_cards::presenter::build_status_card;
use report_cards::{CardConfig, CardWidget as _, ClassScheme, Record, STATUS_CARD_WIDGET, WidgetRegistry};

#[cfg(test)]
#[path = "report_kanban_card_test.rs"]
mod report_kanban_card_test;

/// Resolved presentation for one card render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardStyles {
    pub class_list: String,
    pub status_class: &'static str,
    pub label: Option<&'static str>,
    pub title: String,
}

/// A clickable kanban card for one report record.
#[component]
pub fn ReportKanbanCard(
    record: Record,
    #[prop(into, default = STATUS_CARD_WIDGET.to_owned())] widget: String,
) -> impl IntoView {
    let registry = use_context::<Arc<WidgetRegistry>>();
    let scheme = use_context::<CardConfig>().unwrap_or_default().class_scheme;
    let CardStyles { class_list, status_class, label, title } =
        card_styles(registry.as_deref(), &widget, &record, scheme);
    let status_class = format!("report-card__status {status_class}");

    view! {
        <div class=class_list>
            <span class="report-card__title">{title}</span>
            {label.map(|label| view! { <span class=status_class>{label}</span> })}
        </div>
    }
}

/// Resolve card styling through `registry`, falling back to the status
/// presenter when the registry or key is unavailable.
pub fn card_styles(
    registry: Option<&WidgetRegistry>,
    key: &str,
    record: &Record,
    scheme: ClassScheme,
) -> CardStyles {
    let widget = match registry.map(|registry| registry.create(key, record)) {
        Some(Ok(widget)) => widget,
        Some(Err(err)) => {
            leptos::logging::warn!("card widget unavailable, using status card: {err}");
            build_status_card(record)
        }
        None => build_status_card(record),
    };

    CardStyles {
        class_list: widget.card_class().class_list(scheme),
        status_class: widget.status_color().css_class(scheme),
        label: widget.status_label(),
        title: widget.title(),
    }
}
