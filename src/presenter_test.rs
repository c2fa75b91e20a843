use serde_json::json;

use super::*;

fn record_with_state(state: serde_json::Value) -> Record {
    Record::from_data(json!({"state": state, "name": "Formwork check"}))
}

// =============================================================
// card_class
// =============================================================

#[test]
fn card_class_sets_exactly_one_border_for_each_state() {
    for state in ReportState::ALL {
        let classes = card_class(Some(state));
        assert!(classes.base);
        assert!(classes.clickable);
        let borders = [
            classes.border_draft,
            classes.border_submitted,
            classes.border_approved,
            classes.border_rejected,
        ];
        assert_eq!(borders.iter().filter(|on| **on).count(), 1, "{state}");
        assert_eq!(classes.border_state(), Some(state));
    }
}

#[test]
fn card_class_has_no_border_without_state() {
    let classes = card_class(None);
    assert!(classes.base);
    assert!(classes.clickable);
    assert!(!classes.border_draft);
    assert!(!classes.border_submitted);
    assert!(!classes.border_approved);
    assert!(!classes.border_rejected);
    assert_eq!(classes.border_state(), None);
}

#[test]
fn card_class_serializes_as_class_flag_map() {
    let value = serde_json::to_value(card_class(Some(ReportState::Approved))).expect("serialize");
    assert_eq!(
        value,
        json!({
            "card-base": true,
            "card-clickable": true,
            "border-draft": false,
            "border-submitted": false,
            "border-approved": true,
            "border-rejected": false
        })
    );
}

#[test]
fn class_list_uses_semantic_names_by_default() {
    let classes = card_class(Some(ReportState::Submitted));
    assert_eq!(
        classes.class_list(ClassScheme::default()),
        "card-base card-clickable border-submitted"
    );
    assert_eq!(card_class(None).class_list(ClassScheme::Semantic), "card-base card-clickable");
}

#[test]
fn class_list_supports_bootstrap_names() {
    let scheme = ClassScheme::Bootstrap;
    assert_eq!(
        card_class(Some(ReportState::Draft)).class_list(scheme),
        "o_kanban_card o_kanban_global_click border-primary"
    );
    assert_eq!(
        card_class(Some(ReportState::Rejected)).class_list(scheme),
        "o_kanban_card o_kanban_global_click border-danger"
    );
}

#[test]
fn entries_keep_fixed_order() {
    let names: Vec<_> = card_class(None)
        .entries(ClassScheme::Semantic)
        .into_iter()
        .map(|(name, _)| name)
        .collect();
    assert_eq!(
        names,
        [
            "card-base",
            "card-clickable",
            "border-draft",
            "border-submitted",
            "border-approved",
            "border-rejected"
        ]
    );
}

// =============================================================
// status_color
// =============================================================

#[test]
fn status_color_maps_each_state() {
    assert_eq!(status_color(Some(ReportState::Draft)), TextColor::Muted);
    assert_eq!(status_color(Some(ReportState::Submitted)), TextColor::Warning);
    assert_eq!(status_color(Some(ReportState::Approved)), TextColor::Success);
    assert_eq!(status_color(Some(ReportState::Rejected)), TextColor::Danger);
}

#[test]
fn status_color_falls_back_to_muted() {
    assert_eq!(status_color(None), TextColor::Muted);
    assert_eq!(status_color(None).as_str(), "muted");
}

#[test]
fn text_color_css_class_per_scheme() {
    assert_eq!(TextColor::Warning.css_class(ClassScheme::Semantic), "warning");
    assert_eq!(TextColor::Warning.css_class(ClassScheme::Bootstrap), "text-warning");
    assert_eq!(TextColor::Muted.css_class(ClassScheme::Bootstrap), "text-muted");
}

// =============================================================
// StatusCardPresenter
// =============================================================

#[test]
fn presenter_reads_state_from_record() {
    let record = record_with_state(json!("rejected"));
    let presenter = StatusCardPresenter::new(&record);
    assert!(presenter.card_class().border_rejected);
    assert_eq!(presenter.status_color(), TextColor::Danger);
}

#[test]
fn presenter_degrades_for_unknown_missing_and_null_state() {
    let unknown = record_with_state(json!("unknown"));
    let null = record_with_state(json!(null));
    let missing = Record::from_data(json!({"name": "No state"}));

    for record in [&unknown, &null, &missing] {
        let presenter = StatusCardPresenter::new(record);
        assert_eq!(presenter.card_class(), card_class(None));
        assert_eq!(presenter.status_color(), TextColor::Muted);
    }
}

#[test]
fn presenter_is_pure_and_leaves_record_untouched() {
    let record = record_with_state(json!("submitted"));
    let before = record.clone();
    let presenter = StatusCardPresenter::new(&record);

    let first = (presenter.card_class(), presenter.status_color());
    let second = (presenter.card_class(), presenter.status_color());

    assert_eq!(first, second);
    assert_eq!(record, before);
}

#[test]
fn presenter_as_widget_exposes_label_and_title() {
    let record = record_with_state(json!("approved"));
    let widget = build_status_card(&record);
    assert_eq!(widget.widget_name(), STATUS_CARD_PRESENTER);
    assert_eq!(widget.status_label(), Some("Approved"));
    assert_eq!(widget.title(), "Formwork check");
    assert_eq!(widget.status_color(), TextColor::Success);
}

#[test]
fn presenter_has_no_label_for_unknown_state() {
    let record = record_with_state(json!("archived"));
    assert_eq!(build_status_card(&record).status_label(), None);
}
