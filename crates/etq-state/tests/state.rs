//! Integration tests for selection, filtering, replication and the
//! application state controller.

use std::time::{Duration, Instant};

use etq_model::{Record, Severity};
use etq_state::{AppState, NotificationCenter, SelectionSet, expand, filter_records};

fn record(id: &str, description: &str, qte: &str) -> Record {
    Record {
        id: id.to_string(),
        draw: format!("D{id}"),
        equipament: format!("E{id}"),
        sku: format!("S{id}"),
        description: description.to_string(),
        qte: qte.to_string(),
        supplier: "Acme".to_string(),
    }
}

const SCENARIO: &str = "id,draw,equipament,sku,description,qte,supplier\n\
                        1,D1,E1,S1,desc,2,Sup1\n\
                        2,D2,E2,S2,desc2,1,Sup2";

#[test]
fn empty_query_returns_all_records_in_order() {
    let records = vec![record("1", "alpha", "1"), record("2", "beta", "1")];
    let visible = filter_records(&records, "");
    assert_eq!(visible.len(), 2);
    assert_eq!(visible[0].id, "1");
    assert_eq!(visible[1].id, "2");
}

#[test]
fn filter_matches_any_field_case_insensitively() {
    let records = vec![
        record("1", "Hydraulic pump", "1"),
        record("2", "gasket", "1"),
    ];
    let by_description = filter_records(&records, "HYDRA");
    assert_eq!(by_description.len(), 1);
    assert_eq!(by_description[0].id, "1");

    // Matches on sku too ("S2").
    let by_sku = filter_records(&records, "s2");
    assert_eq!(by_sku.len(), 1);
    assert_eq!(by_sku[0].id, "2");

    assert!(filter_records(&records, "no such thing").is_empty());
}

#[test]
fn toggle_flips_membership() {
    let mut selection = SelectionSet::new();
    selection.toggle("1");
    assert!(selection.is_selected("1"));
    selection.toggle("1");
    assert!(!selection.is_selected("1"));
}

#[test]
fn toggle_all_round_trips_from_empty_and_from_full() {
    let visible = ["1", "2", "3"];

    let mut selection = SelectionSet::new();
    selection.toggle_all(&visible);
    assert!(selection.is_all_selected(&visible));
    selection.toggle_all(&visible);
    assert!(selection.is_empty());

    selection.toggle_all(&visible);
    selection.toggle_all(&visible);
    selection.toggle_all(&visible);
    assert_eq!(selection.len(), 3);
}

#[test]
fn empty_visible_set_is_never_all_selected() {
    let selection = SelectionSet::new();
    assert!(!selection.is_all_selected(&[]));
}

#[test]
fn toggle_all_replaces_rows_hidden_by_the_filter() {
    let mut state = AppState::new();
    state.commit_records(vec![
        record("1", "pump", "1"),
        record("2", "valve", "1"),
        record("3", "valve seat", "1"),
    ]);
    state.toggle("1");

    state.set_search("valve");
    state.toggle_all_visible();

    // "1" is hidden by the filter and drops out of the selection.
    assert!(!state.is_selected("1"));
    assert!(state.is_selected("2"));
    assert!(state.is_selected("3"));
    assert!(state.is_all_visible_selected());
}

#[test]
fn expand_replicates_by_quantity_in_order() {
    let a = record("A", "first", "3");
    let b = record("B", "second", "2");
    let selected = vec![&a, &b];
    let expanded = expand(&selected);
    let ids: Vec<&str> = expanded.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["A", "A", "A", "B", "B"]);
}

#[test]
fn expand_is_lenient_about_unparseable_quantities() {
    let a = record("A", "first", "abc");
    let b = record("B", "second", "2.9");
    let selected = vec![&a, &b];
    let expanded = expand(&selected);
    let ids: Vec<&str> = expanded.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["B", "B"]);
}

#[test]
fn scenario_load_select_expand() {
    let mut state = AppState::new();
    assert!(state.load_csv(SCENARIO));
    assert_eq!(state.records().len(), 2);

    state.toggle("1");
    let queue = state.print_queue();
    assert_eq!(queue.len(), 2);
    assert!(queue.iter().all(|r| r.id == "1"));
}

#[test]
fn selected_records_follow_canonical_order() {
    let mut state = AppState::new();
    state.commit_records(vec![
        record("1", "a", "1"),
        record("2", "b", "1"),
        record("3", "c", "1"),
    ]);
    state.toggle("3");
    state.toggle("1");
    let ids: Vec<&str> = state
        .selected_records()
        .iter()
        .map(|r| r.id.as_str())
        .collect();
    assert_eq!(ids, ["1", "3"]);
}

#[test]
fn rejected_load_keeps_previous_records_and_raises_danger() {
    let mut state = AppState::new();
    assert!(state.load_csv(SCENARIO));

    let missing_sku = "id,draw,equipament,description,qte,supplier\n\
                       9,D9,E9,desc,1,Sup9";
    assert!(!state.load_csv(missing_sku));

    // Previous canonical set is still active.
    assert_eq!(state.records().len(), 2);
    assert_eq!(state.records()[0].id, "1");

    let notice = state.notifications.active().expect("danger notice");
    assert_eq!(notice.severity, Severity::Danger);
    assert_eq!(notice.message, "Cabeçalho faltando: sku");
}

#[test]
fn reload_leaves_stale_selection_inert() {
    let mut state = AppState::new();
    assert!(state.load_csv(SCENARIO));
    state.toggle("1");
    state.toggle("2");

    let other = "id,draw,equipament,sku,description,qte,supplier\n\
                 7,D7,E7,S7,desc7,1,Sup7";
    assert!(state.load_csv(other));

    // The selection still holds the stale ids but derives nothing from them.
    assert_eq!(state.selection().len(), 2);
    assert!(state.selected_records().is_empty());
    assert!(state.print_queue().is_empty());
}

#[test]
fn success_notice_expires_after_five_seconds() {
    let mut center = NotificationCenter::new();
    let t0 = Instant::now();
    center.notify_at(t0, "Etiquetas impressas com sucesso!", Severity::Success);

    assert!(center.active_at(t0 + Duration::from_millis(4999)).is_some());
    assert!(center.active_at(t0 + Duration::from_millis(5000)).is_none());
}

#[test]
fn danger_notice_expires_after_three_seconds() {
    let mut center = NotificationCenter::new();
    let t0 = Instant::now();
    center.notify_at(t0, "Cabeçalho faltando: sku", Severity::Danger);

    assert!(center.active_at(t0 + Duration::from_millis(2999)).is_some());
    assert!(center.active_at(t0 + Duration::from_millis(3000)).is_none());
}

#[test]
fn newer_notice_preempts_the_older_deadline() {
    let mut center = NotificationCenter::new();
    let t0 = Instant::now();
    center.notify_at(t0, "first", Severity::Danger);
    center.notify_at(t0 + Duration::from_millis(2900), "second", Severity::Success);

    // The first notice's 3s deadline has passed, the second is still live.
    let notice = center
        .active_at(t0 + Duration::from_millis(3100))
        .expect("second notice");
    assert_eq!(notice.message, "second");

    // And the second expires on its own clock.
    assert!(
        center
            .active_at(t0 + Duration::from_millis(7900) + Duration::from_millis(1))
            .is_none()
    );
}

#[test]
fn tick_releases_expired_notices() {
    let mut center = NotificationCenter::new();
    let t0 = Instant::now();
    center.notify_at(t0, "gone soon", Severity::Danger);
    center.tick(t0 + Duration::from_secs(10));
    assert!(center.active_at(t0).is_none());
}
