mod common;
use common::{day, rec, sample_records, scenario_records, ts};
use shiftboard::core::filter::{
    FilterEvent, FilterMachine, FilterSelection, Stage, StageOutput, client_options, confirm,
    endpoint_options, filter, period_options, shift_day_options,
};
use shiftboard::errors::AppError;
use shiftboard::models::RecordSet;

fn full_selection(client: &str, endpoint: &str, d: &str, b: &str, e: &str) -> FilterSelection {
    FilterSelection {
        client_name: Some(client.to_string()),
        endpoint_name: Some(endpoint.to_string()),
        shift_day: Some(day(d)),
        state_begin: Some(ts(b)),
        state_end: Some(ts(e)),
    }
}

#[test]
fn test_two_record_scenario_end_to_end() {
    let set = RecordSet::new(scenario_records());

    assert_eq!(client_options(&set), vec!["A".to_string()]);
    assert_eq!(endpoint_options(&set, "A"), vec!["E1".to_string()]);

    let days = shift_day_options(&set, "A", "E1");
    assert_eq!(days.len(), 1);
    assert_eq!(days[0].value, day("2024-01-01"));
    assert_eq!(days[0].label, "2024-01-01");

    let period = period_options(&set, "A", "E1", day("2024-01-01")).unwrap();
    assert_eq!(period.begin.value, ts("2024-01-01 08:00"));
    assert_eq!(period.end.value, ts("2024-01-01 10:00"));
    assert_eq!(period.begin.label, "08:00:00 (01.01)");
    assert_eq!(period.end.label, "10:00:00 (01.01)");

    let subset = confirm(
        &set,
        &full_selection("A", "E1", "2024-01-01", "2024-01-01 08:00", "2024-01-01 10:00"),
    )
    .unwrap();
    assert_eq!(subset.records(), set.records());
}

#[test]
fn test_options_are_distinct_in_first_seen_order() {
    let set = RecordSet::new(sample_records());

    assert_eq!(client_options(&set), vec!["Alpha", "Beta"]);
    assert_eq!(endpoint_options(&set, "Alpha"), vec!["Press 1", "Press 2"]);
    assert_eq!(endpoint_options(&set, "Beta"), vec!["Lathe"]);
    assert!(endpoint_options(&set, "Gamma").is_empty());

    let days: Vec<_> = shift_day_options(&set, "Alpha", "Press 1")
        .into_iter()
        .map(|o| o.value)
        .collect();
    assert_eq!(days, vec![day("2024-01-01"), day("2024-01-02")]);
}

#[test]
fn test_endpoint_options_are_scoped_to_client() {
    let mut records = sample_records();
    // same endpoint name under another client
    records.push(rec(
        "Beta", "Press 1", "2024-03-03", "2024-03-03 08:00", "2024-03-03 09:00", "Idle", "Break",
        "#ffcc00",
    ));
    let set = RecordSet::new(records);

    let alpha_days: Vec<_> = shift_day_options(&set, "Alpha", "Press 1")
        .into_iter()
        .map(|o| o.value)
        .collect();
    assert!(!alpha_days.contains(&day("2024-03-03")));

    let beta_days: Vec<_> = shift_day_options(&set, "Beta", "Press 1")
        .into_iter()
        .map(|o| o.value)
        .collect();
    assert_eq!(beta_days, vec![day("2024-03-03")]);
}

#[test]
fn test_period_options_cover_overnight_state() {
    let set = RecordSet::new(sample_records());
    let period = period_options(&set, "Alpha", "Press 2", day("2024-01-01")).unwrap();
    assert_eq!(period.begin.value, ts("2024-01-01 22:00"));
    assert_eq!(period.end.value, ts("2024-01-02 02:00"));
    assert_eq!(period.end.label, "02:00:00 (02.01)");
}

#[test]
fn test_period_options_on_empty_subset_is_no_matching_records() {
    let set = RecordSet::new(sample_records());
    let err = period_options(&set, "Alpha", "Press 1", day("2030-01-01")).unwrap_err();
    assert!(matches!(err, AppError::NoMatchingRecords));
}

#[test]
fn test_confirm_missing_begin_is_incomplete() {
    let set = RecordSet::new(scenario_records());
    let mut sel = full_selection("A", "E1", "2024-01-01", "2024-01-01 08:00", "2024-01-01 10:00");
    sel.state_begin = None;

    match confirm(&set, &sel) {
        Err(AppError::IncompleteSelection(missing)) => assert_eq!(missing, vec!["period begin"]),
        other => panic!("expected IncompleteSelection, got {other:?}"),
    }
}

#[test]
fn test_confirm_names_every_missing_field() {
    let set = RecordSet::new(scenario_records());
    let sel = FilterSelection {
        client_name: Some("A".into()),
        ..Default::default()
    };

    match confirm(&set, &sel) {
        Err(AppError::IncompleteSelection(missing)) => assert_eq!(
            missing,
            vec!["endpoint", "shift day", "period begin", "period end"]
        ),
        other => panic!("expected IncompleteSelection, got {other:?}"),
    }
}

#[test]
fn test_confirm_endpoint_without_records_is_no_matching_records() {
    let set = RecordSet::new(scenario_records());
    let sel = full_selection("A", "E9", "2024-01-01", "2024-01-01 08:00", "2024-01-01 10:00");
    assert!(matches!(confirm(&set, &sel), Err(AppError::NoMatchingRecords)));
}

#[test]
fn test_confirm_window_keeps_only_contained_states() {
    let set = RecordSet::new(sample_records());
    let sel = full_selection(
        "Alpha",
        "Press 1",
        "2024-01-01",
        "2024-01-01 08:00",
        "2024-01-01 09:30",
    );
    let subset = confirm(&set, &sel).unwrap();

    let reasons: Vec<_> = subset.iter().map(|r| r.reason.as_str()).collect();
    assert_eq!(reasons, vec!["Work", "Break"]);
}

#[test]
fn test_confirm_is_idempotent_and_leaves_source_untouched() {
    let set = RecordSet::new(sample_records());
    let sel = full_selection(
        "Alpha",
        "Press 1",
        "2024-01-01",
        "2024-01-01 08:00",
        "2024-01-01 11:00",
    );

    let a = confirm(&set, &sel).unwrap();
    let b = confirm(&set, &sel).unwrap();
    assert_eq!(a.records(), b.records());
    assert_eq!(set.len(), sample_records().len());
}

#[test]
fn test_more_specific_selection_is_a_subset() {
    let set = RecordSet::new(sample_records());

    let chain = [
        FilterSelection::default(),
        FilterSelection {
            client_name: Some("Alpha".into()),
            ..Default::default()
        },
        FilterSelection {
            client_name: Some("Alpha".into()),
            endpoint_name: Some("Press 1".into()),
            ..Default::default()
        },
        FilterSelection {
            client_name: Some("Alpha".into()),
            endpoint_name: Some("Press 1".into()),
            shift_day: Some(day("2024-01-01")),
            ..Default::default()
        },
        FilterSelection {
            client_name: Some("Alpha".into()),
            endpoint_name: Some("Press 1".into()),
            shift_day: Some(day("2024-01-01")),
            state_begin: Some(ts("2024-01-01 09:00")),
            ..Default::default()
        },
        full_selection(
            "Alpha",
            "Press 1",
            "2024-01-01",
            "2024-01-01 09:00",
            "2024-01-01 09:30",
        ),
    ];

    for pair in chain.windows(2) {
        let broad = filter(&set, &pair[0]);
        let narrow = filter(&set, &pair[1]);
        assert!(narrow.len() <= broad.len());
        for r in &narrow {
            assert!(broad.records().contains(r), "{r:?} escaped the broader filter");
        }
    }
}

#[test]
fn test_machine_walks_every_stage() {
    let mut m = FilterMachine::new(RecordSet::new(scenario_records()));
    assert_eq!(m.stage(), Some(Stage::Client));

    match m.apply(FilterEvent::SelectClient("A".into())).unwrap() {
        StageOutput::Endpoints(e) => assert_eq!(e, vec!["E1"]),
        other => panic!("unexpected {other:?}"),
    }
    match m.apply(FilterEvent::SelectEndpoint("E1".into())).unwrap() {
        StageOutput::ShiftDays(d) => assert_eq!(d[0].value, day("2024-01-01")),
        other => panic!("unexpected {other:?}"),
    }
    let period = match m.apply(FilterEvent::SelectShiftDay(day("2024-01-01"))).unwrap() {
        StageOutput::Period(p) => p,
        other => panic!("unexpected {other:?}"),
    };
    assert_eq!(m.stage(), Some(Stage::PeriodBegin));

    m.apply(FilterEvent::SelectBegin(period.begin.value)).unwrap();
    match m.apply(FilterEvent::SelectEnd(period.end.value)).unwrap() {
        StageOutput::Awaiting(None) => {}
        other => panic!("unexpected {other:?}"),
    }
    assert!(m.selection().is_complete());

    match m.apply(FilterEvent::Confirm).unwrap() {
        StageOutput::Confirmed(subset) => assert_eq!(subset.len(), 2),
        other => panic!("unexpected {other:?}"),
    }
    // confirm does not consume the selection
    assert!(m.selection().is_complete());
}

#[test]
fn test_machine_confirm_before_bounds_is_incomplete() {
    let mut m = FilterMachine::new(RecordSet::new(scenario_records()));
    m.apply(FilterEvent::SelectClient("A".into())).unwrap();
    m.apply(FilterEvent::SelectEndpoint("E1".into())).unwrap();
    m.apply(FilterEvent::SelectShiftDay(day("2024-01-01"))).unwrap();
    m.apply(FilterEvent::SelectEnd(ts("2024-01-01 10:00"))).unwrap();

    let err = m.apply(FilterEvent::Confirm).unwrap_err();
    assert!(matches!(err, AppError::IncompleteSelection(ref f) if f == &vec!["period begin"]));
}

#[test]
fn test_machine_rejects_unknown_choice_without_changing_state() {
    let mut m = FilterMachine::new(RecordSet::new(sample_records()));
    m.apply(FilterEvent::SelectClient("Alpha".into())).unwrap();
    let before = m.selection().clone();

    let err = m
        .apply(FilterEvent::SelectEndpoint("Lathe".into()))
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidChoice { stage: "endpoint", .. }));
    assert_eq!(m.selection(), &before);

    let err = m.apply(FilterEvent::SelectClient("Gamma".into())).unwrap_err();
    assert!(matches!(err, AppError::InvalidChoice { stage: "client", .. }));
    assert_eq!(m.selection(), &before);
}

#[test]
fn test_machine_downstream_before_upstream_is_noop() {
    let mut m = FilterMachine::new(RecordSet::new(sample_records()));

    let err = m
        .apply(FilterEvent::SelectEndpoint("Press 1".into()))
        .unwrap_err();
    assert!(matches!(err, AppError::IncompleteSelection(ref f) if f == &vec!["client"]));

    let err = m
        .apply(FilterEvent::SelectBegin(ts("2024-01-01 08:00")))
        .unwrap_err();
    assert!(matches!(err, AppError::IncompleteSelection(_)));

    assert_eq!(m.selection(), &FilterSelection::default());
}

#[test]
fn test_machine_changing_upstream_clears_downstream() {
    let mut m = FilterMachine::new(RecordSet::new(sample_records()));
    m.apply(FilterEvent::SelectClient("Alpha".into())).unwrap();
    m.apply(FilterEvent::SelectEndpoint("Press 1".into())).unwrap();
    m.apply(FilterEvent::SelectShiftDay(day("2024-01-01"))).unwrap();
    m.apply(FilterEvent::SelectBegin(ts("2024-01-01 08:00"))).unwrap();

    m.apply(FilterEvent::SelectEndpoint("Press 2".into())).unwrap();
    let sel = m.selection();
    assert_eq!(sel.endpoint_name.as_deref(), Some("Press 2"));
    assert_eq!(sel.shift_day, None);
    assert_eq!(sel.state_begin, None);
    assert_eq!(m.stage(), Some(Stage::ShiftDay));
}

#[test]
fn test_machine_accepts_overridden_bounds() {
    let mut m = FilterMachine::new(RecordSet::new(sample_records()));
    m.apply(FilterEvent::SelectClient("Alpha".into())).unwrap();
    m.apply(FilterEvent::SelectEndpoint("Press 1".into())).unwrap();
    m.apply(FilterEvent::SelectShiftDay(day("2024-01-01"))).unwrap();
    m.apply(FilterEvent::SelectBegin(ts("2024-01-01 09:00"))).unwrap();
    m.apply(FilterEvent::SelectEnd(ts("2024-01-01 11:00"))).unwrap();

    match m.apply(FilterEvent::Confirm).unwrap() {
        StageOutput::Confirmed(subset) => {
            let reasons: Vec<_> = subset.iter().map(|r| r.reason.clone()).collect();
            assert_eq!(reasons, vec!["Break", "Work"]);
        }
        other => panic!("unexpected {other:?}"),
    }

    // inverted window: nothing fits
    m.apply(FilterEvent::SelectEnd(ts("2024-01-01 08:30"))).unwrap();
    assert!(matches!(
        m.apply(FilterEvent::Confirm),
        Err(AppError::NoMatchingRecords)
    ));
}

#[test]
fn test_machine_reset_discards_selection() {
    let mut m = FilterMachine::new(RecordSet::new(sample_records()));
    m.apply(FilterEvent::SelectClient("Beta".into())).unwrap();
    m.apply(FilterEvent::SelectEndpoint("Lathe".into())).unwrap();

    match m.apply(FilterEvent::Reset).unwrap() {
        StageOutput::Clients(c) => assert_eq!(c, vec!["Alpha", "Beta"]),
        other => panic!("unexpected {other:?}"),
    }
    assert_eq!(m.selection(), &FilterSelection::default());
    assert_eq!(m.stage(), Some(Stage::Client));
}
