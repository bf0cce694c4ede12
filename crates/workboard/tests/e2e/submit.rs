//! Order submission

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use workboard::{submit_orders, OrderDraft, StoreCall, StoreOp, SubmitOutcome, ValueInput};

use crate::{date, row, store_with_jobs, ORDERS};

fn blank_or_text() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        "[ \t\n]{0,4}".prop_map(Some),
        "[ ]{0,2}[a-zA-Z0-9]{1,6}[ ]{0,2}".prop_map(Some),
    ]
}

fn draft() -> impl Strategy<Value = OrderDraft> {
    (blank_or_text(), blank_or_text(), blank_or_text(), blank_or_text()).prop_map(
        |(option_id, item_name, target_qty, comment)| OrderDraft {
            option_id,
            item_name,
            target_qty,
            comment,
        },
    )
}

fn has_text(draft: &OrderDraft) -> bool {
    [&draft.option_id, &draft.item_name, &draft.target_qty, &draft.comment]
        .into_iter()
        .flatten()
        .any(|v| !v.trim().is_empty())
}

proptest! {
    #[test]
    fn prop_only_rows_with_text_are_submitted(drafts in prop::collection::vec(draft(), 0..8)) {
        let mut store = store_with_jobs(&[]);
        let outcome = submit_orders(&mut store, ORDERS, date(2024, 6, 1), &drafts).unwrap();

        let expected = drafts.iter().filter(|d| has_text(d)).count();
        for d in &drafts {
            prop_assert_eq!(d.is_valid(), has_text(d));
        }
        if expected == 0 {
            prop_assert_eq!(outcome, SubmitOutcome::NothingToSave);
            prop_assert_eq!(store.calls().len(), 0);
        } else {
            prop_assert_eq!(outcome, SubmitOutcome::Saved { rows: expected });
            prop_assert_eq!(store.call_count(StoreOp::AppendRows), 1);
            prop_assert_eq!(store.rows(ORDERS).unwrap().len(), 2 + expected);
        }
    }
}

#[test]
fn test_blank_grid_makes_no_calls() {
    let mut store = store_with_jobs(&[]);
    let drafts = vec![
        OrderDraft::default(),
        OrderDraft::new("  ", "", "\t", " "),
    ];

    let outcome = submit_orders(&mut store, ORDERS, date(2024, 6, 1), &drafts).unwrap();
    assert_eq!(outcome, SubmitOutcome::NothingToSave);
    assert!(store.calls().is_empty());
}

#[test]
fn test_single_append_with_stamped_fields() {
    let mut store = store_with_jobs(&[]);
    let drafts = vec![
        OrderDraft::new("OPT-1", "Hex bolt", "40", "rush"),
        OrderDraft::default(),
        OrderDraft {
            item_name: Some("Washer".into()),
            // worker fields cannot be smuggled in through the comment
            comment: Some("Done".into()),
            ..Default::default()
        },
    ];

    let outcome = submit_orders(&mut store, ORDERS, date(2024, 6, 3), &drafts).unwrap();
    assert_eq!(outcome, SubmitOutcome::Saved { rows: 2 });

    let calls = store.calls();
    assert_eq!(
        calls,
        vec![StoreCall::AppendRows {
            table: ORDERS.to_string(),
            rows: vec![
                row(&["2024-06-03", "OPT-1", "Hex bolt", "40", "rush", "Ready", "", "", ""]),
                row(&["2024-06-03", "", "Washer", "", "Done", "Ready", "", "", ""]),
            ],
            input: ValueInput::UserEntered,
        }]
    );

    // The store applies its own date coercion to user-entered values
    let stored = store.rows(ORDERS).unwrap();
    assert_eq!(stored[2][0], "2024/06/03");
    assert_eq!(&stored[3][5..], ["Ready", "", "", ""]);
}

#[test]
fn test_store_failure_surfaces() {
    let mut store = store_with_jobs(&[]);
    store.fail_next(StoreOp::AppendRows, "quota exceeded");

    let drafts = vec![OrderDraft::new("OPT-1", "", "", "")];
    let err = submit_orders(&mut store, ORDERS, date(2024, 6, 3), &drafts).unwrap_err();
    assert!(err.to_string().contains("quota exceeded"));
    assert_eq!(store.rows(ORDERS).unwrap().len(), 2);
}

#[test]
fn test_missing_table_is_an_error() {
    let mut store = store_with_jobs(&[]);
    let drafts = vec![OrderDraft::new("OPT-1", "", "", "")];
    assert!(submit_orders(&mut store, "Orders (old)", date(2024, 6, 3), &drafts).is_err());
}
