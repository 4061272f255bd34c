//! Integration tests for the listing view models.

use caredesk_listing::{
    Column, ColumnSet, PaginationState, QueryFields, TableRender, build_table, filter_candidates,
};
use proptest::prelude::*;

#[derive(Debug, Clone, PartialEq)]
struct Record {
    id: u32,
    label: String,
}

fn record_columns() -> ColumnSet<Record> {
    ColumnSet::new(vec![
        Column::new("id", "ID", |r: &Record| r.id.to_string()).fixed(80.0),
        Column::new("label", "Label", |r: &Record| r.label.clone()),
    ])
    .expect("unique keys")
}

fn label_fields() -> QueryFields<Record> {
    QueryFields::new().field(|r: &Record| r.label.clone())
}

// --- Render-state exclusivity -----------------------------------------------

#[test]
fn exactly_one_render_state_for_every_input() {
    let columns = record_columns();
    let rows = vec![Record {
        id: 1,
        label: "alpha".to_string(),
    }];

    let cases: Vec<(Option<&[Record]>, bool, &str)> = vec![
        (Some(&rows), true, "Loading"),
        (None, true, "Loading"),
        (Some(&[]), false, "Empty"),
        (None, false, "Empty"),
        (Some(&rows), false, "Populated"),
    ];

    for (data, loading, expected) in cases {
        let render = build_table(&columns, data, |r| r.id.to_string(), loading);
        assert_eq!(
            render.is_populated(),
            expected == "Populated",
            "data={data:?} loading={loading}"
        );
        let actual = match render {
            TableRender::Loading => "Loading",
            TableRender::Empty => "Empty",
            TableRender::Populated(_) => "Populated",
        };
        assert_eq!(actual, expected, "data={data:?} loading={loading}");
    }
}

#[test]
fn absent_data_is_empty_not_an_error() {
    // Columns present, data missing, not loading.
    let render = build_table(&record_columns(), None, |r: &Record| r.id.to_string(), false);
    assert_eq!(render, TableRender::Empty);
}

// --- Pagination boundaries ---------------------------------------------------

#[test]
fn next_at_last_page_is_disabled() {
    let state = PaginationState::new(3, 3);
    assert_eq!(state.next(), None);
    // The state itself is untouched by probing the controls.
    assert_eq!(state.current_page(), 3);
}

proptest! {
    #[test]
    fn pagination_is_always_in_range(current in 0u32..1000, total in 0u32..1000) {
        let state = PaginationState::new(current, total);
        prop_assert!(state.total_pages() >= 1);
        prop_assert!(state.current_page() >= 1);
        prop_assert!(state.current_page() <= state.total_pages());
        if let Some(prev) = state.previous() {
            prop_assert_eq!(prev, state.current_page() - 1);
        }
        if let Some(next) = state.next() {
            prop_assert_eq!(next, state.current_page() + 1);
        }
    }

    #[test]
    fn page_windows_cover_rows_exactly_once(len in 0usize..200, page_size in 1usize..20) {
        let rows: Vec<u32> = (0..len as u32).collect();
        let total = PaginationState::for_len(1, len, page_size).total_pages();

        let mut seen = Vec::new();
        for page in 1..=total {
            let window = PaginationState::new(page, total).page_slice(&rows, page_size);
            seen.extend_from_slice(window);
        }
        prop_assert_eq!(seen, rows);
    }
}

// --- Filter correctness and purity -------------------------------------------

#[test]
fn vietnamese_substring_filter_is_accent_preserving() {
    let candidates = vec![
        Record {
            id: 1,
            label: "Nguyễn Văn A".to_string(),
        },
        Record {
            id: 2,
            label: "Trần Thị B".to_string(),
        },
    ];
    let filtered = filter_candidates(&candidates, &label_fields(), "văn");
    let labels: Vec<_> = filtered.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(labels, vec!["Nguyễn Văn A"]);
}

proptest! {
    #[test]
    fn empty_query_is_identity(labels in proptest::collection::vec("[a-zA-Z ]{0,12}", 0..30)) {
        let candidates: Vec<Record> = labels
            .into_iter()
            .enumerate()
            .map(|(id, label)| Record { id: id as u32, label })
            .collect();

        let filtered = filter_candidates(&candidates, &label_fields(), "");
        prop_assert_eq!(filtered.len(), candidates.len());
        for (got, want) in filtered.iter().zip(candidates.iter()) {
            prop_assert_eq!(*got, want);
        }
    }

    #[test]
    fn filter_never_mutates_and_preserves_order(
        labels in proptest::collection::vec("[a-z]{0,8}", 0..30),
        query in "[a-z]{0,4}",
    ) {
        let candidates: Vec<Record> = labels
            .into_iter()
            .enumerate()
            .map(|(id, label)| Record { id: id as u32, label })
            .collect();
        let before = candidates.clone();

        let filtered = filter_candidates(&candidates, &label_fields(), &query);

        // Purity: the source is untouched.
        prop_assert_eq!(&candidates, &before);

        // Exactness: retained iff the label contains the query.
        let expected: Vec<&Record> = candidates
            .iter()
            .filter(|r| r.label.to_lowercase().contains(&query.to_lowercase()))
            .collect();
        prop_assert_eq!(filtered, expected);
    }
}
