//! Tabular list view model.
//!
//! [`build_table`] maps a column set and a row slice to one of three
//! mutually exclusive render states, chosen in priority order:
//!
//! 1. `Loading` while a background fetch is in flight,
//! 2. `Empty` when there is nothing to show,
//! 3. `Populated` otherwise.
//!
//! Row data arrives as `Option<&[T]>`: an absent collection is treated as
//! empty, never as an error. Row and column order are preserved exactly.

use crate::column::{ColumnSet, ColumnWidth};

// =============================================================================
// RENDER STATE
// =============================================================================

/// The three mutually exclusive display states of a tabular listing.
#[derive(Debug, Clone, PartialEq)]
pub enum TableRender {
    /// A background fetch is in flight; suppress body and empty-state.
    Loading,
    /// No rows to display.
    Empty,
    /// Header and body ready to render.
    Populated(TableBody),
}

impl TableRender {
    /// Whether this render carries rows.
    pub fn is_populated(&self) -> bool {
        matches!(self, Self::Populated(_))
    }
}

/// Header and rows of a populated table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableBody {
    /// Header cells in column order.
    pub header: Vec<HeaderCell>,
    /// Rows in input order.
    pub rows: Vec<TableRow>,
}

/// One rendered header cell.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderCell {
    /// Column key.
    pub key: &'static str,
    /// Display label.
    pub label: String,
    /// Width hint for the rendering layer.
    pub width: ColumnWidth,
}

/// One rendered row: a stable identity key plus one cell per column.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    /// Unique, stable row identity derived from the key field.
    pub key: String,
    /// Cell text in column order.
    pub cells: Vec<String>,
}

// =============================================================================
// BUILD
// =============================================================================

/// Build the render state for a table.
///
/// `key` projects each row to its stable identity; `data: None` is coerced
/// to the empty sequence. Exactly one state is returned for any input.
pub fn build_table<T>(
    columns: &ColumnSet<T>,
    data: Option<&[T]>,
    key: impl Fn(&T) -> String,
    is_loading: bool,
) -> TableRender {
    if is_loading {
        return TableRender::Loading;
    }

    let rows = data.unwrap_or(&[]);
    if rows.is_empty() {
        return TableRender::Empty;
    }

    let header = columns
        .columns()
        .iter()
        .map(|col| HeaderCell {
            key: col.key(),
            label: col.header().to_string(),
            width: col.width(),
        })
        .collect();

    let rows = rows
        .iter()
        .map(|row| TableRow {
            key: key(row),
            cells: columns
                .columns()
                .iter()
                .map(|col| col.render_cell(row))
                .collect(),
        })
        .collect();

    TableRender::Populated(TableBody { header, rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::Column;

    struct Visit {
        id: &'static str,
        reason: &'static str,
    }

    fn columns() -> ColumnSet<Visit> {
        ColumnSet::new(vec![
            Column::new("id", "Visit", |v: &Visit| v.id.to_string()),
            Column::new("reason", "Reason", |v: &Visit| v.reason.to_string()),
        ])
        .expect("unique keys")
    }

    #[test]
    fn loading_wins_over_rows() {
        let data = [Visit {
            id: "V-1",
            reason: "Checkup",
        }];
        let render = build_table(&columns(), Some(&data), |v| v.id.to_string(), true);
        assert_eq!(render, TableRender::Loading);
    }

    #[test]
    fn absent_data_renders_empty() {
        let render = build_table(&columns(), None, |v: &Visit| v.id.to_string(), false);
        assert_eq!(render, TableRender::Empty);
    }

    #[test]
    fn rows_and_cells_follow_input_order() {
        let data = [
            Visit {
                id: "V-2",
                reason: "Follow-up",
            },
            Visit {
                id: "V-1",
                reason: "Checkup",
            },
        ];
        let render = build_table(&columns(), Some(&data), |v| v.id.to_string(), false);

        let TableRender::Populated(body) = render else {
            panic!("expected populated table");
        };
        let keys: Vec<_> = body.rows.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["V-2", "V-1"]);
        assert_eq!(body.rows[0].cells, vec!["V-2", "Follow-up"]);
        let labels: Vec<_> = body.header.iter().map(|h| h.label.as_str()).collect();
        assert_eq!(labels, vec!["Visit", "Reason"]);
    }
}
