//! Column descriptors for tabular listings.
//!
//! A [`Column`] pairs a stable key and header label with a cell render
//! function: a pure projection from a row to display text. The render
//! function is data, not a trait impl, so each page can describe its table
//! declaratively (a tagged strategy per column).

use crate::error::ListingError;

// =============================================================================
// COLUMN WIDTH
// =============================================================================

/// Width hint for a column, resolved by the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnWidth {
    /// Fixed width in logical pixels.
    Fixed(f32),
    /// Fill the remaining space.
    Fill,
    /// Fill a proportional share of the remaining space.
    Portion(u16),
}

// =============================================================================
// COLUMN
// =============================================================================

/// One vertical slice of a table: key, header label, width hint, and the
/// cell render function.
///
/// The cell function must be a pure function of the row; the renderer may
/// call it any number of times.
pub struct Column<T> {
    key: &'static str,
    header: String,
    width: ColumnWidth,
    cell: Box<dyn Fn(&T) -> String>,
}

impl<T> Column<T> {
    /// Create a column that fills available space.
    pub fn new(
        key: &'static str,
        header: impl Into<String>,
        cell: impl Fn(&T) -> String + 'static,
    ) -> Self {
        Self {
            key,
            header: header.into(),
            width: ColumnWidth::Fill,
            cell: Box::new(cell),
        }
    }

    /// Set a fixed width in logical pixels.
    pub fn fixed(mut self, width: f32) -> Self {
        self.width = ColumnWidth::Fixed(width);
        self
    }

    /// Set a proportional width.
    pub fn portion(mut self, portion: u16) -> Self {
        self.width = ColumnWidth::Portion(portion);
        self
    }

    /// Column key, unique within its [`ColumnSet`].
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Header label.
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Width hint.
    pub fn width(&self) -> ColumnWidth {
        self.width
    }

    /// Render the cell for one row.
    pub fn render_cell(&self, row: &T) -> String {
        (self.cell)(row)
    }
}

// =============================================================================
// COLUMN SET
// =============================================================================

/// An ordered, validated sequence of columns.
///
/// Construction rejects duplicate keys and empty sets; render order always
/// equals construction order.
pub struct ColumnSet<T> {
    columns: Vec<Column<T>>,
}

impl<T> ColumnSet<T> {
    /// Validate and build a column set.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError::EmptyColumnSet`] for an empty input and
    /// [`ListingError::DuplicateColumnKey`] when two columns share a key.
    pub fn new(columns: Vec<Column<T>>) -> Result<Self, ListingError> {
        if columns.is_empty() {
            return Err(ListingError::EmptyColumnSet);
        }
        for (idx, col) in columns.iter().enumerate() {
            if columns[..idx].iter().any(|other| other.key == col.key) {
                return Err(ListingError::DuplicateColumnKey { key: col.key });
            }
        }
        Ok(Self { columns })
    }

    /// Columns in render order.
    pub fn columns(&self) -> &[Column<T>] {
        &self.columns
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the set is empty (never true for a validated set).
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        name: &'static str,
        age: u8,
    }

    #[test]
    fn rejects_duplicate_keys() {
        let result = ColumnSet::new(vec![
            Column::new("name", "Name", |r: &Row| r.name.to_string()),
            Column::new("name", "Also Name", |r: &Row| r.name.to_string()),
        ]);
        assert_eq!(
            result.err(),
            Some(ListingError::DuplicateColumnKey { key: "name" })
        );
    }

    #[test]
    fn rejects_empty_set() {
        let result = ColumnSet::<Row>::new(vec![]);
        assert_eq!(result.err(), Some(ListingError::EmptyColumnSet));
    }

    #[test]
    fn preserves_declaration_order() {
        let set = ColumnSet::new(vec![
            Column::new("name", "Name", |r: &Row| r.name.to_string()).fixed(140.0),
            Column::new("age", "Age", |r: &Row| r.age.to_string()).portion(2),
        ])
        .expect("unique keys");

        let keys: Vec<_> = set.columns().iter().map(Column::key).collect();
        assert_eq!(keys, vec!["name", "age"]);
        assert_eq!(set.columns()[0].width(), ColumnWidth::Fixed(140.0));
        assert_eq!(
            set.columns()[1].render_cell(&Row {
                name: "An",
                age: 34
            }),
            "34"
        );
    }
}
