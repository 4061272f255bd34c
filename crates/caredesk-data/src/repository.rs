//! Repository seam between data origin and rendering.

/// Read access to a collection of records.
///
/// `filter` is a pure projection: implementations must never mutate the
/// backing collection, and results preserve the collection's order.
pub trait Repository<T> {
    /// All records, in storage order.
    fn list(&self) -> Vec<T>;

    /// Records matching `predicate`, in storage order.
    fn filter(&self, predicate: &dyn Fn(&T) -> bool) -> Vec<T>;
}

/// A fixed in-memory collection.
#[derive(Debug, Clone)]
pub struct InMemoryRepository<T> {
    rows: Vec<T>,
}

impl<T> InMemoryRepository<T> {
    pub fn new(rows: Vec<T>) -> Self {
        Self { rows }
    }

    /// Borrow the backing rows without cloning.
    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append a record (used by session-only forms, e.g. new lab requests).
    pub fn push(&mut self, row: T) {
        self.rows.push(row);
    }
}

impl<T: Clone> Repository<T> for InMemoryRepository<T> {
    fn list(&self) -> Vec<T> {
        self.rows.clone()
    }

    fn filter(&self, predicate: &dyn Fn(&T) -> bool) -> Vec<T> {
        self.rows
            .iter()
            .filter(|row| predicate(row))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_preserves_order_and_source() {
        let repo = InMemoryRepository::new(vec![3, 1, 4, 1, 5]);
        let odds = repo.filter(&|n| n % 2 == 1);
        assert_eq!(odds, vec![3, 1, 1, 5]);
        // Source unchanged.
        assert_eq!(repo.rows(), &[3, 1, 4, 1, 5]);
        assert_eq!(repo.list(), vec![3, 1, 4, 1, 5]);
    }

    #[test]
    fn push_appends_in_order() {
        let mut repo = InMemoryRepository::new(vec!["a"]);
        repo.push("b");
        assert_eq!(repo.rows(), &["a", "b"]);
        assert_eq!(repo.len(), 2);
        assert!(!repo.is_empty());
    }
}
