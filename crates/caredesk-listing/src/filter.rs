//! Substring filtering for searchable selection lists.
//!
//! A candidate is retained when the lowercased query is a substring of the
//! lowercased value of at least one query field (logical OR). Filtering is a
//! pure, order-preserving projection: the source collection is never
//! mutated, and the empty query retains every candidate.
//!
//! Lowercasing is full Unicode case folding, so accented text matches
//! case-insensitively while accents themselves are preserved ("văn" matches
//! "Văn" but not "van").

// =============================================================================
// QUERY FIELDS
// =============================================================================

/// The string projections of a candidate examined during filtering.
pub struct QueryFields<T> {
    fields: Vec<Box<dyn Fn(&T) -> String>>,
}

impl<T> QueryFields<T> {
    /// Start an empty field list.
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Add one query field accessor.
    pub fn field(mut self, accessor: impl Fn(&T) -> String + 'static) -> Self {
        self.fields.push(Box::new(accessor));
        self
    }

    /// Whether `candidate` matches the already-lowercased needle.
    fn matches(&self, candidate: &T, needle: &str) -> bool {
        self.fields
            .iter()
            .any(|field| field(candidate).to_lowercase().contains(needle))
    }
}

impl<T> Default for QueryFields<T> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// FILTER
// =============================================================================

/// Filter `candidates` by case-insensitive substring match on `fields`.
///
/// Returns references into `candidates` in their original order. An empty
/// query retains all candidates; an empty candidate list yields an empty
/// result (the caller renders its own empty-state).
pub fn filter_candidates<'a, T>(
    candidates: &'a [T],
    fields: &QueryFields<T>,
    query: &str,
) -> Vec<&'a T> {
    if query.is_empty() {
        return candidates.iter().collect();
    }
    let needle = query.to_lowercase();
    candidates
        .iter()
        .filter(|candidate| fields.matches(candidate, &needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Person {
        name: &'static str,
        code: &'static str,
    }

    fn fields() -> QueryFields<Person> {
        QueryFields::new()
            .field(|p: &Person| p.name.to_string())
            .field(|p: &Person| p.code.to_string())
    }

    fn people() -> Vec<Person> {
        vec![
            Person {
                name: "Nguyễn Văn A",
                code: "BN-001",
            },
            Person {
                name: "Trần Thị B",
                code: "BN-002",
            },
        ]
    }

    #[test]
    fn empty_query_retains_all_in_order() {
        let people = people();
        let filtered = filter_candidates(&people, &fields(), "");
        let names: Vec<_> = filtered.iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Nguyễn Văn A", "Trần Thị B"]);
    }

    #[test]
    fn accented_substring_matches_case_insensitively() {
        let people = people();
        let filtered = filter_candidates(&people, &fields(), "văn");
        let names: Vec<_> = filtered.iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Nguyễn Văn A"]);

        // Accent-preserving: the unaccented form does not match.
        assert!(filter_candidates(&people, &fields(), "van").is_empty());
    }

    #[test]
    fn any_field_may_match() {
        let people = people();
        let filtered = filter_candidates(&people, &fields(), "bn-002");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Trần Thị B");
    }

    #[test]
    fn empty_candidates_yield_empty_result() {
        let none: Vec<Person> = vec![];
        assert!(filter_candidates(&none, &fields(), "anything").is_empty());
    }
}
