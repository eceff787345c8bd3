//! String helpers shared by the round state and the dispatcher.

/// Find every non-overlapping occurrence of `pattern` in `source`.
///
/// Returns the start offsets in left-to-right order, or `None` when the
/// pattern never occurs. The scan is pure: nothing is carried over between
/// calls.
pub fn find_all(source: &str, pattern: &str) -> Option<Vec<usize>> {
    if pattern.is_empty() {
        return None;
    }

    let indices: Vec<usize> = source.match_indices(pattern).map(|(idx, _)| idx).collect();
    if indices.is_empty() {
        None
    } else {
        Some(indices)
    }
}

/// Render a collection of values as a sorted, comma-joined string.
///
/// Sorting is plain lexicographic so the output is deterministic regardless
/// of set iteration order.
pub fn join_sorted<T: ToString>(items: impl IntoIterator<Item = T>) -> String {
    let mut parts: Vec<String> = items.into_iter().map(|item| item.to_string()).collect();
    parts.sort();
    parts.join(",")
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_find_all_every_occurrence() {
        assert_eq!(find_all("banana", "a"), Some(vec![1, 3, 5]));
        assert_eq!(find_all("banana", "b"), Some(vec![0]));
    }

    #[test]
    fn test_find_all_no_match() {
        assert_eq!(find_all("banana", "z"), None);
    }

    #[test]
    fn test_find_all_multichar_pattern() {
        assert_eq!(find_all("banana", "an"), Some(vec![1, 3]));
    }

    #[test]
    fn test_find_all_non_overlapping() {
        // Overlapping occurrences are consumed left to right.
        assert_eq!(find_all("aaaa", "aa"), Some(vec![0, 2]));
    }

    #[test]
    fn test_find_all_empty_pattern() {
        assert_eq!(find_all("banana", ""), None);
    }

    #[test]
    fn test_find_all_is_repeatable() {
        // No hidden cursor: the same call yields the same answer twice.
        assert_eq!(find_all("mississippi", "ss"), Some(vec![2, 5]));
        assert_eq!(find_all("mississippi", "ss"), Some(vec![2, 5]));
    }

    #[test]
    fn test_join_sorted_letters() {
        let mut letters = HashSet::new();
        letters.insert('b');
        letters.insert('a');
        assert_eq!(join_sorted(&letters), "a,b");
    }

    #[test]
    fn test_join_sorted_words() {
        let mut words = HashSet::new();
        words.insert("kiwi".to_string());
        words.insert("banana".to_string());
        words.insert("cherry".to_string());
        assert_eq!(join_sorted(&words), "banana,cherry,kiwi");
    }

    #[test]
    fn test_join_sorted_empty() {
        let empty: HashSet<char> = HashSet::new();
        assert_eq!(join_sorted(&empty), "");
    }
}
