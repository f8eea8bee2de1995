/// Insert `token` into the already sorted `list` unless an equal element is
/// present.
///
/// Returns `true` if `token` was inserted.
///
/// ```
/// use tokentrie::insert_unique_sorted;
///
/// let mut tokens = vec!["<a>".to_string(), "<c>".to_string()];
/// assert!(insert_unique_sorted(&mut tokens, "<b>".to_string()));
/// assert!(!insert_unique_sorted(&mut tokens, "<c>".to_string()));
/// assert_eq!(tokens, ["<a>", "<b>", "<c>"]);
/// ```
pub fn insert_unique_sorted<T: Ord>(list: &mut Vec<T>, token: T) -> bool {
    match list.binary_search(&token) {
        Ok(_) => false,
        Err(idx) => {
            list.insert(idx, token);
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_into_empty() {
        let mut list: Vec<String> = Vec::new();
        assert!(insert_unique_sorted(&mut list, "[CLS]".to_string()));
        assert_eq!(list, vec!["[CLS]"]);
    }

    #[test]
    fn test_insert_front_and_back() {
        let mut list = vec!["b", "c"];
        assert!(insert_unique_sorted(&mut list, "a"));
        assert!(insert_unique_sorted(&mut list, "d"));
        assert_eq!(list, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_duplicate_is_noop() {
        let mut list = vec!["<mask>", "<pad>", "<unk>"];
        assert!(!insert_unique_sorted(&mut list, "<pad>"));
        assert_eq!(list, vec!["<mask>", "<pad>", "<unk>"]);
    }

    #[test]
    fn test_merge_keeps_order_and_uniqueness() {
        let mut list: Vec<String> = Vec::new();
        for token in ["<b>", "<a>", "<b>", "<c>", "<a>"] {
            insert_unique_sorted(&mut list, token.to_string());
        }
        assert_eq!(list, vec!["<a>", "<b>", "<c>"]);
    }
}
