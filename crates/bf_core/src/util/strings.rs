//! Menu/flag string helpers and the strict string joiner.

use crate::error::UtilError;

/// `"ON"` / `"OFF"` label for a settings flag.
pub fn format_on_off(flag: bool) -> &'static str {
    if flag {
        "ON"
    } else {
        "OFF"
    }
}

/// Single-character pass/fail mark for a settings flag.
///
/// `"c"` and `"e"` are the historical stand-ins for the circle and cross
/// glyphs in the bitmap font; keep them as-is.
pub fn format_mark(flag: bool) -> &'static str {
    if flag {
        "c"
    } else {
        "e"
    }
}

/// Join `items[start_index..]` with `separator`, no trailing separator.
///
/// An empty `items` slice is a contract violation (`InvalidArgument`), as is
/// a `start_index` past the end (`IndexOutOfRange`, a distinct kind).
/// `start_index == items.len()` is valid and yields the empty string.
pub fn combine_strings(
    items: &[&str],
    separator: &str,
    start_index: usize,
) -> Result<String, UtilError> {
    if items.is_empty() {
        return Err(UtilError::InvalidArgument("items must not be empty"));
    }
    if start_index > items.len() {
        return Err(UtilError::IndexOutOfRange {
            index: start_index,
            len: items.len(),
        });
    }

    Ok(items[start_index..].join(separator))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_on_off() {
        assert_eq!(format_on_off(true), "ON");
        assert_eq!(format_on_off(false), "OFF");
    }

    #[test]
    fn test_mark() {
        assert_eq!(format_mark(true), "c");
        assert_eq!(format_mark(false), "e");
    }

    #[test]
    fn test_combine_from_offset() {
        let items = ["test1", "test2", "test3"];
        assert_eq!(combine_strings(&items, ", ", 1).unwrap(), "test2, test3");
    }

    #[test]
    fn test_combine_whole_slice() {
        let items = ["test1", "test2", "test3"];
        assert_eq!(
            combine_strings(&items, ", ", 0).unwrap(),
            "test1, test2, test3"
        );
    }

    #[test]
    fn test_single_item_has_no_separator() {
        assert_eq!(combine_strings(&["test1"], ", ", 0).unwrap(), "test1");
    }

    #[test]
    fn test_start_at_len_yields_empty() {
        assert_eq!(combine_strings(&["test1"], ", ", 1).unwrap(), "");
    }

    #[test]
    fn test_empty_items_is_invalid_argument() {
        assert!(matches!(
            combine_strings(&[], ", ", 0),
            Err(UtilError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_start_past_end_is_index_out_of_range() {
        assert_eq!(
            combine_strings(&["test1", "test2", "test3"], ", ", 4),
            Err(UtilError::IndexOutOfRange { index: 4, len: 3 })
        );
    }
}
