//! Offset/length resolution for `slice` and `chunk`.

use core::ops::Range;

/// Resolves an `(offset, length)` request against a sequence of `len` items.
///
/// - A negative `offset` counts from the end and is clamped at zero.
/// - An `offset` at or past the end yields an empty range.
/// - `None` for `length` runs to the end.
/// - A negative `length` stops that many items before the end.
/// - A `length` longer than what is left is clamped.
pub(crate) fn resolve(len: usize, offset: isize, length: Option<isize>) -> Range<usize> {
    let start = if offset < 0 {
        len.saturating_sub(offset.unsigned_abs())
    } else {
        offset.unsigned_abs().min(len)
    };
    let remaining = len - start;

    let take = match length {
        None => remaining,
        Some(length) if length < 0 => remaining.saturating_sub(length.unsigned_abs()),
        Some(length) => length.unsigned_abs().min(remaining),
    };

    start..start + take
}

#[cfg(test)]
mod tests {
    use super::resolve;

    #[test]
    fn test_resolve_forward() {
        assert_eq!(resolve(4, 0, None), 0..4);
        assert_eq!(resolve(4, 1, Some(1)), 1..2);
        assert_eq!(resolve(4, 2, Some(100)), 2..4);
        assert_eq!(resolve(4, 4, None), 4..4);
        assert_eq!(resolve(4, 10, Some(2)), 4..4);
    }

    #[test]
    fn test_resolve_negative_offset() {
        assert_eq!(resolve(4, -1, None), 3..4);
        assert_eq!(resolve(4, -3, Some(2)), 1..3);
        // Clamped at the front
        assert_eq!(resolve(4, -10, Some(1)), 0..1);
    }

    #[test]
    fn test_resolve_negative_length() {
        assert_eq!(resolve(5, 0, Some(-2)), 0..3);
        assert_eq!(resolve(5, 1, Some(-1)), 1..4);
        assert_eq!(resolve(5, 3, Some(-4)), 3..3);
        assert_eq!(resolve(5, -2, Some(-1)), 3..4);
    }

    #[test]
    fn test_resolve_empty_sequence() {
        assert_eq!(resolve(0, 0, None), 0..0);
        assert_eq!(resolve(0, -1, Some(3)), 0..0);
        assert_eq!(resolve(0, 0, Some(0)), 0..0);
    }
}
