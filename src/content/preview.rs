//! Home page project preview.

/// Number of leading items shown: a quarter of `total`, rounded up, and at
/// least one, except that nothing is shown when there is nothing to show.
pub fn preview_len(total: usize) -> usize {
    if total == 0 {
        return 0;
    }
    total.div_ceil(4).max(1)
}

/// The leading slice of `items` sized by [`preview_len`].
pub fn preview<T>(items: &[T]) -> &[T] {
    &items[..preview_len(items.len())]
}
