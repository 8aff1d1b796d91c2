//! Traversal over an ordered option list
//!
//! Ready-made bodies for the `get_next_option` / `get_previous_option` hooks
//! when the host keeps its options in a slice.

fn position<T: AsRef<str>>(options: &[T], current: Option<&str>) -> Option<usize> {
    let current = current?;
    options.iter().position(|option| option.as_ref() == current)
}

/// The option after `current`
///
/// Without a current option (or with one that is not in the list) the first
/// option is returned. At the end of the list the result is the first option
/// when `wrap` is set, `None` otherwise.
pub fn next_option<'a, T: AsRef<str>>(
    options: &'a [T],
    current: Option<&str>,
    wrap: bool,
) -> Option<&'a T> {
    match position(options, current) {
        Some(index) if index + 1 < options.len() => options.get(index + 1),
        Some(_) if wrap => options.first(),
        Some(_) => None,
        None => options.first(),
    }
}

/// The option before `current`
///
/// Without a current option (or with one that is not in the list) the last
/// option is returned. At the start of the list the result is the last option
/// when `wrap` is set, `None` otherwise.
pub fn previous_option<'a, T: AsRef<str>>(
    options: &'a [T],
    current: Option<&str>,
    wrap: bool,
) -> Option<&'a T> {
    match position(options, current) {
        Some(0) if wrap => options.last(),
        Some(0) => None,
        Some(index) => options.get(index - 1),
        None => options.last(),
    }
}
