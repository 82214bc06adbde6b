//! Turn sequencing over a fixed seating order.

/// Finds the next seat after `from` that satisfies `eligible`, wrapping
/// around the table.
///
/// At most one full lap is scanned, so `from` itself is the last seat tried.
/// Returns `None` when no seat qualifies; callers check for phase completion
/// before asking.
pub fn next_active(
    len: usize,
    from: usize,
    mut eligible: impl FnMut(usize) -> bool,
) -> Option<usize> {
    (1..=len)
        .map(|step| (from + step) % len)
        .find(|&index| eligible(index))
}

/// Finds the first seat, starting from seat 0, that satisfies `eligible`.
pub fn first_active(len: usize, eligible: impl FnMut(usize) -> bool) -> Option<usize> {
    if len == 0 {
        return None;
    }
    next_active(len, len - 1, eligible)
}
