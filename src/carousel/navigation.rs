//! Index arithmetic and boundary policy.

/// Resolve a requested index against the boundary policy.
///
/// Past the end resolves to the first slide when looping, else the last.
/// Before the start resolves to the last slide when looping, else the first.
/// `count` must be non-zero.
#[must_use]
pub fn resolve_target(target: isize, count: usize, looping: bool) -> usize {
    debug_assert!(count > 0, "resolve_target on an empty carousel");
    let last = count.saturating_sub(1);
    if target < 0 {
        return if looping { last } else { 0 };
    }
    let target = target as usize;
    if target >= count {
        if looping { 0 } else { last }
    } else {
        target
    }
}

/// Signed index one step away from `current`.
#[must_use]
pub fn step(current: usize, forward: bool) -> isize {
    let current = current as isize;
    if forward { current + 1 } else { current - 1 }
}
