/// Inclusive sort window after clamping. `end` is `-1` when there is nothing
/// to sort.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ValidatedRange {
    pub start: isize,
    pub end: isize,
    pub should_sort: bool,
}

impl ValidatedRange {
    /// The window as a half-open index range, if there is work to do.
    #[inline]
    pub fn as_range(&self) -> Option<std::ops::Range<usize>> {
        if !self.should_sort {
            return None;
        }
        Some(self.start as usize..self.end as usize + 1)
    }
}

/// Clamps a requested `[start, end]` window to the bounds of a slice of
/// length `len`. Out-of-range input is never an error: `start` lands in
/// `[0, len - 1]`, `end` in `[start, len - 1]`, so a reversed request
/// collapses to the single element at `start`.
pub fn validate_range(len: usize, start: isize, end: isize) -> ValidatedRange {
    if len == 0 {
        return ValidatedRange {
            start: 0,
            end: -1,
            should_sort: false,
        };
    }

    let last = isize::try_from(len - 1).unwrap_or(isize::MAX);
    let start = start.clamp(0, last);
    let end = end.clamp(start, last);
    ValidatedRange {
        start,
        end,
        should_sort: true,
    }
}
