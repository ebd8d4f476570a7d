/// Inclusive `[min, max]` interval.
///
/// Construction does not reorder or validate the ends; callers that accept
/// user supplied bounds decide what an inverted range means.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub struct Range<T> {
    min: T,
    max: T,
}

impl<T> Range<T> {
    #[inline]
    pub const fn new(min: T, max: T) -> Self { Self { min, max } }

    #[inline]
    pub const fn min(&self) -> &T { &self.min }

    #[inline]
    pub const fn max(&self) -> &T { &self.max }
}

impl<T: PartialOrd> Range<T> {
    #[inline]
    pub fn is_inverted(&self) -> bool { self.min > self.max }
}

impl<T: PartialOrd + Copy> Range<T> {
    /// `max(min, min(v, max))`; for an inverted range the lower end wins.
    #[inline]
    pub fn clamp(&self, v: &T) -> T {
        let v = if *v > self.max { self.max } else { *v };

        if v < self.min {
            self.min
        }
        else {
            v
        }
    }
}

impl Range<i64> {
    /// `max - min`, saturating at the ends of `i64`.
    #[inline]
    pub fn span(&self) -> i64 { self.max.saturating_sub(self.min) }
}
