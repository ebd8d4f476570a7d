use crate::{number::round_half_up, range::Range, type_cell::TypeCell};

pub trait Converter<From, To> {
    fn convert(&self, value: From) -> To;
}

pub trait IsoConverter<From, To>: Converter<From, To> {
    fn convert_inverse(&self, value: To) -> From;
}

#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PercentTag;

/// Position along the track, 0 at the left end and 100 at the right.
pub type Percent = TypeCell<PercentTag, f64>;

/// Maps slider values onto track percentages and back.
///
/// Nothing guards an empty range: with `min == max` every percentage comes
/// out non-finite, which is what ends up in the progress style.
#[derive(Clone, PartialEq, Debug)]
pub struct LinearPercentConverter {
    bounds: Range<i64>,
    range:  f64,
}

impl LinearPercentConverter {
    pub fn new(bounds: Range<i64>) -> Self {
        Self {
            bounds,
            range: *bounds.max() as f64 - *bounds.min() as f64,
        }
    }

    /// Share of the track covered by `[lo, hi]`.
    pub fn span_to_percent(&self, lo: i64, hi: i64) -> Percent {
        ((hi as f64 - lo as f64) / self.range * 100.0).into()
    }
}

impl Converter<i64, Percent> for LinearPercentConverter {
    fn convert(&self, value: i64) -> Percent {
        ((value as f64 - *self.bounds.min() as f64) / self.range * 100.0).into()
    }
}

impl IsoConverter<i64, Percent> for LinearPercentConverter {
    /// Nearest whole value, half-way cases rounding up. Non-finite input
    /// lands on the lower bound.
    fn convert_inverse(&self, value: Percent) -> i64 {
        let offset = round_half_up(*value / 100.0 * self.range);

        if offset.is_finite() {
            (offset as i64).saturating_add(*self.bounds.min())
        }
        else {
            *self.bounds.min()
        }
    }
}
