//! Clamp-and-flag: a bounded value that remembers whether a bound won.

/// Which bound, if any, overrode the raw value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Saturation {
    None,
    Min,
    Max,
}

/// A value clamped into `[lo, hi]` plus the saturation it hit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Clamped {
    pub value: f64,
    pub saturation: Saturation,
}

impl Clamped {
    /// Pre: `lo <= hi`, `raw` finite.
    ///
    /// A raw value exactly on a bound counts as saturated, so the flag agrees
    /// with `value == lo || value == hi`.
    #[inline]
    pub fn new(raw: f64, lo: f64, hi: f64) -> Self {
        debug_assert!(lo <= hi, "clamp bounds inverted: {lo} > {hi}");
        if raw <= lo {
            Self {
                value: lo,
                saturation: Saturation::Min,
            }
        } else if raw >= hi {
            Self {
                value: hi,
                saturation: Saturation::Max,
            }
        } else {
            Self {
                value: raw,
                saturation: Saturation::None,
            }
        }
    }

    #[inline]
    pub fn is_saturated(&self) -> bool {
        self.saturation != Saturation::None
    }
}
