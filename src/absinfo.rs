use std::fmt;
use std::path::Path;

use crate::probe::{self, AXIS_FIELDS};
use crate::raw::input_absinfo;

/// Parameters of an absolute axis: its current value, range, noise filter,
/// and deadzone.
#[derive(Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct AxisParams(pub(crate) input_absinfo);

impl AxisParams {
    /// Queries axis `axis` of the device behind `path`.
    ///
    /// Returns [`None`] when the device cannot be opened or `axis` is out of
    /// range. Axes the device does not actually have read back as all-zero.
    pub fn read_from<P: AsRef<Path>>(path: P, axis: u16) -> Option<Self> {
        let mut params = [0; AXIS_FIELDS];
        probe::abs_axis_info(path, &mut params, axis).then(|| Self::from_raw(params))
    }

    /// Builds [`AxisParams`] from the positional vector filled by
    /// [`abs_axis_info`][crate::abs_axis_info].
    #[inline]
    pub const fn from_raw(params: [i32; AXIS_FIELDS]) -> Self {
        Self(input_absinfo {
            value: params[0],
            minimum: params[1],
            maximum: params[2],
            fuzz: params[3],
            flat: params[4],
        })
    }

    /// Returns the axis' current value.
    ///
    /// This is *typically* between [`minimum`][Self::minimum] and
    /// [`maximum`][Self::maximum], but the kernel does not enforce that.
    #[inline]
    pub const fn value(&self) -> i32 {
        self.0.value
    }

    /// Returns the minimum value of this axis.
    #[inline]
    pub const fn minimum(&self) -> i32 {
        self.0.minimum
    }

    /// Returns the maximum value of this axis.
    #[inline]
    pub const fn maximum(&self) -> i32 {
        self.0.maximum
    }

    /// Returns the *fuzz* value of the axis.
    ///
    /// The *fuzz* value is used by the kernel to filter out noise.
    #[inline]
    pub const fn fuzz(&self) -> i32 {
        self.0.fuzz
    }

    /// Returns the *flat* value of the axis.
    ///
    /// The *flat* value configures the axis deadzone.
    #[inline]
    pub const fn flat(&self) -> i32 {
        self.0.flat
    }
}

impl fmt::Debug for AxisParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AxisParams")
            .field("value", &self.value())
            .field("minimum", &self.minimum())
            .field("maximum", &self.maximum())
            .field("fuzz", &self.fuzz())
            .field("flat", &self.flat())
            .finish()
    }
}
