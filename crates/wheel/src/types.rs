//! Input and output records of the geometry engine.
//!
//! - `ViewportSize`: validated, strictly positive viewport dimensions.
//! - `WheelGeometry`: immutable result of `engine::compute_geometry`.
//! - `Status`: audit verdict derived from the gap-risk flag.

use std::f64::consts::PI;
use std::fmt;

use crate::clamp::Saturation;
use crate::engine::GeometryError;

/// Viewport dimensions in caller-defined units (px or dp, same for both axes).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportSize {
    width: f64,
    height: f64,
}

impl ViewportSize {
    /// Fails with `InvalidInput` unless both dimensions are finite and `> 0`.
    pub fn new(width: f64, height: f64) -> Result<Self, GeometryError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !(valid(width) && valid(height)) {
            return Err(GeometryError::InvalidInput { width, height });
        }
        Ok(Self { width, height })
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[inline]
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }
}

/// Audit verdict: `Warning` iff the geometry carries gap risk.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    Ok,
    Warning,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::Warning => "WARNING",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derived wheel and panel dimensions for one viewport.
///
/// Created fresh per call and never mutated; equal inputs give equal values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelGeometry {
    pub viewport: ViewportSize,
    /// Clamped to `[min_radius, max_radius]`.
    pub radius: f64,
    pub radius_saturation: Saturation,
    pub panel_count: u32,
    pub degrees_per_panel: f64,
    /// Distance between adjacent panel centers measured along the ring.
    pub arc_length: f64,
    /// `ceil(arc_length * overlap_buffer)`.
    pub panel_min_width: u32,
    pub panel_height: f64,
    pub font_size: u32,
    /// Audit of the sizing: the buffered width may still leave a seam.
    pub gap_risk: bool,
    pub radius_at_limit: bool,
}

impl WheelGeometry {
    #[inline]
    pub fn diameter(&self) -> f64 {
        self.radius * 2.0
    }

    #[inline]
    pub fn circumference(&self) -> f64 {
        2.0 * PI * self.radius
    }

    #[inline]
    pub fn status(&self) -> Status {
        if self.gap_risk {
            Status::Warning
        } else {
            Status::Ok
        }
    }
}
