//! Geometry engine: viewport size → wheel and panel dimensions.
//!
//! Purpose
//! - Size a ring of equally spaced panels so neighbours touch or overlap on any
//!   screen, while keeping the ring radius inside fixed visual bounds.
//! - Audit the result: `gap_risk` reports when rounding and clamping may still
//!   leave a visible seam.
//!
//! Shape
//! - Each sizing step is a small pure helper on `WheelCfg`; the free
//!   `compute_*` functions apply them with the calibrated defaults.
//! - `compute_geometry` is the single validated entry point. No state, no I/O;
//!   safe to call on every resize from any thread.
//! - Sizing and auditing are two separate stages. The panel width is the arc
//!   length padded by `overlap_buffer` and rounded up; the audit then compares
//!   the raw arc against `gap_risk_ratio` of that padded width.

use std::f64::consts::PI;

use thiserror::Error;

use crate::cfg::{CfgError, WheelCfg};
use crate::clamp::Clamped;
use crate::types::{ViewportSize, WheelGeometry};

/// Errors surfaced by [`compute_geometry`] and [`compute_geometry_with`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// A viewport dimension is zero, negative, or not finite.
    #[error("invalid viewport {width}x{height}: dimensions must be finite and > 0")]
    InvalidInput { width: f64, height: f64 },
    /// A hand-built config failed validation.
    #[error(transparent)]
    Config(#[from] CfgError),
}

impl WheelCfg {
    /// Raw radius `width * base_radius_multiplier`, clamped to the radius bounds.
    #[inline]
    pub fn radius(&self, viewport_width: f64) -> Clamped {
        Clamped::new(
            viewport_width * self.base_radius_multiplier,
            self.min_radius,
            self.max_radius,
        )
    }

    /// Circumference fraction subtended by one panel slice.
    #[inline]
    pub fn arc_length(&self, radius: f64) -> f64 {
        2.0 * PI * radius * (self.degrees_per_panel() / 360.0)
    }

    /// Smallest whole panel width covering one slice, overlap margin included.
    #[inline]
    pub fn panel_min_width(&self, radius: f64) -> u32 {
        // `WheelCfg::validate` caps the width at max_radius to fit in u32.
        (self.arc_length(radius) * self.overlap_buffer).ceil() as u32
    }

    #[inline]
    pub fn panel_height(&self, viewport_height: f64) -> f64 {
        Clamped::new(
            viewport_height * self.panel_height_ratio,
            self.min_panel_height,
            self.max_panel_height,
        )
        .value
    }

    #[inline]
    pub fn font_size(&self, viewport_width: f64) -> u32 {
        self.font_breakpoints.size_for(viewport_width)
    }

    /// Assemble the full record for an already validated viewport.
    pub fn geometry(&self, viewport: ViewportSize) -> WheelGeometry {
        let radius = self.radius(viewport.width());
        let arc_length = self.arc_length(radius.value);
        let panel_min_width = self.panel_min_width(radius.value);
        let gap_risk = arc_length > f64::from(panel_min_width) * self.gap_risk_ratio;
        WheelGeometry {
            viewport,
            radius: radius.value,
            radius_saturation: radius.saturation,
            panel_count: self.panel_count,
            degrees_per_panel: self.degrees_per_panel(),
            arc_length,
            panel_min_width,
            panel_height: self.panel_height(viewport.height()),
            font_size: self.font_size(viewport.width()),
            gap_risk,
            radius_at_limit: radius.is_saturated(),
        }
    }
}

/// Wheel radius for `viewport_width`, clamped to `[110, 160]`.
#[inline]
pub fn compute_radius(viewport_width: f64) -> f64 {
    WheelCfg::CALIBRATED.radius(viewport_width).value
}

#[inline]
pub fn compute_arc_length(radius: f64) -> f64 {
    WheelCfg::CALIBRATED.arc_length(radius)
}

#[inline]
pub fn compute_panel_min_width(radius: f64) -> u32 {
    WheelCfg::CALIBRATED.panel_min_width(radius)
}

#[inline]
pub fn compute_panel_height(viewport_height: f64) -> f64 {
    WheelCfg::CALIBRATED.panel_height(viewport_height)
}

/// Step function of width alone: `<480 → 14, <768 → 16, <1024 → 18, else 20`.
#[inline]
pub fn compute_font_size(viewport_width: f64) -> u32 {
    WheelCfg::CALIBRATED.font_size(viewport_width)
}

/// Compute the wheel geometry for a viewport using the calibrated defaults.
///
/// Fails atomically with `InvalidInput` when either dimension is not a finite
/// positive number.
pub fn compute_geometry(
    viewport_width: f64,
    viewport_height: f64,
) -> Result<WheelGeometry, GeometryError> {
    let viewport = ViewportSize::new(viewport_width, viewport_height)?;
    Ok(WheelCfg::CALIBRATED.geometry(viewport))
}

/// Same as [`compute_geometry`] with an explicit, validated config.
pub fn compute_geometry_with(
    cfg: &WheelCfg,
    viewport_width: f64,
    viewport_height: f64,
) -> Result<WheelGeometry, GeometryError> {
    cfg.validate()?;
    let viewport = ViewportSize::new(viewport_width, viewport_height)?;
    Ok(cfg.geometry(viewport))
}
