//! Calibrated wheel constants.
//!
//! Policy
//! - Every value here was tuned by measuring rendered wheels across phone and
//!   tablet viewports until adjacent panels stopped showing seams. They are not
//!   free parameters: changing one shifts the gap margin on some device class.
//! - `WheelCfg::default()` is the only configuration used by
//!   `engine::compute_geometry`. Hand-built configs exist for tests and benches
//!   and must pass `WheelCfg::validate` before use.
//! - The unit tests below pin the numbers so accidental drift fails loudly.

use thiserror::Error;

/// Raised by [`WheelCfg::validate`] for configs that cannot produce geometry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CfgError {
    #[error("invalid wheel config: {reason}")]
    Invalid { reason: String },
}

impl CfgError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::Invalid {
            reason: reason.into(),
        }
    }
}

/// Font size steps keyed on viewport width.
///
/// A width below `widths[i]` maps to `sizes[i]`; anything at or above the last
/// width maps to `fallback`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontBreakpoints {
    pub widths: [f64; 3],
    pub sizes: [u32; 3],
    pub fallback: u32,
}

impl Default for FontBreakpoints {
    fn default() -> Self {
        Self::CALIBRATED
    }
}

impl FontBreakpoints {
    pub const CALIBRATED: Self = Self {
        widths: [480.0, 768.0, 1024.0],
        sizes: [14, 16, 18],
        fallback: 20,
    };

    /// Lower edges are half-open: `width == 480` already maps to the next step.
    #[inline]
    pub fn size_for(&self, width: f64) -> u32 {
        self.widths
            .iter()
            .zip(self.sizes)
            .find(|(edge, _)| width < **edge)
            .map_or(self.fallback, |(_, size)| size)
    }
}

/// Wheel calibration (radius policy, panel sizing, audit threshold).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelCfg {
    /// Fraction of viewport width used as the raw radius.
    pub base_radius_multiplier: f64,
    pub min_radius: f64,
    pub max_radius: f64,
    pub panel_count: u32,
    /// Safety margin applied to the arc length before rounding up.
    pub overlap_buffer: f64,
    /// Fraction of viewport height used as the raw panel height.
    pub panel_height_ratio: f64,
    pub min_panel_height: f64,
    pub max_panel_height: f64,
    /// Gap risk is flagged when `arc > min_width * gap_risk_ratio`.
    pub gap_risk_ratio: f64,
    pub font_breakpoints: FontBreakpoints,
}

impl Default for WheelCfg {
    fn default() -> Self {
        Self::CALIBRATED
    }
}

impl WheelCfg {
    /// Measured defaults. Do not change without re-checking every device preset.
    pub const CALIBRATED: Self = Self {
        base_radius_multiplier: 0.18,
        min_radius: 110.0,
        max_radius: 160.0,
        panel_count: 20,
        overlap_buffer: 1.05,
        panel_height_ratio: 0.12,
        min_panel_height: 60.0,
        max_panel_height: 120.0,
        gap_risk_ratio: 0.95,
        font_breakpoints: FontBreakpoints::CALIBRATED,
    };

    /// Angular slice owned by one panel, in degrees.
    #[inline]
    pub fn degrees_per_panel(&self) -> f64 {
        360.0 / f64::from(self.panel_count)
    }

    pub fn validate(&self) -> Result<(), CfgError> {
        let reals = [
            self.base_radius_multiplier,
            self.min_radius,
            self.max_radius,
            self.overlap_buffer,
            self.panel_height_ratio,
            self.min_panel_height,
            self.max_panel_height,
            self.gap_risk_ratio,
        ];
        if reals.iter().any(|v| !v.is_finite()) {
            return Err(CfgError::invalid("all values must be finite"));
        }
        if self.base_radius_multiplier <= 0.0 {
            return Err(CfgError::invalid("base_radius_multiplier must be > 0"));
        }
        if self.min_radius <= 0.0 {
            return Err(CfgError::invalid("min_radius must be > 0"));
        }
        if self.min_radius > self.max_radius {
            return Err(CfgError::invalid("min_radius <= max_radius required"));
        }
        if self.panel_count == 0 {
            return Err(CfgError::invalid("need at least one panel"));
        }
        if self.overlap_buffer < 1.0 {
            return Err(CfgError::invalid("overlap_buffer must be >= 1"));
        }
        // The widest panel comes from max_radius and must fit the u32 width.
        let widest = (self.arc_length(self.max_radius) * self.overlap_buffer).ceil();
        if widest > f64::from(u32::MAX) {
            return Err(CfgError::invalid(
                "panel width at max_radius exceeds u32::MAX",
            ));
        }
        if self.panel_height_ratio <= 0.0 || self.min_panel_height <= 0.0 {
            return Err(CfgError::invalid("panel height terms must be > 0"));
        }
        if self.min_panel_height > self.max_panel_height {
            return Err(CfgError::invalid(
                "min_panel_height <= max_panel_height required",
            ));
        }
        if !(self.gap_risk_ratio > 0.0 && self.gap_risk_ratio <= 1.0) {
            return Err(CfgError::invalid("gap_risk_ratio must be in (0, 1]"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_pinned() {
        let cfg = WheelCfg::default();
        assert_eq!(cfg.base_radius_multiplier, 0.18);
        assert_eq!(cfg.min_radius, 110.0);
        assert_eq!(cfg.max_radius, 160.0);
        assert_eq!(cfg.panel_count, 20);
        assert_eq!(cfg.overlap_buffer, 1.05);
        assert_eq!(cfg.panel_height_ratio, 0.12);
        assert_eq!(cfg.min_panel_height, 60.0);
        assert_eq!(cfg.max_panel_height, 120.0);
        assert_eq!(cfg.gap_risk_ratio, 0.95);
        assert_eq!(cfg.degrees_per_panel(), 18.0);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn font_breakpoints_pinned() {
        let fb = FontBreakpoints::default();
        assert_eq!(fb.widths, [480.0, 768.0, 1024.0]);
        assert_eq!(fb.sizes, [14, 16, 18]);
        assert_eq!(fb.fallback, 20);
    }

    #[test]
    fn validate_rejects_inverted_radius_bounds() {
        let cfg = WheelCfg {
            min_radius: 200.0,
            ..WheelCfg::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("min_radius <= max_radius"));
    }

    #[test]
    fn validate_rejects_degenerate_values() {
        let base = WheelCfg::default();
        let bad = [
            WheelCfg {
                panel_count: 0,
                ..base
            },
            WheelCfg {
                overlap_buffer: 0.9,
                ..base
            },
            WheelCfg {
                min_radius: 0.0,
                ..base
            },
            WheelCfg {
                gap_risk_ratio: 1.5,
                ..base
            },
            WheelCfg {
                max_panel_height: f64::NAN,
                ..base
            },
            WheelCfg {
                min_panel_height: 130.0,
                ..base
            },
        ];
        for cfg in bad {
            assert!(cfg.validate().is_err(), "{cfg:?} should be rejected");
        }
    }

    #[test]
    fn validate_rejects_unrepresentable_panel_width() {
        let cfg = WheelCfg {
            max_radius: 1e12,
            base_radius_multiplier: 1e9,
            ..WheelCfg::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("u32::MAX"));
        assert!(crate::engine::compute_geometry_with(&cfg, 1000.0, 800.0).is_err());
    }

    #[test]
    fn large_but_representable_radius_keeps_width_above_arc() {
        let cfg = WheelCfg {
            max_radius: 1e8,
            base_radius_multiplier: 1e6,
            ..WheelCfg::default()
        };
        assert!(cfg.validate().is_ok());
        let g = crate::engine::compute_geometry_with(&cfg, 1000.0, 800.0).unwrap();
        assert_eq!(g.radius, 1e8);
        assert!(f64::from(g.panel_min_width) >= g.arc_length.ceil());
    }
}
