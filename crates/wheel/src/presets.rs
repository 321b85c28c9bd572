//! Named device viewports used to spot-check the calibration.

use crate::engine::{compute_geometry, GeometryError};
use crate::types::WheelGeometry;

/// A device viewport in CSS pixels (portrait).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DevicePreset {
    pub name: &'static str,
    pub width: f64,
    pub height: f64,
}

impl DevicePreset {
    pub fn geometry(&self) -> Result<WheelGeometry, GeometryError> {
        compute_geometry(self.width, self.height)
    }
}

pub const DEVICE_PRESETS: [DevicePreset; 5] = [
    DevicePreset {
        name: "iPhone SE",
        width: 375.0,
        height: 667.0,
    },
    DevicePreset {
        name: "iPhone 16 Pro",
        width: 393.0,
        height: 852.0,
    },
    DevicePreset {
        name: "iPhone 16 Pro Max",
        width: 430.0,
        height: 932.0,
    },
    DevicePreset {
        name: "iPad Mini",
        width: 768.0,
        height: 1024.0,
    },
    DevicePreset {
        name: "iPad Pro 12.9",
        width: 1024.0,
        height: 1366.0,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Status;

    #[test]
    fn every_preset_is_gap_free() {
        for preset in DEVICE_PRESETS {
            let g = preset.geometry().unwrap();
            assert_eq!(g.status(), Status::Ok, "{} flagged gap risk", preset.name);
        }
    }

    #[test]
    fn phones_clamp_low_tablets_scale() {
        let radii: Vec<f64> = DEVICE_PRESETS
            .iter()
            .map(|p| p.geometry().unwrap().radius)
            .collect();
        assert_eq!(&radii[..3], &[110.0, 110.0, 110.0]);
        assert!((radii[3] - 138.24).abs() < 1e-9);
        assert_eq!(radii[4], 160.0);
    }
}
