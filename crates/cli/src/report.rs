//! Serialized geometry record handed to rendering layers and printed by the CLI.
//!
//! Continuous values are rounded half away from zero to 2 decimals, the aspect
//! ratio to 3. Integers and the panel slice angle are emitted as computed.

use serde::Serialize;
use wheel::WheelGeometry;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeometryReport {
    pub viewport: ViewportSection,
    pub wheel: WheelSection,
    pub panels: PanelsSection,
    pub validation: ValidationSection,
    pub presentation: PresentationSection,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewportSection {
    pub width: f64,
    pub height: f64,
    pub aspect_ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WheelSection {
    pub radius: f64,
    pub diameter: f64,
    pub circumference: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelsSection {
    pub count: u32,
    pub degrees_per_panel: f64,
    pub arc_length: f64,
    pub min_width: u32,
    pub height: f64,
    pub font_size: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationSection {
    pub gap_risk: bool,
    pub radius_at_limit: bool,
    pub status: &'static str,
}

/// Offsets a renderer applies to place faces on the ring.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentationSection {
    pub transform_origin_offset: f64,
    pub translate_z_offset: f64,
    /// `transform-origin` value pulling the pivot back to the wheel center.
    pub transform_origin: String,
    pub panel_translate_z: String,
}

/// Round half away from zero to `places` decimals.
pub fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

impl From<&WheelGeometry> for GeometryReport {
    fn from(g: &WheelGeometry) -> Self {
        let radius = round_to(g.radius, 2);
        Self {
            viewport: ViewportSection {
                width: g.viewport.width(),
                height: g.viewport.height(),
                aspect_ratio: round_to(g.viewport.aspect_ratio(), 3),
            },
            wheel: WheelSection {
                radius,
                diameter: round_to(g.diameter(), 2),
                circumference: round_to(g.circumference(), 2),
            },
            panels: PanelsSection {
                count: g.panel_count,
                degrees_per_panel: g.degrees_per_panel,
                arc_length: round_to(g.arc_length, 2),
                min_width: g.panel_min_width,
                height: round_to(g.panel_height, 2),
                font_size: g.font_size,
            },
            validation: ValidationSection {
                gap_risk: g.gap_risk,
                radius_at_limit: g.radius_at_limit,
                status: g.status().as_str(),
            },
            presentation: PresentationSection {
                transform_origin_offset: radius,
                translate_z_offset: radius,
                transform_origin: format!("center center -{radius}px"),
                panel_translate_z: format!("{radius}px"),
            },
        }
    }
}
