//! Panel placement on the rotated ring.
//!
//! The wheel turns about the horizontal X axis. Panel `i` is rotated by
//! `i * degrees_per_panel` and pushed out by the radius along the rotated Z
//! axis, i.e. the `rotateX(angle) translateZ(radius)` composition a renderer
//! applies per face. Angle 0 faces the viewer (+Z).

use nalgebra::{Rotation3, Vector3};

use crate::types::WheelGeometry;

/// Where one panel sits on the ring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelPlacement {
    pub index: u32,
    pub angle_deg: f64,
    /// Panel center in wheel coordinates (origin at the wheel center).
    pub center: Vector3<f64>,
}

/// Placement of every panel, in index order.
pub fn panel_placements(geom: &WheelGeometry) -> Vec<PanelPlacement> {
    let front = Vector3::new(0.0, 0.0, geom.radius);
    (0..geom.panel_count)
        .map(|index| {
            let angle_deg = f64::from(index) * geom.degrees_per_panel;
            let rot = Rotation3::from_axis_angle(&Vector3::x_axis(), angle_deg.to_radians());
            PanelPlacement {
                index,
                angle_deg,
                center: rot * front,
            }
        })
        .collect()
}

/// Straight-line distance between adjacent panel centers: `2 r sin(π / n)`.
///
/// Flat faces span this chord, so it is always shorter than the arc length.
#[inline]
pub fn chord_length(geom: &WheelGeometry) -> f64 {
    2.0 * geom.radius * (geom.degrees_per_panel.to_radians() / 2.0).sin()
}

/// Wheel rotation (degrees) that brings panel `index` to the front.
///
/// A ring without panels needs no rotation: returns `0.0`.
#[inline]
pub fn rotation_to_front(geom: &WheelGeometry, index: u32) -> f64 {
    if geom.panel_count == 0 {
        return 0.0;
    }
    -(f64::from(index % geom.panel_count) * geom.degrees_per_panel)
}

/// Index of the panel facing the viewer once the wheel is rotated by
/// `rotation_deg`. Halfway between two panels picks the higher slice.
///
/// A ring without panels returns `0`.
pub fn front_panel(geom: &WheelGeometry, rotation_deg: f64) -> u32 {
    if geom.panel_count == 0 {
        return 0;
    }
    let turned = (-rotation_deg).rem_euclid(360.0);
    let slice = (turned / geom.degrees_per_panel + 0.5).floor() as u32;
    slice % geom.panel_count
}
