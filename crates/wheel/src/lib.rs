//! Wheel geometry: derive ring radius and panel sizes from a viewport.
//!
//! A fixed number of equally spaced panels sits on a 3D-rotated ring. This
//! crate picks the ring radius from the viewport width (within fixed bounds),
//! sizes the panels so neighbours never leave a visible gap, and audits the
//! result.
//!
//! Everything here is pure: no state, no I/O, no logging. Callers own
//! debouncing of resize events and presentation of errors.

pub mod cfg;
pub mod clamp;
pub mod engine;
pub mod layout;
pub mod presets;
pub mod types;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::{CfgError, FontBreakpoints, WheelCfg};
pub use clamp::{Clamped, Saturation};
pub use engine::{
    compute_arc_length, compute_font_size, compute_geometry, compute_geometry_with,
    compute_panel_height, compute_panel_min_width, compute_radius, GeometryError,
};
pub use types::{Status, ViewportSize, WheelGeometry};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::engine::{compute_geometry, GeometryError};
    pub use crate::layout::{chord_length, front_panel, panel_placements, PanelPlacement};
    pub use crate::presets::{DevicePreset, DEVICE_PRESETS};
    pub use crate::types::{Status, WheelGeometry};
    pub use crate::WheelCfg;
}
