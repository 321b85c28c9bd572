//! Width sweep across the radius bands.
//!
//! Prints one row per width so the clamp edges (≈611 and ≈889) and any
//! gap-risk rows are easy to spot. Height follows a 16:9 portrait viewport.

use wheel::compute_geometry;

fn main() {
    println!("width  radius   arc     min_w  font  status");
    for width in (320u32..=1400).step_by(40) {
        let w = f64::from(width);
        let g = compute_geometry(w, w * 1.78).expect("positive viewport");
        println!(
            "{:>5}  {:>7.2}  {:>6.2}  {:>5}  {:>4}  {}{}",
            width,
            g.radius,
            g.arc_length,
            g.panel_min_width,
            g.font_size,
            g.status(),
            if g.radius_at_limit { " (at limit)" } else { "" }
        );
    }
}
