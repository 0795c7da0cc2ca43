//! Donut chart geometry for the occupancy charts.
//!
//! Angles are degrees, measured clockwise in screen space from 3 o'clock.

#[cfg(test)]
#[path = "donut_test.rs"]
mod donut_test;

/// Slice colours, cycled by slice index.
pub const SLICE_COLORS: [&str; 2] = ["#00AEEF", "#EB060D"];

pub const INNER_RADIUS: f64 = 50.0;
pub const OUTER_RADIUS: f64 = 100.0;
pub const PADDING_ANGLE_DEG: f64 = 5.0;

/// Angular extent of one slice.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arc {
    pub start_deg: f64,
    pub end_deg: f64,
}

impl Arc {
    pub fn sweep_deg(&self) -> f64 {
        self.end_deg - self.start_deg
    }
}

pub fn slice_color(index: usize) -> &'static str {
    SLICE_COLORS[index % SLICE_COLORS.len()]
}

/// Lay out one arc per value around a full circle.
///
/// Each value gets a sweep proportional to its share of the total, out of
/// `360 - padding * n` degrees, with `padding` degrees after every slice.
/// Negative or non-finite values count as zero. An empty or zero total
/// yields no arcs.
pub fn donut_arcs(values: &[f64], padding_deg: f64) -> Vec<Arc> {
    let clean = |v: f64| if v.is_finite() && v > 0.0 { v } else { 0.0 };
    let total: f64 = values.iter().copied().map(clean).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    #[allow(clippy::cast_precision_loss)]
    let available = (360.0 - padding_deg * values.len() as f64).max(0.0);
    let mut cursor = 0.0;
    values
        .iter()
        .map(|value| {
            let sweep = available * clean(*value) / total;
            let arc = Arc { start_deg: cursor, end_deg: cursor + sweep };
            cursor += sweep + padding_deg;
            arc
        })
        .collect()
}

fn polar(cx: f64, cy: f64, radius: f64, deg: f64) -> (f64, f64) {
    let rad = deg.to_radians();
    (cx + radius * rad.cos(), cy + radius * rad.sin())
}

/// SVG path data for the ring segment between `inner` and `outer` radii.
pub fn arc_path(cx: f64, cy: f64, inner: f64, outer: f64, arc: Arc) -> String {
    let large = u8::from(arc.sweep_deg() > 180.0);
    let (ox0, oy0) = polar(cx, cy, outer, arc.start_deg);
    let (ox1, oy1) = polar(cx, cy, outer, arc.end_deg);
    let (ix1, iy1) = polar(cx, cy, inner, arc.end_deg);
    let (ix0, iy0) = polar(cx, cy, inner, arc.start_deg);
    format!(
        "M {ox0:.3} {oy0:.3} A {outer} {outer} 0 {large} 1 {ox1:.3} {oy1:.3} \
         L {ix1:.3} {iy1:.3} A {inner} {inner} 0 {large} 0 {ix0:.3} {iy0:.3} Z"
    )
}
