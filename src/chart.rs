//! Activity Chart Layout
//!
//! Bar positions for the dashboard activity chart, scaled to the largest value.

use crate::models::ActivityPoint;

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Lay out one bar per point inside a `width` x `height` box, bars separated by `gap`.
/// Bars grow up from the bottom edge. Negative values are drawn as zero.
pub fn bar_layout(points: &[ActivityPoint], width: f64, height: f64, gap: f64) -> Vec<Bar> {
    if points.is_empty() {
        return Vec::new();
    }

    let n = points.len() as f64;
    let bar_width = ((width - gap * (n - 1.0)) / n).max(0.0);
    let max = points.iter().map(|p| p.value).fold(0.0_f64, f64::max);

    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let h = if max > 0.0 { p.value.max(0.0) / max * height } else { 0.0 };
            Bar {
                label: p.label.clone(),
                value: p.value,
                x: i as f64 * (bar_width + gap),
                y: height - h,
                width: bar_width,
                height: h,
            }
        })
        .collect()
}
