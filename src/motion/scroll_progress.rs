//! Maps the window's scroll offset onto a 0–100 progress value for a
//! bounded region of the page.

use crate::config::PROGRESS_TRIGGER_RATIO;

/// Document-space bounds of the tracked region, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionBounds {
    pub top: f64,
    pub height: f64,
}

/// Progress through `bounds` in percent, always within `[0, 100]`.
///
/// The region counts as "started" once its top edge is half a viewport
/// below the top of the screen, and as finished once the user has scrolled
/// a further `bounds.height` pixels.
pub fn scroll_progress(scroll_y: f64, viewport_height: f64, bounds: RegionBounds) -> f64 {
    let trigger_offset = viewport_height * PROGRESS_TRIGGER_RATIO;
    let scroll_start = bounds.top - trigger_offset;
    let travelled = scroll_y - scroll_start;

    if !(bounds.height > 0.0) {
        return if travelled >= 0.0 { 100.0 } else { 0.0 };
    }

    let ratio = travelled / bounds.height;
    if ratio.is_nan() {
        return 0.0;
    }
    ratio.clamp(0.0, 1.0) * 100.0
}

/// Inline style that places the marker at `progress` percent down its track.
pub fn marker_style(progress: f64) -> String {
    format!(
        "top: {}%; transform: translate(-50%, -50%);",
        progress.clamp(0.0, 100.0)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: f64 = 800.0;
    const ROAD: RegionBounds = RegionBounds {
        top: 2_000.0,
        height: 1_600.0,
    };

    #[test]
    fn zero_before_the_trigger_point() {
        // trigger point is 2000 - 400 = 1600
        for scroll_y in [0.0, 500.0, 1_200.0, 1_599.0, 1_600.0] {
            assert_eq!(scroll_progress(scroll_y, VIEWPORT, ROAD), 0.0);
        }
    }

    #[test]
    fn hundred_after_the_region_end() {
        for scroll_y in [3_200.0, 3_201.0, 10_000.0, f64::MAX] {
            assert_eq!(scroll_progress(scroll_y, VIEWPORT, ROAD), 100.0);
        }
    }

    #[test]
    fn midpoint_of_region_is_half_way() {
        let midpoint = 1_600.0 + ROAD.height / 2.0;
        let progress = scroll_progress(midpoint, VIEWPORT, ROAD);
        assert!((progress - 50.0).abs() < 1e-9);
    }

    #[test]
    fn monotonic_while_scrolling_down() {
        let mut last = 0.0;
        let mut scroll_y = 0.0;
        while scroll_y < 4_000.0 {
            let progress = scroll_progress(scroll_y, VIEWPORT, ROAD);
            assert!(progress >= last, "{progress} < {last} at {scroll_y}");
            assert!((0.0..=100.0).contains(&progress));
            last = progress;
            scroll_y += 37.0;
        }
    }

    #[test]
    fn zero_height_region_never_yields_nan() {
        let flat = RegionBounds {
            top: 1_000.0,
            height: 0.0,
        };
        assert_eq!(scroll_progress(0.0, VIEWPORT, flat), 0.0);
        assert_eq!(scroll_progress(600.0, VIEWPORT, flat), 100.0);
        assert_eq!(scroll_progress(5_000.0, VIEWPORT, flat), 100.0);
    }

    #[test]
    fn negative_scroll_offsets_clamp_to_zero() {
        // rubber-band overscroll on touch devices reports negative offsets
        assert_eq!(scroll_progress(-250.0, VIEWPORT, ROAD), 0.0);
    }

    #[test]
    fn marker_style_is_clamped() {
        assert_eq!(
            marker_style(42.5),
            "top: 42.5%; transform: translate(-50%, -50%);"
        );
        assert_eq!(
            marker_style(140.0),
            "top: 100%; transform: translate(-50%, -50%);"
        );
    }
}
