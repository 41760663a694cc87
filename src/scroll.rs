/// Offset past which the percentage badge appears.
pub const BADGE_THRESHOLD: f64 = 100.0;
/// Offset past which the scroll-to-top button appears.
pub const SCROLL_TOP_THRESHOLD: f64 = 300.0;

/// How far down the page the viewport is, in `[0, 1]`.
///
/// A page that fits in the viewport has nothing to scroll, so it reports 0.
pub fn scroll_fraction(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 || !scroll_y.is_finite() {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

pub fn percent(fraction: f64) -> u32 {
    (fraction.clamp(0.0, 1.0) * 100.0).round() as u32
}

pub fn show_badge(scroll_y: f64) -> bool {
    scroll_y > BADGE_THRESHOLD
}

pub fn show_scroll_top(scroll_y: f64) -> bool {
    scroll_y > SCROLL_TOP_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction() {
        assert_eq!(scroll_fraction(0.0, 2000.0, 1000.0), 0.0);
        assert_eq!(scroll_fraction(500.0, 2000.0, 1000.0), 0.5);
        assert_eq!(scroll_fraction(1000.0, 2000.0, 1000.0), 1.0);
    }

    #[test]
    fn test_fraction_clamps() {
        // overscroll on touch devices
        assert_eq!(scroll_fraction(-40.0, 2000.0, 1000.0), 0.0);
        assert_eq!(scroll_fraction(1200.0, 2000.0, 1000.0), 1.0);
        // nothing to scroll
        assert_eq!(scroll_fraction(10.0, 800.0, 1000.0), 0.0);
        assert_eq!(scroll_fraction(10.0, 1000.0, 1000.0), 0.0);
        assert_eq!(scroll_fraction(f64::NAN, 2000.0, 1000.0), 0.0);
    }

    #[test]
    fn test_percent_and_thresholds() {
        assert_eq!(percent(0.333), 33);
        assert_eq!(percent(1.5), 100);
        assert!(!show_badge(100.0));
        assert!(show_badge(101.0));
        assert!(!show_scroll_top(300.0));
        assert!(show_scroll_top(301.0));
    }
}
