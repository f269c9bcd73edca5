/// Page scroll progress in whole percent.
///
/// Pages that do not scroll (document no taller than the viewport) report 0.
pub fn scroll_percentage(offset: f64, document_height: f64, viewport_height: f64) -> u8 {
    let scrollable = (document_height - viewport_height).max(0.0);
    if scrollable <= 0.0 || !offset.is_finite() {
        return 0;
    }
    (100.0 * offset / scrollable).round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_middle_bottom() {
        assert_eq!(scroll_percentage(0.0, 3000.0, 1000.0), 0);
        assert_eq!(scroll_percentage(1000.0, 3000.0, 1000.0), 50);
        assert_eq!(scroll_percentage(2000.0, 3000.0, 1000.0), 100);
    }

    #[test]
    fn test_rounds_to_nearest() {
        assert_eq!(scroll_percentage(333.0, 2000.0, 1000.0), 33);
        assert_eq!(scroll_percentage(335.0, 2000.0, 1000.0), 34);
    }

    #[test]
    fn test_short_page_is_zero() {
        assert_eq!(scroll_percentage(0.0, 800.0, 1000.0), 0);
        assert_eq!(scroll_percentage(50.0, 1000.0, 1000.0), 0);
    }

    #[test]
    fn test_overscroll_is_clamped() {
        assert_eq!(scroll_percentage(2600.0, 3000.0, 1000.0), 100);
        assert_eq!(scroll_percentage(-40.0, 3000.0, 1000.0), 0);
    }
}
