/// Fraction of the document scrolled past, clamped to `0.0..=1.0`.
pub fn scroll_ratio(scroll_top: f64, scroll_height: f64, client_height: f64) -> f64 {
    let scrollable = scroll_height - client_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_top / scrollable).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_ratio() {
        assert_eq!(scroll_ratio(0.0, 2000.0, 1000.0), 0.0);
        assert_eq!(scroll_ratio(500.0, 2000.0, 1000.0), 0.5);
        assert_eq!(scroll_ratio(1000.0, 2000.0, 1000.0), 1.0);
    }

    #[test]
    fn test_short_page_and_overscroll() {
        assert_eq!(scroll_ratio(10.0, 800.0, 1000.0), 0.0);
        assert_eq!(scroll_ratio(1200.0, 2000.0, 1000.0), 1.0);
        assert_eq!(scroll_ratio(-40.0, 2000.0, 1000.0), 0.0);
    }
}
