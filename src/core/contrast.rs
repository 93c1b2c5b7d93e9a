//! WCAG 2.1 contrast arithmetic
//!
//! Relative luminance and contrast ratio per WCAG 2.1 §1.4.3, with the AA
//! thresholds: 4.5:1 for normal text, 3.0:1 for large text (18sp and up).

use super::extractor::Color;

/// Minimum AA ratio for normal-size text
pub const NORMAL_TEXT_RATIO: f64 = 4.5;
/// Minimum AA ratio for large text
pub const LARGE_TEXT_RATIO: f64 = 3.0;
/// Font size at which text counts as large, in sp
pub const LARGE_TEXT_SP: f64 = 18.0;

/// Relative luminance of a color, ignoring alpha
pub fn relative_luminance(color: Color) -> f64 {
    let r = channel(color.red());
    let g = channel(color.green());
    let b = channel(color.blue());
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

fn channel(value: u8) -> f64 {
    let c = value as f64 / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Contrast ratio between two colors, from 1.0 to 21.0
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

pub fn is_large_text(size_sp: f64) -> bool {
    size_sp >= LARGE_TEXT_SP
}

/// Minimum ratio required for a given text size class
pub fn required_ratio(large_text: bool) -> f64 {
    if large_text {
        LARGE_TEXT_RATIO
    } else {
        NORMAL_TEXT_RATIO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Color = Color(0xFF000000);
    const WHITE: Color = Color(0xFFFFFFFF);

    #[test]
    fn test_luminance_extremes() {
        assert!(relative_luminance(BLACK) < 1e-9);
        assert!((relative_luminance(WHITE) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_black_on_white_is_21() {
        assert!((contrast_ratio(BLACK, WHITE) - 21.0).abs() < 0.01);
    }

    #[test]
    fn test_ratio_is_symmetric() {
        let a = Color(0xFFBB8383);
        let b = Color(0xFF112233);
        assert!((contrast_ratio(a, b) - contrast_ratio(b, a)).abs() < 1e-12);
    }

    #[test]
    fn test_same_color_is_one() {
        let c = Color(0xFF888888);
        assert!((contrast_ratio(c, c) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_low_contrast_pair_fails_aa() {
        // Pale red on white, the classic near-invisible label
        let ratio = contrast_ratio(Color(0xFFBB8383), WHITE);
        assert!(ratio < NORMAL_TEXT_RATIO);
        assert!(ratio > 1.0);
    }

    #[test]
    fn test_large_text_threshold() {
        assert!(!is_large_text(17.9));
        assert!(is_large_text(18.0));
        assert!(is_large_text(24.0));
    }

    #[test]
    fn test_required_ratio() {
        assert_eq!(required_ratio(true), 3.0);
        assert_eq!(required_ratio(false), 4.5);
    }
}
