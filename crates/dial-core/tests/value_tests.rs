// Tests for distance-to-value scaling and the range-derived display
// precision.

use dial_core::value::{display_precision, format_value, scale};

#[test]
fn precision_follows_range_magnitude() {
    // wider ranges render with fewer decimals
    assert_eq!(display_precision(1000.0), 1);
    assert_eq!(display_precision(20.0), 1);
    assert_eq!(display_precision(0.5), 2);
    assert_eq!(display_precision(0.05), 11);
}

#[test]
fn precision_keeps_its_power_of_ten_quirk() {
    // exact powers of ten sit on the ceil() boundary; these values are
    // load-bearing for existing displays
    assert_eq!(display_precision(100.0), 1);
    assert_eq!(display_precision(10.0), 1);
    assert_eq!(display_precision(1.0), 2);
}

#[test]
fn precision_tolerates_degenerate_ranges() {
    assert_eq!(display_precision(0.0), 0);
    assert_eq!(display_precision(-5.0), 0);
    assert_eq!(display_precision(f64::NAN), 0);
    // vanishingly narrow ranges are capped rather than exploding
    assert_eq!(display_precision(1e-120), 100);
}

#[test]
fn scale_maps_and_clamps() {
    assert_eq!(scale(0.0, 10.0, 30.0), 10.0);
    assert_eq!(scale(0.5, 0.0, 100.0), 50.0);
    assert_eq!(scale(0.5, 10.0, 30.0), 20.0);
    // overshoot clamps at the top of the range
    assert_eq!(scale(1.5, 0.0, 10.0), 10.0);
}

#[test]
fn format_uses_the_derived_precision() {
    assert_eq!(format_value(50.0, 0.0, 100.0), "50.0");
    assert_eq!(format_value(0.5, 0.0, 1.0), "0.50");
    assert_eq!(format_value(20.0, 10.0, 30.0), "20.0");
    // degenerate range falls back to zero decimals
    assert_eq!(format_value(5.0, 5.0, 5.0), "5");
}
