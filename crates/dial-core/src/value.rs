// Distance-to-value scaling and display formatting.

/// Decimal places shown for a given range magnitude: wider ranges render with
/// fewer decimals, narrower ranges with more.
///
/// The formula is `trunc(10^(-ceil(log10(range))) + 1)`. It has long-standing
/// quirks at exact powers of ten (a \[0, 100\] range shows one decimal, a
/// \[0, 1\] range shows two) that displayed values depend on, so it is kept
/// as-is.
pub fn display_precision(range: f64) -> usize {
    if !(range > 0.0) {
        return 0;
    }
    let digits = 10f64.powf(-range.log10().ceil()) + 1.0;
    // keep vanishingly narrow ranges from demanding absurd digit counts
    (digits as usize).min(100)
}

/// Scale a normalized displacement into [min, max], clamped at the top end.
#[inline]
pub fn scale(value_norm: f64, min: f64, max: f64) -> f64 {
    (min + value_norm * (max - min)).min(max)
}

/// Render a value at the precision derived from its range.
pub fn format_value(value: f64, min: f64, max: f64) -> String {
    format!("{value:.prec$}", prec = display_precision(max - min))
}
