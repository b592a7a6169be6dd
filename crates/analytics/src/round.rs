/// Round to 2 decimal places the way reports display money.
///
/// Rounds the exact binary value of `x` (not its shortest decimal rendering),
/// with exact ties going away from zero. So `1.005` becomes `1.0` because the
/// stored value is `1.00499999...`, while `0.125` (exactly representable)
/// becomes `0.13`.
///
/// An exact tie at the third decimal means `x = j / 8` with `j` odd, so ties
/// are detected on `x * 8.0`, which is exact in binary. Everything else goes
/// through `{:.2}` formatting, which rounds the exact value correctly.
pub fn round2(x: f64) -> f64 {
    if !x.is_finite() {
        return x;
    }

    let eighths = x * 8.0;
    if eighths.fract() == 0.0 && eighths.abs() < 9.0e15 && (eighths as i64) % 2 != 0 {
        // f64::round is half-away-from-zero and x * 100 is exact here.
        return (x * 100.0).round() / 100.0;
    }

    format!("{x:.2}").parse().unwrap_or(x)
}

/// True if `x` has at most 2 fractional decimal digits when printed.
pub fn has_at_most_two_decimals(x: f64) -> bool {
    let s = x.to_string();
    match s.split_once('.') {
        Some((_, frac)) => frac.len() <= 2,
        None => true,
    }
}
