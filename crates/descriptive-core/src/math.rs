//! Small numeric helpers shared across the workspace

/// Division with an explicit fallback for a zero denominator.
///
/// The engine's degenerate-arithmetic policy (zero mean, zero standard
/// deviation, non-positive data for the multiplicative means) is "report a
/// documented fallback, never NaN or infinity". Routing every such division
/// through one helper keeps that policy auditable in one place.
pub fn safe_div(numerator: f64, denominator: f64, fallback: f64) -> f64 {
    if denominator == 0.0 {
        fallback
    } else {
        numerator / denominator
    }
}
