/// Euclidean norm.
///
/// Components are divided by the largest absolute one before squaring,
/// so the sum neither overflows nor underflows for finite non-zero input.
#[must_use]
pub fn norm<'a, I>(x: I) -> f64
where
    I: IntoIterator<Item = &'a f64>,
    I::IntoIter: Clone,
{
    let x = x.into_iter();
    let scale = max_norm(x.clone());
    if scale == 0.0 || !scale.is_finite() {
        return scale;
    }
    scale * x.map(|xi| (xi / scale).powi(2)).sum::<f64>().sqrt()
}

/// Manhattan norm, scaled the same way as [`norm`].
#[must_use]
pub fn l1_norm<'a, I>(x: I) -> f64
where
    I: IntoIterator<Item = &'a f64>,
    I::IntoIter: Clone,
{
    let x = x.into_iter();
    let scale = max_norm(x.clone());
    if scale == 0.0 || !scale.is_finite() {
        return scale;
    }
    scale * x.map(|xi| (xi / scale).abs()).sum::<f64>()
}

/// Largest absolute component.
#[must_use]
pub fn max_norm<'a>(x: impl IntoIterator<Item = &'a f64>) -> f64 {
    x.into_iter().fold(0.0, |max, xi| {
        // `f64::max` would swallow NaN.
        if xi.is_nan() || max.is_nan() {
            f64::NAN
        } else {
            max.max(xi.abs())
        }
    })
}
