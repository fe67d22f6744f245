//! Pairwise element combinators used to build aggregate distances.
//!
//! Each aggregate metric is an `inner_product` fold: a per-element term
//! combined into an accumulator. The terms live here so the metric dispatch
//! in `point.rs` stays a single `match`.

/// Squared difference `(x - y)^2`, the p=2 term.
#[inline(always)]
pub fn squared_difference(x: f64, y: f64) -> f64 {
    let d = x - y;
    d * d
}

/// Absolute difference `|x - y|`, the p=1 term (Manhattan and Chebyshev).
#[inline(always)]
pub fn absolute_difference(x: f64, y: f64) -> f64 {
    (x - y).abs()
}

/// Geometric-mean term `sqrt(x * y)` of the Bhattacharyya coefficient.
#[inline(always)]
pub fn geometric_mean_term(x: f64, y: f64) -> f64 {
    (x * y).sqrt()
}

/// Hellinger term `(sqrt(x) - sqrt(y))^2`.
#[inline(always)]
pub fn hellinger_term(x: f64, y: f64) -> f64 {
    let d = x.sqrt() - y.sqrt();
    d * d
}

/// Plain product `x * y`.
#[inline(always)]
pub fn product(x: f64, y: f64) -> f64 {
    x * y
}

/// Generalized inner product.
///
/// Folds `combine(acc, term(a[i], b[i]))` over both slices starting from
/// `init`. Callers are responsible for checking the lengths; this iterates
/// over the shorter of the two.
#[inline]
pub fn inner_product<C, T>(a: &[f64], b: &[f64], init: f64, combine: C, term: T) -> f64
where
    C: Fn(f64, f64) -> f64,
    T: Fn(f64, f64) -> f64,
{
    a.iter()
        .zip(b.iter())
        .fold(init, |acc, (&x, &y)| combine(acc, term(x, y)))
}
