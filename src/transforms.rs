//! Sequence transforms: attraction/repulsion toward a reference sequence and
//! discrete integral/convolution primitives.
//!
//! These are building blocks for smoothing trajectories, adapting an
//! appearance descriptor over time and shaping kernels. None of them is
//! required by the default autoregressive motion model.

use crate::distances::check_lengths;
use crate::{Error, Result};

fn check_step_size(mu: f64) -> Result<()> {
    if !(mu > 0.0 && mu <= 1.0) {
        return Err(Error::InvalidStepSize(mu));
    }
    Ok(())
}

/// Element-wise adjustment `target[i] += (target[i] - reference[i]) * rate`.
///
/// A positive `rate` pushes `target` away from `reference`, a negative one
/// pulls it closer. `move_toward` and `move_away` are the checked forms.
pub fn adjust(target: &mut [f64], reference: &[f64], rate: f64) -> Result<()> {
    check_lengths(target, reference)?;
    for (t, &r) in target.iter_mut().zip(reference.iter()) {
        *t += (*t - r) * rate;
    }
    Ok(())
}

/// Incrementally move `target` toward `reference`.
///
/// Applies `adjust` with `rate = -mu`, i.e. `target += mu * (reference - target)`.
/// With `mu = 1` the target becomes equal to the reference.
///
/// # Errors
/// `Error::InvalidStepSize` unless `0 < mu <= 1`,
/// `Error::LengthMismatch` for sequences of different length.
pub fn move_toward(target: &mut [f64], reference: &[f64], mu: f64) -> Result<()> {
    check_step_size(mu)?;
    adjust(target, reference, -mu)
}

/// Incrementally move `target` away from `reference`, which acts as a repeller.
///
/// Applies `adjust` with `rate = +mu`, i.e. `target -= mu * (reference - target)`.
///
/// # Errors
/// Same as `move_toward`.
pub fn move_away(target: &mut [f64], reference: &[f64], mu: f64) -> Result<()> {
    check_step_size(mu)?;
    adjust(target, reference, mu)
}

/// Discrete integral of `a` weighted by `b`: running dot sums.
///
/// `out[k] = sum_{i=0}^{k} a[i] * b[i]`, one pass, output length equals the
/// input length.
pub fn integral(a: &[f64], b: &[f64]) -> Result<Vec<f64>> {
    integral_with(a, b, |acc, term| acc + term, |x, y| x * y)
}

/// Discrete integral with custom operators.
///
/// `out[0] = product(a[0], b[0])` and
/// `out[k] = combine(out[k-1], product(a[k], b[k]))`.
pub fn integral_with<C, P>(a: &[f64], b: &[f64], combine: C, product: P) -> Result<Vec<f64>>
where
    C: Fn(f64, f64) -> f64,
    P: Fn(f64, f64) -> f64,
{
    check_lengths(a, b)?;
    let mut out = Vec::with_capacity(a.len());
    let mut pairs = a.iter().zip(b.iter());
    if let Some((&x, &y)) = pairs.next() {
        let mut value = product(x, y);
        out.push(value);
        for (&x, &y) in pairs {
            value = combine(value, product(x, y));
            out.push(value);
        }
    }
    Ok(out)
}

/// Running product of `a` against `b` read back to front.
///
/// `out[k] = sum_{i=0}^{k} a[i] * b[n-1-i]`. The last element is the full
/// inner product of `a` with reversed `b`.
pub fn cauchy_product(a: &[f64], b: &[f64]) -> Result<Vec<f64>> {
    check_lengths(a, b)?;
    let mut out = Vec::with_capacity(a.len());
    let mut value = 0.0;
    for (&x, &y) in a.iter().zip(b.iter().rev()) {
        value += x * y;
        out.push(value);
    }
    Ok(out)
}

fn reverse_inner_product(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter().rev()).map(|(x, y)| x * y).sum()
}

/// Circular convolution of two finite sequences.
///
/// For each of the `n` output positions, `b` is rotated right by a further
/// `shift` places and the inner product of `a` with the reversed rotation is
/// written out:
///
/// `out[j] = sum_{k=0}^{n-1} a[k] * b[(n - 1 - k - shift*(j+1)) mod n]`
///
/// Neither input is modified.
pub fn circular_convolution(a: &[f64], b: &[f64], shift: usize) -> Result<Vec<f64>> {
    check_lengths(a, b)?;
    let n = b.len();
    if n == 0 {
        return Ok(Vec::new());
    }
    let step = shift % n;
    let mut rotated = b.to_vec();
    let mut out = Vec::with_capacity(n);
    for _ in 0..n {
        rotated.rotate_right(step);
        out.push(reverse_inner_product(a, &rotated));
    }
    Ok(out)
}

/// Reset every element to zero.
pub fn clean(seq: &mut [f64]) {
    seq.fill(0.0);
}
