//! Point-to-set and set-to-set distances.
//!
//! Distances between point sets are reduced from a pairwise distance matrix,
//! computed cdist-style: entry `(i, j)` holds `distance(a[i], b[j])`.

use nalgebra::DMatrix;

use super::point::distance;
use super::{DistanceMetric, SetDistanceMetric};
use crate::{Error, Result};

/// Compute pairwise distances between two sets of points.
///
/// # Arguments
/// * `xa` - First set of points
/// * `xb` - Second set of points
/// * `metric` - Point distance metric
///
/// # Returns
/// Distance matrix of shape (xa.len() x xb.len())
pub fn pairwise_distances<P, Q>(xa: &[P], xb: &[Q], metric: DistanceMetric) -> Result<DMatrix<f64>>
where
    P: AsRef<[f64]>,
    Q: AsRef<[f64]>,
{
    let mut result = DMatrix::zeros(xa.len(), xb.len());
    for (i, a) in xa.iter().enumerate() {
        for (j, b) in xb.iter().enumerate() {
            result[(i, j)] = distance(a.as_ref(), b.as_ref(), metric)?;
        }
    }
    Ok(result)
}

/// Index and value of the first minimum (or maximum) of a sequence.
///
/// Later elements replace the running extremum only when strictly better,
/// so the first one wins among exact ties.
fn first_extremum(values: impl Iterator<Item = f64>, want_max: bool) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (i, v) in values.enumerate() {
        let better = match best {
            None => true,
            Some((_, b)) if want_max => v > b,
            Some((_, b)) => v < b,
        };
        if better {
            best = Some((i, v));
        }
    }
    best
}

/// Distance from a point to a set of points.
///
/// - `Infimum`: smallest distance between the point and any member.
///   For Euclidean in 1-D, `d(1, {3, 6}) = 2` and `d(7, {3, 6}) = 1`.
/// - `Supremum`: largest such distance.
///
/// Among exactly tied members the first one found is used; the returned
/// value is the same either way.
///
/// # Errors
/// `Error::EmptySet` for an empty set, `Error::NotImplemented` for the
/// set-to-set selectors, plus any error from the point metric.
pub fn distance_to_point<P, Q>(
    set: &[P],
    point: &Q,
    set_metric: SetDistanceMetric,
    metric: DistanceMetric,
) -> Result<f64>
where
    P: AsRef<[f64]>,
    Q: AsRef<[f64]> + ?Sized,
{
    let want_max = match set_metric {
        SetDistanceMetric::Infimum => false,
        SetDistanceMetric::Supremum => true,
        other => {
            return Err(Error::NotImplemented(format!(
                "{} is not a point-to-set metric",
                other
            )))
        }
    };

    if set.is_empty() {
        return Err(Error::EmptySet);
    }

    let distances = set
        .iter()
        .map(|member| distance(member.as_ref(), point.as_ref(), metric))
        .collect::<Result<Vec<f64>>>()?;

    first_extremum(distances.into_iter(), want_max)
        .map(|(_, value)| value)
        .ok_or(Error::EmptySet)
}

/// Distance between two sets of points.
///
/// - `SupInf`: for every point of `a` take the distance to its nearest point
///   in `b`, then return the largest of those. Not symmetric: with the
///   Euclidean metric `d({1, 3, 6, 7}, {3, 6}) = 2` but
///   `d({3, 6}, {1, 3, 6, 7}) = 0`.
/// - `Hausdorff`: `max(SupInf(a, b), SupInf(b, a))`, symmetric.
///
/// # Errors
/// `Error::EmptySet` if either set is empty, `Error::NotImplemented` for the
/// point-to-set selectors, plus any error from the point metric.
pub fn distance_to_set<P, Q>(
    a: &[P],
    b: &[Q],
    set_metric: SetDistanceMetric,
    metric: DistanceMetric,
) -> Result<f64>
where
    P: AsRef<[f64]>,
    Q: AsRef<[f64]>,
{
    match set_metric {
        SetDistanceMetric::Hausdorff => {
            let dist_ab = distance_to_set(a, b, SetDistanceMetric::SupInf, metric)?;
            let dist_ba = distance_to_set(b, a, SetDistanceMetric::SupInf, metric)?;
            Ok(dist_ab.max(dist_ba))
        }
        SetDistanceMetric::SupInf => {
            if a.is_empty() || b.is_empty() {
                return Err(Error::EmptySet);
            }
            let matrix = pairwise_distances(a, b, metric)?;
            let nearest = matrix
                .row_iter()
                .map(|row| first_extremum(row.iter().copied(), false).map_or(f64::NAN, |(_, v)| v));
            first_extremum(nearest, true)
                .map(|(_, value)| value)
                .ok_or(Error::EmptySet)
        }
        other => Err(Error::NotImplemented(format!(
            "{} is not a set-to-set metric",
            other
        ))),
    }
}
