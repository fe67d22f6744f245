//! Distance and similarity functions over numeric sequences.
//!
//! This module provides:
//! - `DistanceMetric` - closed set of point-to-point metrics
//! - `SetDistanceMetric` - point-to-set and set-to-set selectors
//! - `distance` - point-to-point distance between equal-length sequences
//! - `distance_to_point` / `distance_to_set` - extensions to point sets
//! - `kernel` - the element combinators the aggregate metrics are built from

pub mod kernel;
mod point;
mod sets;

pub use point::{check_lengths, distance};
pub use sets::{distance_to_point, distance_to_set, pairwise_distances};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Point-to-point metric selector.
///
/// Only metrics that need no extra information are defined; Mahalanobis, for
/// example, would need a covariance and is not part of this set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceMetric {
    Euclidean,
    DotProduct,
    Bhattacharyya,
    Hellinger,
    Manhattan,
    Chebyshev,
    BhattacharyyaCoefficient,
    SquaredHellinger,
}

impl DistanceMetric {
    /// All metrics, in declaration order.
    pub const ALL: [DistanceMetric; 8] = [
        DistanceMetric::Euclidean,
        DistanceMetric::DotProduct,
        DistanceMetric::Bhattacharyya,
        DistanceMetric::Hellinger,
        DistanceMetric::Manhattan,
        DistanceMetric::Chebyshev,
        DistanceMetric::BhattacharyyaCoefficient,
        DistanceMetric::SquaredHellinger,
    ];

    /// Canonical name, as accepted by `FromStr`.
    pub fn name(&self) -> &'static str {
        match self {
            DistanceMetric::Euclidean => "euclidean",
            DistanceMetric::DotProduct => "dot_product",
            DistanceMetric::Bhattacharyya => "bhattacharyya",
            DistanceMetric::Hellinger => "hellinger",
            DistanceMetric::Manhattan => "manhattan",
            DistanceMetric::Chebyshev => "chebyshev",
            DistanceMetric::BhattacharyyaCoefficient => "bhattacharyya_coefficient",
            DistanceMetric::SquaredHellinger => "squared_hellinger",
        }
    }

    /// Higher values mean more similar (the score is not a distance).
    pub fn is_similarity(&self) -> bool {
        matches!(
            self,
            DistanceMetric::DotProduct | DistanceMetric::BhattacharyyaCoefficient
        )
    }

    /// Metrics defined on histogram bins, which must be finite and non-negative.
    pub fn requires_non_negative(&self) -> bool {
        matches!(
            self,
            DistanceMetric::Bhattacharyya
                | DistanceMetric::BhattacharyyaCoefficient
                | DistanceMetric::Hellinger
                | DistanceMetric::SquaredHellinger
        )
    }
}

impl fmt::Display for DistanceMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DistanceMetric {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            "euclidean" => Ok(DistanceMetric::Euclidean),
            "dot_product" | "dotproduct" => Ok(DistanceMetric::DotProduct),
            "bhattacharyya" => Ok(DistanceMetric::Bhattacharyya),
            "hellinger" => Ok(DistanceMetric::Hellinger),
            "manhattan" | "cityblock" | "taxicab" => Ok(DistanceMetric::Manhattan),
            "chebyshev" => Ok(DistanceMetric::Chebyshev),
            "bhattacharyya_coefficient" => Ok(DistanceMetric::BhattacharyyaCoefficient),
            "squared_hellinger" => Ok(DistanceMetric::SquaredHellinger),
            _ => Err(Error::UnsupportedMetric(name.to_string())),
        }
    }
}

/// Selector for distances involving point sets.
///
/// `Infimum` and `Supremum` apply between a point and a set; `Hausdorff` and
/// `SupInf` apply between two sets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetDistanceMetric {
    Infimum,
    Supremum,
    Hausdorff,
    SupInf,
}

impl SetDistanceMetric {
    /// Canonical name, as accepted by `FromStr`.
    pub fn name(&self) -> &'static str {
        match self {
            SetDistanceMetric::Infimum => "infimum",
            SetDistanceMetric::Supremum => "supremum",
            SetDistanceMetric::Hausdorff => "hausdorff",
            SetDistanceMetric::SupInf => "sup_inf",
        }
    }
}

impl fmt::Display for SetDistanceMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SetDistanceMetric {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            "infimum" => Ok(SetDistanceMetric::Infimum),
            "supremum" => Ok(SetDistanceMetric::Supremum),
            "hausdorff" => Ok(SetDistanceMetric::Hausdorff),
            "sup_inf" | "supinf" => Ok(SetDistanceMetric::SupInf),
            _ => Err(Error::UnsupportedMetric(name.to_string())),
        }
    }
}

/// Compute a distance with the metric given by name.
///
/// # Errors
/// `Error::UnsupportedMetric` for unknown names, otherwise as `distance`.
pub fn distance_by_name(a: &[f64], b: &[f64], name: &str) -> Result<f64> {
    distance(a, b, name.parse()?)
}
