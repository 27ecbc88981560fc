//! Travel profile value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// Mode of travel used when computing reachability
///
/// Maps one-to-one onto the routing profiles understood by isochrone
/// services (`driving`, `driving-traffic`, `walking`, `cycling`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TravelProfile {
    /// Car travel on typical road speeds
    #[default]
    Driving,
    /// Car travel taking live traffic into account
    DrivingTraffic,
    /// Pedestrian
    Walking,
    /// Bicycle
    Cycling,
}

impl TravelProfile {
    /// All supported profiles
    pub const ALL: [Self; 4] = [
        Self::Driving,
        Self::DrivingTraffic,
        Self::Walking,
        Self::Cycling,
    ];

    /// Profile identifier as used in request paths
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Driving => "driving",
            Self::DrivingTraffic => "driving-traffic",
            Self::Walking => "walking",
            Self::Cycling => "cycling",
        }
    }
}

impl fmt::Display for TravelProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TravelProfile {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "driving" | "car" => Ok(Self::Driving),
            "driving-traffic" | "driving_traffic" => Ok(Self::DrivingTraffic),
            "walking" | "walk" | "foot" => Ok(Self::Walking),
            "cycling" | "bike" | "bicycle" => Ok(Self::Cycling),
            _ => Err(DomainError::InvalidTravelProfile(s.to_string())),
        }
    }
}
