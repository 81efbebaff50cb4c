// Alert record types.
//
// NOTE: TypeScript mirror types are in ui/src/types.ts
// Keep both files in sync when modifying data structures.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::error::{Error, Result};

/// Urgency level of an alert. Declaration order is the total order
/// `Low < Medium < High < Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Position in the alert list, critical first.
    pub fn rank(self) -> u8 {
        match self {
            Self::Critical => 0,
            Self::High => 1,
            Self::Medium => 2,
            Self::Low => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    /// Get the display name for this severity
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }

    /// All severities in filter editor order
    pub fn all() -> &'static [Severity] {
        &[Self::Low, Self::Medium, Self::High, Self::Critical]
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|severity| severity.as_str() == s)
            .ok_or_else(|| Error::UnknownSeverity(s.to_string()))
    }
}

/// Kind of incident. Unordered; `Ord` is derived only so categories can live
/// in a `BTreeSet`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Weather,
    Emergency,
    Traffic,
    Community,
    Security,
    Health,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Weather => "weather",
            Self::Emergency => "emergency",
            Self::Traffic => "traffic",
            Self::Community => "community",
            Self::Security => "security",
            Self::Health => "health",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Weather => "Weather",
            Self::Emergency => "Emergency",
            Self::Traffic => "Traffic",
            Self::Community => "Community",
            Self::Security => "Security",
            Self::Health => "Health",
        }
    }

    /// Icon shown on cards, markers and filter editor rows
    pub fn emoji(self) -> &'static str {
        match self {
            Self::Weather => "🌧️",
            Self::Emergency => "🚨",
            Self::Traffic => "🚗",
            Self::Community => "🏘️",
            Self::Security => "🔒",
            Self::Health => "🏥",
        }
    }

    pub fn all() -> &'static [Category] {
        &[
            Self::Weather,
            Self::Emergency,
            Self::Traffic,
            Self::Community,
            Self::Security,
            Self::Health,
        ]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| Error::UnknownCategory(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Degrees, -90..=90
    pub latitude: f64,
    /// Degrees, -180..=180
    pub longitude: f64,
    pub address: String,
}

impl Location {
    pub fn has_valid_coordinates(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Who is affected by an alert.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Demographics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub population: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vulnerabilities: Option<Vec<String>>,
}

/// A single reported incident or condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    /// Unique within a store, stable for the alert's lifetime
    pub id: String,
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub category: Category,
    pub location: Location,
    pub timestamp: DateTime<Utc>,
    /// Only active alerts are listed
    pub is_active: bool,
    pub reported_by: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_info: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demographics: Option<Demographics>,
}

impl Alert {
    /// Check the invariants serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.id.is_empty() {
            return Err(Error::EmptyId);
        }
        if !self.location.has_valid_coordinates() {
            return Err(Error::InvalidCoordinates {
                id: self.id.clone(),
                latitude: self.location.latitude,
                longitude: self.location.longitude,
            });
        }
        Ok(())
    }

    pub fn is_critical_and_active(&self) -> bool {
        self.severity == Severity::Critical && self.is_active
    }
}
