// Filter criteria chosen by the user.
//
// NOTE: TypeScript mirror types are in ui/src/types.ts

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::alerts::model::{Category, Severity};

/// Inclusive timestamp bounds, each side optional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl DateRange {
    pub fn contains(&self, timestamp: DateTime<Utc>) -> bool {
        if let Some(start) = self.start {
            if timestamp < start {
                return false;
            }
        }
        if let Some(end) = self.end {
            if timestamp > end {
                return false;
            }
        }
        true
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

/// Center and radius around a point. Carried in the filter but not used by
/// the predicate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationFilter {
    pub latitude: f64,
    pub longitude: f64,
    pub radius: f64,
}

/// Selection criteria. Empty sets mean "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub severity: BTreeSet<Severity>,
    pub category: BTreeSet<Category>,
    #[serde(default)]
    pub date_range: DateRange,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<LocationFilter>,
}

impl FilterState {
    /// Select `severity` if unselected, unselect it otherwise.
    pub fn toggle_severity(&mut self, severity: Severity) {
        if !self.severity.remove(&severity) {
            self.severity.insert(severity);
        }
    }

    pub fn toggle_category(&mut self, category: Category) {
        if !self.category.remove(&category) {
            self.category.insert(category);
        }
    }

    pub fn allows_severity(&self, severity: Severity) -> bool {
        self.severity.is_empty() || self.severity.contains(&severity)
    }

    pub fn allows_category(&self, category: Category) -> bool {
        self.category.is_empty() || self.category.contains(&category)
    }

    /// Number shown on the filter badge. Date range and location are not
    /// counted.
    pub fn active_count(&self) -> usize {
        self.severity.len() + self.category.len()
    }

    pub fn is_unconstrained(&self) -> bool {
        self.severity.is_empty()
            && self.category.is_empty()
            && self.date_range.is_unbounded()
            && self.location.is_none()
    }
}
