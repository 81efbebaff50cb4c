//! Read-only alert storage.
//!
//! Every way of building a store goes through [`AlertStore::new`], which
//! rejects malformed records before any filter sees them.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use super::model::Alert;
use crate::core::error::{Error, Result};

const SAMPLE_ALERTS_JSON: &str = include_str!("sample_alerts.json");

/// Immutable collection of alerts with unique ids.
#[derive(Debug, Clone, Default)]
pub struct AlertStore {
    alerts: Vec<Alert>,
}

impl AlertStore {
    /// Build a store, validating each alert and id uniqueness.
    pub fn new(alerts: Vec<Alert>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(alerts.len());
        for alert in &alerts {
            alert.validate()?;
            if !seen.insert(alert.id.as_str()) {
                return Err(Error::DuplicateId(alert.id.clone()));
            }
        }
        log::info!("Alert store ready with {} alerts", alerts.len());
        Ok(Self { alerts })
    }

    /// Parse a JSON array of alerts.
    pub fn from_json(content: &str) -> Result<Self> {
        let alerts: Vec<Alert> = serde_json::from_str(content)?;
        Self::new(alerts)
    }

    /// Load a JSON alert file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        log::info!("Loading alerts from {:?}", path);
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// The built-in sample alerts.
    pub fn sample() -> Result<Self> {
        Self::from_json(SAMPLE_ALERTS_JSON)
    }

    /// The alert file at `path`, or the sample alerts when there is none.
    pub fn open(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Self::sample(),
        }
    }

    /// Like [`AlertStore::open`], but an unreadable or invalid alert file
    /// falls back to the sample alerts.
    pub fn open_or_sample(path: Option<&Path>) -> Result<Self> {
        Self::open(path).or_else(|e| {
            log::warn!("Ignoring alert file {:?}: {}", path, e);
            Self::sample()
        })
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn get(&self, id: &str) -> Option<&Alert> {
        self.alerts.iter().find(|alert| alert.id == id)
    }

    /// Like [`AlertStore::get`], for callers that need an error.
    pub fn require(&self, id: &str) -> Result<&Alert> {
        self.get(id).ok_or_else(|| Error::UnknownAlert(id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }
}
