//! Display-ready text and colors for alert cards and the list header.
//!
//! NOTE: TypeScript mirror types are in ui/src/types.ts

use serde::Serialize;

use super::alerts::model::{Alert, Category, Demographics, Severity};
use super::filter::model::FilterState;

/// Card colors for one severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeverityPalette {
    pub background: &'static str,
    pub border: &'static str,
    pub text: &'static str,
}

pub fn palette(severity: Severity) -> SeverityPalette {
    match severity {
        Severity::Low => SeverityPalette {
            background: "#eff6ff",
            border: "#bfdbfe",
            text: "#1e40af",
        },
        Severity::Medium => SeverityPalette {
            background: "#fffbeb",
            border: "#fed7aa",
            text: "#d97706",
        },
        Severity::High => SeverityPalette {
            background: "#fff7ed",
            border: "#fdba74",
            text: "#ea580c",
        },
        Severity::Critical => SeverityPalette {
            background: "#fef2f2",
            border: "#fca5a5",
            text: "#dc2626",
        },
    }
}

/// Pin, legend and filter-switch color.
pub fn marker_color(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "#dc2626",
        Severity::High => "#ea580c",
        Severity::Medium => "#d97706",
        Severity::Low => "#2563eb",
    }
}

/// One row of the alert list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertCard {
    pub id: String,
    pub emoji: &'static str,
    pub title: String,
    pub severity: Severity,
    pub severity_label: String,
    pub palette: SeverityPalette,
    pub description: String,
    pub timestamp: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub reported_by: String,
    pub contact_info: Option<String>,
    pub demographics: Option<String>,
}

impl From<&Alert> for AlertCard {
    fn from(alert: &Alert) -> Self {
        Self {
            id: alert.id.clone(),
            emoji: alert.category.emoji(),
            title: alert.title.clone(),
            severity: alert.severity,
            severity_label: alert.severity.as_str().to_uppercase(),
            palette: palette(alert.severity),
            description: alert.description.clone(),
            timestamp: alert.timestamp.format("%-m/%-d/%Y %I:%M %p").to_string(),
            address: alert.location.address.clone(),
            latitude: alert.location.latitude,
            longitude: alert.location.longitude,
            reported_by: alert.reported_by.clone(),
            contact_info: alert.contact_info.clone(),
            demographics: alert.demographics.as_ref().and_then(demographics_summary),
        }
    }
}

/// `Population: 1,600,000 • Vulnerable: Elderly, Homeless population`
///
/// Returns `None` when there is nothing to show.
pub fn demographics_summary(demographics: &Demographics) -> Option<String> {
    let mut parts = Vec::new();
    if let Some(population) = demographics.population {
        parts.push(format!("Population: {}", group_thousands(population)));
    }
    if let Some(vulnerabilities) = &demographics.vulnerabilities {
        if !vulnerabilities.is_empty() {
            parts.push(format!("Vulnerable: {}", vulnerabilities.join(", ")));
        }
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" • "))
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Body of the location dialog.
pub fn format_coordinates(latitude: f64, longitude: f64) -> String {
    format!("Coordinates: {:.4}, {:.4}", latitude, longitude)
}

/// `None` hides the badge.
pub fn critical_badge(count: usize) -> Option<String> {
    (count > 0).then(|| format!("{} Critical", count))
}

pub fn filter_button_label(active_filters: usize) -> String {
    if active_filters > 0 {
        active_filters.to_string()
    } else {
        "Filter".to_string()
    }
}

pub fn list_heading(active_alerts: usize) -> String {
    format!("{} Active Alerts", active_alerts)
}

pub fn filter_summary(active_filters: usize) -> String {
    let plural = if active_filters == 1 { "" } else { "s" };
    format!("{} filter{} active", active_filters, plural)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeverityOption {
    pub value: Severity,
    pub label: &'static str,
    pub color: &'static str,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryOption {
    pub value: Category,
    pub label: &'static str,
    pub emoji: &'static str,
    pub selected: bool,
}

/// Filter editor sheet for a staged filter: one switch per severity and
/// category, plus the summary line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterEditorView {
    pub staged: FilterState,
    pub severities: Vec<SeverityOption>,
    pub categories: Vec<CategoryOption>,
    pub active_count: usize,
    pub summary: String,
}

impl From<&FilterState> for FilterEditorView {
    fn from(staged: &FilterState) -> Self {
        let severities = Severity::all()
            .iter()
            .map(|&value| SeverityOption {
                value,
                label: value.display_name(),
                color: marker_color(value),
                selected: staged.severity.contains(&value),
            })
            .collect();
        let categories = Category::all()
            .iter()
            .map(|&value| CategoryOption {
                value,
                label: value.display_name(),
                emoji: value.emoji(),
                selected: staged.category.contains(&value),
            })
            .collect();
        let active_count = staged.active_count();

        Self {
            staged: staged.clone(),
            severities,
            categories,
            active_count,
            summary: filter_summary(active_count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::alerts::store::AlertStore;
    use std::collections::HashSet;

    #[test]
    fn test_card_for_sample_alert() {
        let store = AlertStore::sample().unwrap();
        let card = AlertCard::from(store.get("1").unwrap());

        assert_eq!(card.emoji, "🌧️");
        assert_eq!(card.severity_label, "HIGH");
        assert_eq!(card.palette.text, "#ea580c");
        assert_eq!(card.timestamp, "6/18/2025 08:00 AM");
        assert_eq!(card.contact_info, None);
        assert_eq!(
            card.demographics.as_deref(),
            Some("Population: 1,600,000 • Vulnerable: Elderly, Homeless population")
        );
    }

    #[test]
    fn test_demographics_summary_parts() {
        let only_population = Demographics {
            population: Some(999),
            ..Demographics::default()
        };
        assert_eq!(demographics_summary(&only_population).as_deref(), Some("Population: 999"));

        let empty_list = Demographics {
            age_group: Some("All ages".to_string()),
            vulnerabilities: Some(Vec::new()),
            ..Demographics::default()
        };
        assert_eq!(demographics_summary(&empty_list), None);
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(25000), "25,000");
        assert_eq!(group_thousands(200000), "200,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_coordinates_text() {
        let store = AlertStore::sample().unwrap();
        let location = &store.get("1").unwrap().location;
        assert_eq!(
            format_coordinates(location.latitude, location.longitude),
            "Coordinates: 40.7128, -74.0060"
        );
        assert_eq!(format_coordinates(-33.9, 151.25), "Coordinates: -33.9000, 151.2500");
    }

    #[test]
    fn test_header_labels() {
        assert_eq!(critical_badge(0), None);
        assert_eq!(critical_badge(2).as_deref(), Some("2 Critical"));
        assert_eq!(filter_button_label(0), "Filter");
        assert_eq!(filter_button_label(3), "3");
        assert_eq!(list_heading(5), "5 Active Alerts");
        assert_eq!(filter_summary(1), "1 filter active");
        assert_eq!(filter_summary(0), "0 filters active");
    }

    #[test]
    fn test_marker_colors_distinct() {
        let colors: HashSet<_> = Severity::all().iter().map(|s| marker_color(*s)).collect();
        assert_eq!(colors.len(), Severity::all().len());
    }

    #[test]
    fn test_card_serializes_camel_case() {
        let store = AlertStore::sample().unwrap();
        let json = serde_json::to_value(AlertCard::from(store.get("5").unwrap())).unwrap();

        assert_eq!(json["severityLabel"], "CRITICAL");
        assert!(json.get("reportedBy").is_some());
        assert!(json.get("contactInfo").is_some());
        assert!(json.get("severity_label").is_none());
    }

    #[test]
    fn test_editor_view_for_staged_filter() {
        let mut staged = FilterState::default();
        staged.toggle_severity(Severity::Critical);
        staged.toggle_category(Category::Health);
        staged.toggle_category(Category::Traffic);

        let view = FilterEditorView::from(&staged);
        assert_eq!(view.active_count, 3);
        assert_eq!(view.summary, "3 filters active");
        assert_eq!(view.severities.len(), Severity::all().len());
        assert_eq!(view.categories.len(), Category::all().len());

        let critical = view.severities.iter().find(|o| o.value == Severity::Critical).unwrap();
        assert!(critical.selected);
        assert_eq!(critical.label, Severity::Critical.display_name());
        assert_eq!(critical.color, "#dc2626");
        assert_eq!(view.severities.iter().filter(|o| o.selected).count(), 1);

        let health = view.categories.iter().find(|o| o.value == Category::Health).unwrap();
        assert!(health.selected);
        assert_eq!(health.emoji, Category::Health.emoji());
        assert!(!view.categories.iter().find(|o| o.value == Category::Weather).unwrap().selected);
    }

    #[test]
    fn test_editor_view_for_empty_filter() {
        let view = FilterEditorView::from(&FilterState::default());
        assert_eq!(view.summary, "0 filters active");
        assert!(view.severities.iter().all(|o| !o.selected));
        assert!(view.categories.iter().all(|o| !o.selected));

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["activeCount"], 0);
        assert_eq!(json["severities"][0]["value"], "low");
    }
}
