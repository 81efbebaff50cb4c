// Filter/search engine and the active-list sort stage.
//
// Everything here is a pure function over borrowed alerts; callers re-run it
// on every search or filter change.

use crate::core::alerts::model::Alert;

use super::model::FilterState;

/// Lowercased search term. Empty means "match everything".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    pub fn new(term: &str) -> Self {
        Self {
            needle: term.to_lowercase(),
        }
    }

    /// Case-insensitive substring match on title, description or address.
    pub fn matches(&self, alert: &Alert) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        [
            alert.title.as_str(),
            alert.description.as_str(),
            alert.location.address.as_str(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&self.needle))
    }
}

/// All four predicates are conjunctive.
pub fn matches(alert: &Alert, filter: &FilterState, query: &SearchQuery) -> bool {
    query.matches(alert)
        && filter.allows_severity(alert.severity)
        && filter.allows_category(alert.category)
        && filter.date_range.contains(alert.timestamp)
}

/// Keep the alerts that pass `filter` and `search_term`, in input order.
///
/// Accepts any iterator of borrowed alerts so the output can be fed back in.
pub fn apply<'a, I>(alerts: I, filter: &FilterState, search_term: &str) -> Vec<&'a Alert>
where
    I: IntoIterator<Item = &'a Alert>,
{
    let query = SearchQuery::new(search_term);
    alerts
        .into_iter()
        .filter(|alert| matches(alert, filter, &query))
        .collect()
}

/// Active alerts only, critical first. Equal severities keep input order.
pub fn sort_active<'a, I>(alerts: I) -> Vec<&'a Alert>
where
    I: IntoIterator<Item = &'a Alert>,
{
    let mut active: Vec<&Alert> = alerts.into_iter().filter(|alert| alert.is_active).collect();
    // sort_by_key is stable
    active.sort_by_key(|alert| alert.severity.rank());
    active
}

/// Badge count: critical alerts that are still active.
pub fn critical_active_count<'a, I>(alerts: I) -> usize
where
    I: IntoIterator<Item = &'a Alert>,
{
    alerts
        .into_iter()
        .filter(|alert| alert.is_critical_and_active())
        .count()
}
