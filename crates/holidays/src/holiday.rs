use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One holiday as supplied by the calendar provider.
///
/// `date` is the provider's display form (e.g. `2026-12-25 00:00:00`);
/// `start`/`end` bound the observed interval. `kind` is provider-defined
/// (public, bank, school, observance, ...) and passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holiday {
    pub date: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub substitute: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
