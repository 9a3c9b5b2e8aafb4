//! Static field schemas for the two record kinds
//!
//! The schemas drive both form rendering in the webview (one input per
//! field, with its placeholder and HTML input type) and required-field
//! validation before a create call. The required lists fix the order in
//! which missing field names appear in validation messages.

use crate::draft::Draft;
use serde::{Deserialize, Serialize};

/// HTML input type rendered for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InputType {
    #[serde(rename = "text")]
    Text,
    #[serde(rename = "date")]
    Date,
    #[serde(rename = "datetime-local")]
    DateTimeLocal,
}

/// One form input: wire field name, placeholder text, input type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub placeholder: &'static str,
    #[serde(rename = "type")]
    pub input: InputType,
}

/// Securities create-form fields, in form order
pub const SECURITY_FIELDS: &[FieldSpec] = &[
    FieldSpec { name: "SecurityId", placeholder: "SecurityId", input: InputType::Text },
    FieldSpec { name: "AsOfDate", placeholder: "AsOfDate", input: InputType::Date },
    FieldSpec { name: "Description", placeholder: "Description", input: InputType::Text },
    FieldSpec { name: "Sector", placeholder: "Sector", input: InputType::Text },
    FieldSpec { name: "Subsector", placeholder: "Subsector", input: InputType::Text },
    FieldSpec { name: "Currency", placeholder: "Currency", input: InputType::Text },
];

/// Metrics create-form fields, in form order
pub const METRIC_FIELDS: &[FieldSpec] = &[
    FieldSpec { name: "AsOfDateTime", placeholder: "AsOfDateTime", input: InputType::DateTimeLocal },
    FieldSpec { name: "SecurityId", placeholder: "SecurityId", input: InputType::Text },
    FieldSpec { name: "MetricName", placeholder: "MetricName", input: InputType::Text },
    FieldSpec { name: "MetricValue", placeholder: "MetricValue", input: InputType::Text },
];

/// Required fields for a security create, in check order
pub const SECURITY_REQUIRED: &[&str] = &[
    "AsOfDate",
    "SecurityId",
    "Description",
    "Sector",
    "Subsector",
    "Currency",
];

/// Required fields for a metric create, in check order
pub const METRIC_REQUIRED: &[&str] = &[
    "AsOfDateTime",
    "SecurityId",
    "MetricName",
    "MetricValue",
];

/// The two record kinds the app administers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Securities,
    Metrics,
}

impl EntityKind {
    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            EntityKind::Securities => SECURITY_FIELDS,
            EntityKind::Metrics => METRIC_FIELDS,
        }
    }

    pub fn required_fields(&self) -> &'static [&'static str] {
        match self {
            EntityKind::Securities => SECURITY_REQUIRED,
            EntityKind::Metrics => METRIC_REQUIRED,
        }
    }
}

/// Required fields that are absent or empty in the draft, in check order
pub fn missing_fields(required: &'static [&'static str], draft: &Draft) -> Vec<&'static str> {
    required
        .iter()
        .copied()
        .filter(|field| draft.get(field).map_or(true, str::is_empty))
        .collect()
}

/// Blocking message naming the missing fields of a create
pub fn required_fields_message(missing: &[&str]) -> String {
    format!("The following fields are required: {}", missing.join(", "))
}
