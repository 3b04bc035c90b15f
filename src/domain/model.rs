use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// A named, saved set of bibliographic records a user operates on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workset {
    pub uuid: Uuid,
    pub name: String,
    #[serde(default)]
    pub mi_count: u64,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// One row of the per-dimension hit statistics for a workset. The backend
/// varies the populated fields by dimension, so everything is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatEntry {
    #[serde(default)]
    pub pk: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub score: Option<i64>,
    #[serde(default)]
    pub work_count: Option<u64>,
}

/// A filter dimension scoped to the active workset's value distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Language,
    OwnerInstitution,
    WorkCategory,
}

impl Dimension {
    pub fn path_segment(&self) -> &'static str {
        match self {
            Dimension::Language => "lang",
            Dimension::OwnerInstitution => "owner_institution",
            Dimension::WorkCategory => "work_category",
        }
    }

    /// Work category names are shown as-is, the other dimensions uppercased.
    pub fn uppercase_labels(&self) -> bool {
        !matches!(self, Dimension::WorkCategory)
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Dimension::Language => "languages",
            Dimension::OwnerInstitution => "institutions",
            Dimension::WorkCategory => "work types",
        }
    }
}

/// One selectable value of a dimension filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption<V> {
    pub value: V,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub pk: Option<i64>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// Server-wide settings exported by `/api/info/`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(rename = "VUFIND_URL", default)]
    pub vufind_url: Option<String>,
    #[serde(rename = "SUBJECT_SCHEMAS", default)]
    pub subject_schemas: Vec<serde_json::Value>,
    #[serde(rename = "USE_SHIBBOLETH", default)]
    pub use_shibboleth: bool,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

/// A transient user-visible message. Only one is held at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

/// The merged set of query parameters sent to list-fetching endpoints.
/// Optional fields are omitted entirely when unset; the date pair is always
/// present, as (possibly empty) ISO strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WorkQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    pub start_date: String,
    pub end_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yop_from: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yop_to: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_inst: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_category: Option<i64>,
}

/// Explicit tri-state update for a single optional field: leave it alone,
/// clear it, or set a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldUpdate<T> {
    #[default]
    Keep,
    Clear,
    Set(T),
}

impl<T> FieldUpdate<T> {
    /// Applies the update to an optional target field in place.
    pub fn apply_to(self, target: &mut Option<T>) {
        match self {
            FieldUpdate::Keep => {}
            FieldUpdate::Clear => *target = None,
            FieldUpdate::Set(value) => *target = Some(value),
        }
    }
}
