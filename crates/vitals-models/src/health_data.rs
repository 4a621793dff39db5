//! # Health Data Record
//!
//! The health-data record a validation response attaches once the server has
//! parsed an upload against a schema. This crate treats it as a plain value:
//! every field participates in equality and hashing, so two records decoded
//! from identical responses compare equal.
//!
//! The server's free-form `data` payload is deliberately not modelled here —
//! arbitrary JSON carries floats, which have no total equality or stable
//! hash, and these model types are value-comparable by contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A parsed health-data record associated with a validated upload.
///
/// Produced by the server; client code never constructs one except by
/// decoding a response. All fields other than `id` are optional because the
/// server omits them while validation is still in progress.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthDataRecord {
    /// Server-generated record identifier.
    pub id: String,
    /// Identifier of the schema the upload matched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_id: Option<String>,
    /// Revision of the schema the upload matched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_revision: Option<i64>,
    /// When the record's measurements were taken, as reported by the upload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<DateTime<Utc>>,
}

impl HealthDataRecord {
    /// Create a record with only an identifier; schema fields unset.
    pub fn new(id: impl Into<String>) -> Self {
        HealthDataRecord {
            id: id.into(),
            schema_id: None,
            schema_revision: None,
            created_on: None,
        }
    }
}

impl std::fmt::Display for HealthDataRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HealthDataRecord[id={}", self.id)?;
        if let Some(schema_id) = &self.schema_id {
            write!(f, ", schemaId={schema_id}")?;
        }
        if let Some(rev) = self.schema_revision {
            write!(f, ", schemaRevision={rev}")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> HealthDataRecord {
        HealthDataRecord {
            id: "rec-1".into(),
            schema_id: Some("tapping-test".into()),
            schema_revision: Some(3),
            created_on: Some(Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap()),
        }
    }

    #[test]
    fn test_serde_camel_case_fields() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["id"], "rec-1");
        assert_eq!(json["schemaId"], "tapping-test");
        assert_eq!(json["schemaRevision"], 3);
        assert!(json.get("schema_id").is_none());
    }

    #[test]
    fn test_deserialize_minimal() {
        let record: HealthDataRecord = serde_json::from_str(r#"{"id":"rec-2"}"#).unwrap();
        assert_eq!(record, HealthDataRecord::new("rec-2"));
    }

    #[test]
    fn test_serde_roundtrip() {
        let record = sample();
        let json = serde_json::to_string(&record).unwrap();
        let parsed: HealthDataRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, parsed);
    }

    #[test]
    fn test_display_includes_schema() {
        let s = sample().to_string();
        assert!(s.contains("rec-1"));
        assert!(s.contains("tapping-test"));
        assert_eq!(
            HealthDataRecord::new("rec-3").to_string(),
            "HealthDataRecord[id=rec-3]"
        );
    }
}
