//! # Study Consent
//!
//! A single version of the consent document shown to participants in a
//! study subpopulation. The server keeps every published version; clients
//! identify one by its subpopulation GUID plus creation timestamp.
//!
//! Independent of the upload types in this crate; it shares only the
//! value-equality discipline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One published version of a subpopulation's consent document.
///
/// Plain value object: all fields participate in equality and hashing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyConsent {
    /// GUID of the subpopulation this consent belongs to.
    pub subpopulation_guid: String,
    /// When this version was created. Identifies the version within the
    /// subpopulation.
    pub created_on: DateTime<Utc>,
    /// Whether this is the version currently shown to new participants.
    pub active: bool,
    /// Server-side storage path of the consent document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_path: Option<String>,
}

impl std::fmt::Display for StudyConsent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "StudyConsent[subpopulationGuid={}, createdOn={}, active={}]",
            self.subpopulation_guid,
            self.created_on.to_rfc3339(),
            self.active,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> StudyConsent {
        StudyConsent {
            subpopulation_guid: "subpop-abc".into(),
            created_on: Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap(),
            active: true,
            document_path: Some("consents/subpop-abc/v3".into()),
        }
    }

    #[test]
    fn test_serde_camel_case_roundtrip() {
        let consent = sample();
        let json = serde_json::to_value(&consent).unwrap();
        assert_eq!(json["subpopulationGuid"], "subpop-abc");
        assert_eq!(json["active"], true);
        let decoded: StudyConsent = serde_json::from_value(json).unwrap();
        assert_eq!(consent, decoded);
    }

    #[test]
    fn test_display() {
        let s = sample().to_string();
        assert!(s.contains("subpop-abc"));
        assert!(s.contains("active=true"));
    }
}
