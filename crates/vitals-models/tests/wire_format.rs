//! # Wire Format Tests
//!
//! Decodes realistic upload-status response bodies, as the SDK client
//! receives them from the upload-status endpoint, and verifies that the
//! invariants hold on the decode path end to end.

use chrono::{TimeZone, Utc};
use vitals_models::{HealthDataRecord, ModelError, UploadStatus, UploadValidationStatus};

/// A failed-validation response: multiple messages, no record yet.
const FAILED_RESPONSE: &str = r#"{
    "id": "a0b1c2d3-e4f5-6789-abcd-ef0123456789",
    "messageList": [
        "upload is not encrypted",
        "upload is not compressed",
        "upload does not match any schema for study"
    ],
    "status": "validation_failed",
    "type": "UploadValidationStatus"
}"#;

/// A succeeded-validation response with an attached health data record.
const SUCCEEDED_RESPONSE: &str = r#"{
    "id": "upload-42",
    "messageList": [],
    "status": "succeeded",
    "record": {
        "id": "rec-42",
        "schemaId": "tapping-activity",
        "schemaRevision": 2,
        "createdOn": "2026-01-15T12:00:00Z",
        "type": "HealthDataRecord"
    },
    "type": "UploadValidationStatus"
}"#;

#[test]
fn decodes_failed_validation_response() {
    let status = UploadValidationStatus::from_json(FAILED_RESPONSE).unwrap();
    assert_eq!(status.id(), "a0b1c2d3-e4f5-6789-abcd-ef0123456789");
    assert_eq!(status.status(), UploadStatus::ValidationFailed);
    assert_eq!(status.message_list().len(), 3);
    assert_eq!(status.message_list()[0], "upload is not encrypted");
    assert_eq!(status.record(), None);
}

#[test]
fn decodes_succeeded_response_with_record() {
    let status = UploadValidationStatus::from_json(SUCCEEDED_RESPONSE).unwrap();
    assert_eq!(status.status(), UploadStatus::Succeeded);
    assert!(status.message_list().is_empty());

    let expected = HealthDataRecord {
        id: "rec-42".into(),
        schema_id: Some("tapping-activity".into()),
        schema_revision: Some(2),
        created_on: Some(Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap()),
    };
    assert_eq!(status.record(), Some(&expected));
}

#[test]
fn decoding_the_same_body_twice_yields_equal_values() {
    let a = UploadValidationStatus::from_json(SUCCEEDED_RESPONSE).unwrap();
    let b = UploadValidationStatus::from_json(SUCCEEDED_RESPONSE).unwrap();
    assert_eq!(a, b);
}

#[test]
fn future_server_status_decodes_leniently() {
    let body = r#"{"id": "u1", "messageList": [], "status": "duplicate"}"#;
    let status = UploadValidationStatus::from_json(body).unwrap();
    assert_eq!(status.status(), UploadStatus::Unknown);
}

#[test]
fn malformed_response_is_rejected_with_field_detail() {
    let body = r#"{"id": "u1", "messageList": ["ok", "   "], "status": "succeeded"}"#;
    let err = UploadValidationStatus::from_json(body).unwrap_err();
    assert!(matches!(err, ModelError::Deserialization(_)));
    assert!(err.message().contains("messageList[1] is blank"));
}

#[test]
fn response_missing_status_is_rejected() {
    let body = r#"{"id": "u1", "messageList": []}"#;
    let err = UploadValidationStatus::from_json(body).unwrap_err();
    assert!(err.message().contains("status cannot be null"));
}
