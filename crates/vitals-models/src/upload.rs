//! # Upload Validation Status
//!
//! Models the status of a server-side upload validation job. After a client
//! uploads a health-data file, the server runs it through decryption,
//! decompression, and schema matching; this module's types carry the outcome
//! back to the client.
//!
//! ## Server-side lifecycle
//!
//! ```text
//! Requested ──▶ ValidationInProgress ──▶ Succeeded
//!                        │
//!                        ▼
//!                 ValidationFailed
//! ```
//!
//! ## Design Decision
//!
//! [`UploadValidationStatus`] has no public constructor and no mutators.
//! All construction flows through [`Builder::build`], which validates the
//! field invariants and rejects bad input with a message naming the exact
//! offending field. The custom `Deserialize` impl funnels the raw wire
//! fields through the same builder, so a malformed server response can
//! never produce an instance that violates the invariants.

use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ModelError;
use crate::health_data::HealthDataRecord;

// ─── Upload Status ───────────────────────────────────────────────────

/// Status of server-side validation of an uploaded health-data file.
///
/// Wire format is snake_case (`validation_in_progress`). Statuses this SDK
/// version does not know about decode to [`UploadStatus::Unknown`] rather
/// than failing, so a server rollout of a new status does not break
/// existing clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadStatus {
    /// Upload URL requested; the file has not arrived yet.
    Requested,
    /// The server is currently validating the uploaded file.
    ValidationInProgress,
    /// Validation completed and the file was rejected.
    ValidationFailed,
    /// Validation completed and a health data record was created.
    Succeeded,
    /// A status this SDK version does not recognize.
    #[serde(other)]
    Unknown,
}

impl UploadStatus {
    /// All statuses in lifecycle order, `Unknown` last.
    pub fn all_statuses() -> &'static [UploadStatus] {
        &[
            Self::Requested,
            Self::ValidationInProgress,
            Self::ValidationFailed,
            Self::Succeeded,
            Self::Unknown,
        ]
    }

    /// The snake_case wire identifier for this status.
    ///
    /// Must match the serde serialization format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Requested => "requested",
            Self::ValidationInProgress => "validation_in_progress",
            Self::ValidationFailed => "validation_failed",
            Self::Succeeded => "succeeded",
            Self::Unknown => "unknown",
        }
    }

    /// The SCREAMING_SNAKE diagnostic name, as printed in log lines and in
    /// [`UploadValidationStatus`]'s `Display` output.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Requested => "REQUESTED",
            Self::ValidationInProgress => "VALIDATION_IN_PROGRESS",
            Self::ValidationFailed => "VALIDATION_FAILED",
            Self::Succeeded => "SUCCEEDED",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Whether validation has finished, one way or the other.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::ValidationFailed | Self::Succeeded)
    }
}

impl std::fmt::Display for UploadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UploadStatus {
    type Err = ModelError;

    /// Parse a status from its snake_case wire identifier.
    ///
    /// Strict: unrecognized identifiers are an error here. Lenient mapping to
    /// [`UploadStatus::Unknown`] happens only on the serde decode path.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "requested" => Ok(Self::Requested),
            "validation_in_progress" => Ok(Self::ValidationInProgress),
            "validation_failed" => Ok(Self::ValidationFailed),
            "succeeded" => Ok(Self::Succeeded),
            "unknown" => Ok(Self::Unknown),
            other => Err(ModelError::InvalidEntity(format!(
                "unknown upload status: {other:?}"
            ))),
        }
    }
}

// ─── Upload Validation Status ────────────────────────────────────────

/// The validation status of a single upload, as reported by the server.
///
/// Immutable value object with structural equality over all four fields.
/// Built only through [`UploadValidationStatus::builder()`], which enforces:
///
/// - `id` is non-blank,
/// - the message list is present and every entry is non-blank,
/// - the status is present.
///
/// The message list may be empty — an upload that passed validation has
/// nothing to report. The attached record is optional and unvalidated; the
/// server omits it until validation succeeds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadValidationStatus {
    id: String,
    message_list: Vec<String>,
    status: UploadStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    record: Option<HealthDataRecord>,
}

impl UploadValidationStatus {
    /// Start building a status. See [`Builder`].
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Unique upload ID, as generated by the request-upload API.
    /// Always non-blank.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Validation messages, generally error messages. A single upload may
    /// fail validation in several ways — unencrypted, uncompressed, matching
    /// no known schema — and the server reports all of them. Possibly empty,
    /// never containing a blank entry. Order is the server's.
    pub fn message_list(&self) -> &[String] {
        &self.message_list
    }

    /// The validation status. Always present.
    pub fn status(&self) -> UploadStatus {
        self.status
    }

    /// The health data record created from this upload, if validation has
    /// produced one.
    pub fn record(&self) -> Option<&HealthDataRecord> {
        self.record.as_ref()
    }

    /// Decode a status from an upload-status response body.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Deserialization`] if the body is not valid JSON
    /// for this type, including when a decoded field violates a builder
    /// invariant (the builder's message is embedded in the error).
    pub fn from_json(body: &str) -> Result<Self, ModelError> {
        serde_json::from_str(body).map_err(|e| ModelError::Deserialization(e.to_string()))
    }
}

/// Diagnostic rendering only; not a parsing format.
impl std::fmt::Display for UploadValidationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "UploadValidationStatus[id={}, status={}, messageList=[\"{}\"]], healthRecord=",
            self.id,
            self.status.name(),
            self.message_list.join("\", \""),
        )?;
        match &self.record {
            Some(record) => write!(f, "{record}"),
            None => f.write_str("none"),
        }
    }
}

// Decoding goes through the builder so every instance, however obtained,
// satisfies the field invariants.
impl<'de> Deserialize<'de> for UploadValidationStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = UploadValidationStatusWire::deserialize(deserializer)?;
        let mut builder = UploadValidationStatus::builder();
        if let Some(id) = wire.id {
            builder = builder.with_id(id);
        }
        if let Some(message_list) = wire.message_list {
            builder = builder.with_message_list(message_list);
        }
        if let Some(status) = wire.status {
            builder = builder.with_status(status);
        }
        if let Some(record) = wire.record {
            builder = builder.with_record(record);
        }
        builder.build().map_err(D::Error::custom)
    }
}

/// Raw wire fields, before invariant checks. Every field is optional here;
/// the builder decides what absence means.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UploadValidationStatusWire {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    message_list: Option<Vec<String>>,
    #[serde(default)]
    status: Option<UploadStatus>,
    #[serde(default)]
    record: Option<HealthDataRecord>,
}

// ─── Builder ─────────────────────────────────────────────────────────

/// Validating builder for [`UploadValidationStatus`].
///
/// A plain single-threaded accumulator: not for sharing across concurrent
/// writers. [`Builder::build`] consumes it and either yields a fully valid
/// instance or fails with [`ModelError::InvalidEntity`] — there is no
/// partial success.
#[derive(Debug, Clone, Default)]
pub struct Builder {
    id: Option<String>,
    message_list: Option<Vec<String>>,
    status: Option<UploadStatus>,
    record: Option<HealthDataRecord>,
}

impl Builder {
    /// Set the upload ID.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the validation message list. The builder takes ownership; the
    /// built value keeps its own copy.
    pub fn with_message_list(mut self, message_list: Vec<String>) -> Self {
        self.message_list = Some(message_list);
        self
    }

    /// Set the validation messages from string slices. Convenience for tests
    /// and literal message sets.
    pub fn with_messages(mut self, messages: &[&str]) -> Self {
        self.message_list = Some(messages.iter().map(|m| m.to_string()).collect());
        self
    }

    /// Set the validation status.
    pub fn with_status(mut self, status: UploadStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Attach the health data record. Passed through unvalidated.
    pub fn with_record(mut self, record: HealthDataRecord) -> Self {
        self.record = Some(record);
        self
    }

    /// Build and validate an [`UploadValidationStatus`].
    ///
    /// Checks run in order and the first failure wins:
    ///
    /// 1. `id` unset or blank → `id cannot be blank`
    /// 2. message list unset → `messageList cannot be null`
    /// 3. status unset → `status cannot be null`
    /// 4. any blank list entry → `messageList[<i>] is blank`
    ///
    /// # Errors
    ///
    /// [`ModelError::InvalidEntity`] carrying the message above.
    pub fn build(self) -> Result<UploadValidationStatus, ModelError> {
        let id = self
            .id
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| ModelError::InvalidEntity("id cannot be blank".into()))?;
        let message_list = self
            .message_list
            .ok_or_else(|| ModelError::InvalidEntity("messageList cannot be null".into()))?;
        let status = self
            .status
            .ok_or_else(|| ModelError::InvalidEntity("status cannot be null".into()))?;

        for (i, message) in message_list.iter().enumerate() {
            if message.trim().is_empty() {
                return Err(ModelError::InvalidEntity(format!(
                    "messageList[{i}] is blank"
                )));
            }
        }

        Ok(UploadValidationStatus {
            id,
            message_list,
            status,
            record: self.record,
        })
    }
}
