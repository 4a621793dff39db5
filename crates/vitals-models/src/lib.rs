//! # vitals-models — Model Types for the Vitals Upload SDK
//!
//! Value objects the SDK client decodes from the Vitals health-data upload
//! service. The central type is [`UploadValidationStatus`], the status of a
//! server-side upload validation job.
//!
//! ## Key Design Principles
//!
//! 1. **Validating constructors.** Types with invariants have no public
//!    field access for construction; they are built through a validating
//!    builder that returns `Result`. A value that exists satisfies its
//!    invariants.
//!
//! 2. **Decode paths validate too.** `Deserialize` for invariant-carrying
//!    types routes the raw wire fields through the same builder, so a
//!    malformed server response is rejected rather than admitted.
//!
//! 3. **Value semantics.** Every model derives field-wise `PartialEq`/`Eq`/
//!    `Hash`; the equality contract is covered by property tests.
//!
//! ## Crate Policy
//!
//! - No network transport, persistence, or retry logic — this is the leaf
//!   model layer under the HTTP client.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All model types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod consent;
pub mod error;
pub mod health_data;
pub mod upload;

// Re-export primary types for ergonomic imports.
pub use consent::StudyConsent;
pub use error::ModelError;
pub use health_data::HealthDataRecord;
pub use upload::{UploadStatus, UploadValidationStatus};
