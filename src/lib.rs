//! Resume - serverless CRUD handlers for the records behind a personal résumé.
//!
//! Four record types (skills, jobs, certifications, education) live in one
//! DynamoDB table each. A single Lambda binary serves every operation; the
//! deployed handler name picks the entity and the operation.
//!
//! # Architecture
//!
//! The system uses:
//! - AWS Lambda for serverless execution
//! - DynamoDB for record storage, and for the per-version configuration item
//! - A recursive attribute-map codec between records and DynamoDB items
//! - Tokio for async runtime
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use resume::core::config::ResumeConfig;
//! use resume::core::models::{RecordKey, Skill};
//! use resume::services::skill_store;
//! use resume::storage::DynamoStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     resume::setup_logging();
//!
//!     let store = Arc::new(DynamoStore::from_env().await);
//!     let config = ResumeConfig::load(store.as_ref(), "resume-config", "$LATEST").await?;
//!     let skills = skill_store(store, &config);
//!
//!     let written = skills
//!         .upsert(Skill {
//!             id: None,
//!             name: "Rust".into(),
//!             description: "Systems programming".into(),
//!             months_of_experience: 36,
//!             date_last_used: chrono::NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
//!         })
//!         .await?;
//!
//!     for skill in skills.scan_all().await? {
//!         println!("{}: {} months", skill.name, skill.months_of_experience);
//!     }
//!
//!     skills.delete(&RecordKey { id: written.id }).await?;
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod api;
pub mod core;
pub mod errors;
pub mod services;
pub mod storage;

pub use errors::ResumeError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. Calling it more than once is harmless; only
/// the first call installs the subscriber.
///
/// # Example
///
/// ```
/// // Initialize structured logging at the start of your Lambda handler
/// resume::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}
