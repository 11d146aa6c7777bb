use std::collections::HashMap;
use std::env;

use aws_sdk_dynamodb::types::AttributeValue;
use serde::Deserialize;

use crate::errors::ResumeError;
use crate::storage::{AttributeStore, codec};

/// Process-level settings read from the Lambda environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub config_table: String,
    pub handler: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ResumeError> {
        let config_table = env::var("CONFIG_TABLE")
            .ok()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ResumeError::Config("Configuration table not specified".to_string()))?;

        Ok(Self {
            config_table,
            handler: env::var("RESUME_HANDLER")
                .or_else(|_| env::var("_HANDLER"))
                .ok(),
        })
    }
}

/// Per-deployment table bindings, stored as one item in the config table
/// keyed by function version.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeConfig {
    pub certifications_table: String,
    pub certifications_read_limit: i32,
    pub education_table: String,
    pub education_read_limit: i32,
    pub jobs_table: String,
    pub jobs_read_limit: i32,
    pub skills_table: String,
    pub skills_read_limit: i32,
}

impl ResumeConfig {
    /// Load the configuration item for `version` from `config_table`.
    ///
    /// # Errors
    ///
    /// Returns [`ResumeError::Config`] if no item exists for `version`,
    /// [`ResumeError::Store`] if the lookup fails, or
    /// [`ResumeError::Codec`] if the item is missing fields.
    pub async fn load<S>(store: &S, config_table: &str, version: &str) -> Result<Self, ResumeError>
    where
        S: AttributeStore + ?Sized,
    {
        let key = HashMap::from([("env".to_string(), AttributeValue::S(version.to_string()))]);
        let item = store
            .get_item(config_table, key)
            .await?
            .ok_or_else(|| ResumeError::Config("No configuration items found".to_string()))?;
        codec::from_item(&item)
    }
}
