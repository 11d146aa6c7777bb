//! The key-value store contract the record layer depends on, and its
//! DynamoDB implementation.

use async_trait::async_trait;
use aws_sdk_dynamodb::Client as DynamoClient;
use aws_sdk_dynamodb::types::Select;
use tracing::error;

use super::codec::AttributeMap;
use crate::errors::ResumeError;

/// One page of a table scan.
#[derive(Debug, Clone, Default)]
pub struct ScanPage {
    pub items: Vec<AttributeMap>,
    /// Set when the store stopped early; pass it back to resume the scan.
    pub last_evaluated_key: Option<AttributeMap>,
}

#[async_trait]
pub trait AttributeStore: Send + Sync {
    async fn scan(
        &self,
        table: &str,
        limit: i32,
        start_key: Option<AttributeMap>,
    ) -> Result<ScanPage, ResumeError>;

    async fn put_item(&self, table: &str, item: AttributeMap) -> Result<(), ResumeError>;

    async fn delete_item(&self, table: &str, key: AttributeMap) -> Result<(), ResumeError>;

    async fn get_item(&self, table: &str, key: AttributeMap)
    -> Result<Option<AttributeMap>, ResumeError>;
}

/// [`AttributeStore`] backed by Amazon DynamoDB.
#[derive(Debug, Clone)]
pub struct DynamoStore {
    client: DynamoClient,
}

impl DynamoStore {
    #[must_use]
    pub fn new(client: DynamoClient) -> Self {
        Self { client }
    }

    /// Build a client from the ambient AWS environment (region, credentials).
    pub async fn from_env() -> Self {
        let shared = aws_config::from_env().load().await;
        Self::new(DynamoClient::new(&shared))
    }
}

#[async_trait]
impl AttributeStore for DynamoStore {
    async fn scan(
        &self,
        table: &str,
        limit: i32,
        start_key: Option<AttributeMap>,
    ) -> Result<ScanPage, ResumeError> {
        let output = self
            .client
            .scan()
            .table_name(table)
            .select(Select::AllAttributes)
            .limit(limit)
            .set_exclusive_start_key(start_key)
            .send()
            .await
            .map_err(|e| {
                let err = ResumeError::from(e);
                error!(table = %table, "dynamodb scan failed: {}", err);
                err
            })?;

        Ok(ScanPage {
            items: output.items.unwrap_or_default(),
            last_evaluated_key: output.last_evaluated_key,
        })
    }

    async fn put_item(&self, table: &str, item: AttributeMap) -> Result<(), ResumeError> {
        self.client
            .put_item()
            .table_name(table)
            .set_item(Some(item))
            .send()
            .await
            .map_err(|e| {
                let err = ResumeError::from(e);
                error!(table = %table, "dynamodb put_item failed: {}", err);
                err
            })?;
        Ok(())
    }

    async fn delete_item(&self, table: &str, key: AttributeMap) -> Result<(), ResumeError> {
        self.client
            .delete_item()
            .table_name(table)
            .set_key(Some(key))
            .send()
            .await
            .map_err(|e| {
                let err = ResumeError::from(e);
                error!(table = %table, "dynamodb delete_item failed: {}", err);
                err
            })?;
        Ok(())
    }

    async fn get_item(
        &self,
        table: &str,
        key: AttributeMap,
    ) -> Result<Option<AttributeMap>, ResumeError> {
        let output = self
            .client
            .get_item()
            .table_name(table)
            .set_key(Some(key))
            .send()
            .await
            .map_err(|e| {
                let err = ResumeError::from(e);
                error!(table = %table, "dynamodb get_item failed: {}", err);
                err
            })?;
        Ok(output.item)
    }
}
