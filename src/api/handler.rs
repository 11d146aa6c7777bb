//! Lambda handler: resolves configuration, runs one record operation, and
//! wraps the outcome in the response envelope.

use std::sync::Arc;

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};

use super::response;
use super::routes::{Entity, HandlerName, Operation};
use crate::core::config::{AppConfig, ResumeConfig};
use crate::core::models::{Record, RecordKey};
use crate::errors::ResumeError;
use crate::services;
use crate::storage::{AttributeStore, RecordStore};

pub use self::function_handler as handler;

/// Lambda entry point.
///
/// Every domain failure (configuration, parsing, validation, store) is
/// reported through a 500 envelope rather than a Lambda-level error.
#[tracing::instrument(level = "info", skip(store, event))]
pub async fn function_handler<S: AttributeStore>(
    store: Arc<S>,
    event: LambdaEvent<Value>,
) -> Result<Value, Error> {
    let (payload, context) = event.into_parts();
    let version = context.env_config.version.clone();
    info!(request_id = %context.request_id, version = %version, "Resume Lambda received request");

    let prepared = async {
        let app = AppConfig::from_env()?;
        let handler: HandlerName = app
            .handler
            .as_deref()
            .ok_or_else(|| ResumeError::Config("handler name not set".to_string()))?
            .parse()?;
        let config = ResumeConfig::load(store.as_ref(), &app.config_table, &version).await?;
        Ok::<_, ResumeError>((handler, config))
    }
    .await;

    match prepared {
        Ok((handler, config)) => Ok(dispatch(handler, store, &config, &payload).await),
        Err(e) => {
            error!("Config error: {}", e);
            Ok(response::err_response(&e.to_string()))
        }
    }
}

/// Run `handler` against `store` and build its response envelope.
pub async fn dispatch<S: AttributeStore>(
    handler: HandlerName,
    store: Arc<S>,
    config: &ResumeConfig,
    payload: &Value,
) -> Value {
    info!(handler = %handler, "Dispatching request");

    let result = match handler.entity {
        Entity::Skills => {
            run(services::skill_store(store, config), handler.operation, payload).await
        }
        Entity::Jobs => run(services::job_store(store, config), handler.operation, payload).await,
        Entity::Certifications => {
            run(services::certification_store(store, config), handler.operation, payload).await
        }
        Entity::Education => {
            run(services::education_store(store, config), handler.operation, payload).await
        }
    };

    result.unwrap_or_else(|e| {
        error!(handler = %handler, "Request failed: {}", e);
        response::err_response(&e.to_string())
    })
}

async fn run<T, S>(
    records: RecordStore<T, S>,
    operation: Operation,
    payload: &Value,
) -> Result<Value, ResumeError>
where
    T: Record,
    S: AttributeStore,
{
    match operation {
        Operation::Read => {
            let items = records.scan_all().await?;
            Ok(response::ok_data(serde_json::to_value(items)?))
        }
        Operation::Upsert => {
            let data = request_data(payload)
                .ok_or_else(|| ResumeError::Parse("missing data".to_string()))?;
            let record: T = serde_json::from_value(data.clone())
                .map_err(|e| ResumeError::Parse(e.to_string()))?;
            let written = records.upsert(record).await?;
            info!(table = %records.table(), id = written.id().unwrap_or_default(), "Record upserted");
            Ok(response::accepted())
        }
        Operation::Delete => {
            let key: RecordKey = match request_data(payload) {
                Some(data) => serde_json::from_value(data.clone())
                    .map_err(|e| ResumeError::Parse(e.to_string()))?,
                None => RecordKey::default(),
            };
            records.delete(&key).await?;
            Ok(response::accepted())
        }
    }
}

fn request_data(payload: &Value) -> Option<&Value> {
    payload.get("data").filter(|d| !d.is_null())
}
