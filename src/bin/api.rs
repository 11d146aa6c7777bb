use std::sync::Arc;

use resume::api::handler;
use resume::storage::DynamoStore;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    resume::setup_logging();
    let store = Arc::new(DynamoStore::from_env().await);
    lambda_runtime::run(lambda_runtime::service_fn(move |event| {
        handler(Arc::clone(&store), event)
    }))
    .await
}
