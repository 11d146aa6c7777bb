//! Lambda handlers for the résumé record operations

pub mod handler;
pub mod response;
pub mod routes;

// Re-export the main handler for convenience
pub use handler::{dispatch, handler};
pub use routes::HandlerName;
