//! Persistence: the attribute-map codec, the store contract, and the
//! generic record repository built on both.

pub mod codec;
pub mod repository;
pub mod store;

pub use codec::{AttributeMap, Document};
pub use repository::{Page, RecordStore};
pub use store::{AttributeStore, DynamoStore, ScanPage};
