//! Conversion between plain documents and DynamoDB attribute maps.
//!
//! Encoding dispatches on the runtime kind of each field and picks one
//! attribute tag for it. Decoding reads back whichever tag is present. Both
//! directions recurse into nested maps and lists, so a record survives a
//! write/read cycle regardless of how deeply it is nested.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::hash::Hash;

use aws_sdk_dynamodb::primitives::Blob;
use aws_sdk_dynamodb::types::AttributeValue;
use base64::{Engine as _, engine::general_purpose};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::ResumeError;

/// Wire form of a single record.
pub type AttributeMap = HashMap<String, AttributeValue>;

/// A plain associative value, the in-memory counterpart of an attribute.
///
/// Numbers keep their textual form so nothing is lost to float rounding on
/// the way through the store.
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    Null,
    Bool(bool),
    String(String),
    Number(String),
    Binary(Vec<u8>),
    Array(Vec<Document>),
    Map(BTreeMap<String, Document>),
}

impl Document {
    fn as_str(&self) -> Option<&str> {
        match self {
            Document::String(s) => Some(s),
            _ => None,
        }
    }

    fn as_number(&self) -> Option<&str> {
        match self {
            Document::Number(n) => Some(n),
            _ => None,
        }
    }

    fn as_binary(&self) -> Option<&[u8]> {
        match self {
            Document::Binary(b) => Some(b),
            _ => None,
        }
    }
}

/// Encode every field of `fields` into its tagged attribute.
///
/// Fields holding an empty array are dropped: the store rejects empty sets
/// and there is no element to infer a set type from.
#[must_use]
pub fn encode(fields: &BTreeMap<String, Document>) -> AttributeMap {
    fields
        .iter()
        .filter_map(|(name, value)| encode_field(value).map(|attr| (name.clone(), attr)))
        .collect()
}

fn encode_field(value: &Document) -> Option<AttributeValue> {
    match value {
        Document::Array(items) if items.is_empty() => None,
        other => Some(encode_value(other)),
    }
}

fn encode_value(value: &Document) -> AttributeValue {
    match value {
        Document::Null => AttributeValue::Null(true),
        Document::Bool(b) => AttributeValue::Bool(*b),
        Document::String(s) => AttributeValue::S(s.clone()),
        Document::Number(n) => AttributeValue::N(n.clone()),
        Document::Binary(b) => AttributeValue::B(Blob::new(b.clone())),
        Document::Array(items) => encode_array(items),
        Document::Map(fields) => AttributeValue::M(encode(fields)),
    }
}

fn encode_array(items: &[Document]) -> AttributeValue {
    // Sets only when every element agrees with the first one's kind and no
    // member repeats; DynamoDB rejects sets with duplicates.
    if !items.is_empty() {
        if let Some(strings) = collect_set(items, Document::as_str) {
            return AttributeValue::Ss(strings.into_iter().map(str::to_string).collect());
        }
        if let Some(numbers) = collect_set(items, Document::as_number) {
            return AttributeValue::Ns(numbers.into_iter().map(str::to_string).collect());
        }
        if let Some(blobs) = collect_set(items, Document::as_binary) {
            return AttributeValue::Bs(blobs.into_iter().map(Blob::new).collect());
        }
    }
    AttributeValue::L(items.iter().map(encode_value).collect())
}

fn collect_set<'a, T: Eq + Hash>(
    items: &'a [Document],
    pick: fn(&'a Document) -> Option<T>,
) -> Option<Vec<T>> {
    let members: Vec<T> = items.iter().map(pick).collect::<Option<_>>()?;
    let distinct = {
        let mut seen = HashSet::with_capacity(members.len());
        members.iter().all(|m| seen.insert(m))
    };
    distinct.then_some(members)
}

/// Decode an attribute map back into plain fields.
///
/// Attributes whose tag this codec does not recognize are omitted.
#[must_use]
pub fn decode(item: &AttributeMap) -> BTreeMap<String, Document> {
    item.iter()
        .filter_map(|(name, attr)| decode_value(attr).map(|value| (name.clone(), value)))
        .collect()
}

fn decode_value(attr: &AttributeValue) -> Option<Document> {
    let value = match attr {
        AttributeValue::S(s) => Document::String(s.clone()),
        AttributeValue::N(n) => Document::Number(n.clone()),
        AttributeValue::B(b) => Document::Binary(b.clone().into_inner()),
        AttributeValue::Ss(values) => {
            Document::Array(values.iter().cloned().map(Document::String).collect())
        }
        AttributeValue::Ns(values) => {
            Document::Array(values.iter().cloned().map(Document::Number).collect())
        }
        AttributeValue::Bs(values) => Document::Array(
            values
                .iter()
                .map(|b| Document::Binary(b.as_ref().to_vec()))
                .collect(),
        ),
        AttributeValue::M(fields) => Document::Map(decode(fields)),
        AttributeValue::L(items) => Document::Array(items.iter().filter_map(decode_value).collect()),
        AttributeValue::Bool(b) => Document::Bool(*b),
        AttributeValue::Null(_) => Document::Null,
        _ => return None,
    };
    Some(value)
}

impl From<Value> for Document {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Document::Null,
            Value::Bool(b) => Document::Bool(b),
            Value::Number(n) => Document::Number(n.to_string()),
            Value::String(s) => Document::String(s),
            Value::Array(items) => Document::Array(items.into_iter().map(Document::from).collect()),
            Value::Object(fields) => Document::Map(
                fields
                    .into_iter()
                    .map(|(k, v)| (k, Document::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<Document> for Value {
    fn from(doc: Document) -> Self {
        match doc {
            Document::Null => Value::Null,
            Document::Bool(b) => Value::Bool(b),
            Document::String(s) => Value::String(s),
            Document::Number(n) => match serde_json::from_str::<serde_json::Number>(&n) {
                Ok(number) => Value::Number(number),
                Err(_) => Value::String(n),
            },
            Document::Binary(b) => Value::String(general_purpose::STANDARD.encode(b)),
            Document::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            Document::Map(fields) => {
                Value::Object(fields.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

/// Serialize a record and encode it into an attribute map.
///
/// # Errors
///
/// Returns [`ResumeError::Codec`] if the record does not serialize to a JSON object.
pub fn to_item<T: Serialize>(record: &T) -> Result<AttributeMap, ResumeError> {
    match Document::from(serde_json::to_value(record)?) {
        Document::Map(fields) => Ok(encode(&fields)),
        _ => Err(ResumeError::Codec(
            "record must serialize to an object".to_string(),
        )),
    }
}

/// Decode an attribute map and deserialize it into a record.
///
/// # Errors
///
/// Returns [`ResumeError::Codec`] if the decoded fields do not fit `T`.
pub fn from_item<T: DeserializeOwned>(item: &AttributeMap) -> Result<T, ResumeError> {
    let value = Value::from(Document::Map(decode(item)));
    Ok(serde_json::from_value(value)?)
}
