//! In-memory store used by the integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use chrono::NaiveDate;
use resume::core::config::ResumeConfig;
use resume::core::models::Skill;
use resume::errors::ResumeError;
use resume::storage::{AttributeMap, AttributeStore, ScanPage};

/// Tables held in insertion order, keyed by the `id` attribute, or by `env`
/// for configuration items.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<HashMap<String, Vec<AttributeMap>>>,
    failure: Mutex<Option<String>>,
    pub scans: AtomicUsize,
    pub puts: AtomicUsize,
    pub deletes: AtomicUsize,
    pub gets: AtomicUsize,
}

fn key_of(item: &AttributeMap) -> Option<&AttributeValue> {
    item.get("id").or_else(|| item.get("env"))
}

const DUPLICATE_SET_MESSAGE: &str =
    "One or more parameter values were invalid: Input collection contains duplicates";

fn has_duplicate_set_members(value: &AttributeValue) -> bool {
    fn repeats<T: Eq + std::hash::Hash>(values: impl Iterator<Item = T>) -> bool {
        let mut seen = std::collections::HashSet::new();
        !values.into_iter().all(|v| seen.insert(v))
    }
    match value {
        AttributeValue::Ss(values) | AttributeValue::Ns(values) => repeats(values.iter()),
        AttributeValue::Bs(values) => repeats(values.iter().map(|b| -> &[u8] { b.as_ref() })),
        AttributeValue::L(items) => items.iter().any(has_duplicate_set_members),
        AttributeValue::M(fields) => fields.values().any(has_duplicate_set_members),
        _ => false,
    }
}

fn matches_key(item: &AttributeMap, key: &AttributeMap) -> bool {
    key.iter().all(|(k, v)| item.get(k) == Some(v))
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following call fail with `message`.
    pub fn fail_with(&self, message: &str) {
        *self.failure.lock().unwrap() = Some(message.to_string());
    }

    pub fn seed(&self, table: &str, items: Vec<AttributeMap>) {
        self.tables
            .lock()
            .unwrap()
            .entry(table.to_string())
            .or_default()
            .extend(items);
    }

    pub fn items(&self, table: &str) -> Vec<AttributeMap> {
        self.tables
            .lock()
            .unwrap()
            .get(table)
            .cloned()
            .unwrap_or_default()
    }

    fn check(&self) -> Result<(), ResumeError> {
        match self.failure.lock().unwrap().as_ref() {
            Some(message) => Err(ResumeError::Store(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl AttributeStore for MemoryStore {
    async fn scan(
        &self,
        table: &str,
        limit: i32,
        start_key: Option<AttributeMap>,
    ) -> Result<ScanPage, ResumeError> {
        self.scans.fetch_add(1, Ordering::SeqCst);
        self.check()?;

        let items = self.items(table);
        let start = match start_key {
            Some(key) => items
                .iter()
                .position(|item| matches_key(item, &key))
                .map_or(items.len(), |i| i + 1),
            None => 0,
        };
        let limit = usize::try_from(limit).unwrap_or(0);
        let page: Vec<AttributeMap> = items.iter().skip(start).take(limit).cloned().collect();

        let last_evaluated_key = if start + page.len() < items.len() {
            page.last().and_then(|last| {
                key_of(last).map(|v| HashMap::from([("id".to_string(), v.clone())]))
            })
        } else {
            None
        };

        Ok(ScanPage {
            items: page,
            last_evaluated_key,
        })
    }

    async fn put_item(&self, table: &str, item: AttributeMap) -> Result<(), ResumeError> {
        self.puts.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        if item.values().any(has_duplicate_set_members) {
            return Err(ResumeError::Store(DUPLICATE_SET_MESSAGE.to_string()));
        }

        let mut tables = self.tables.lock().unwrap();
        let rows = tables.entry(table.to_string()).or_default();
        match rows.iter().position(|row| key_of(row) == key_of(&item)) {
            Some(pos) => rows[pos] = item,
            None => rows.push(item),
        }
        Ok(())
    }

    async fn delete_item(&self, table: &str, key: AttributeMap) -> Result<(), ResumeError> {
        self.deletes.fetch_add(1, Ordering::SeqCst);
        self.check()?;

        if let Some(rows) = self.tables.lock().unwrap().get_mut(table) {
            rows.retain(|row| !matches_key(row, &key));
        }
        Ok(())
    }

    async fn get_item(
        &self,
        table: &str,
        key: AttributeMap,
    ) -> Result<Option<AttributeMap>, ResumeError> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        self.check()?;

        Ok(self
            .items(table)
            .into_iter()
            .find(|row| matches_key(row, &key)))
    }
}

pub fn test_config() -> ResumeConfig {
    ResumeConfig {
        certifications_table: "resume-certifications".to_string(),
        certifications_read_limit: 50,
        education_table: "resume-education".to_string(),
        education_read_limit: 50,
        jobs_table: "resume-jobs".to_string(),
        jobs_read_limit: 50,
        skills_table: "resume-skills".to_string(),
        skills_read_limit: 50,
    }
}

pub fn generate_skill(n: u32, with_id: bool) -> Skill {
    Skill {
        id: with_id.then(|| format!("skill-{n}")),
        name: format!("Skill {n}"),
        description: format!("Description for skill {n}"),
        months_of_experience: n % 120,
        date_last_used: NaiveDate::from_ymd_opt(2019, 1 + n % 12, 1 + n % 28).unwrap(),
    }
}
