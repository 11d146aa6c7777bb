//! Per-entity record stores bound to their configured tables.

use std::sync::Arc;

use crate::core::config::ResumeConfig;
use crate::core::models::{Certification, Education, Job, Skill};
use crate::storage::{AttributeStore, RecordStore};

pub type SkillStore<S> = RecordStore<Skill, S>;
pub type JobStore<S> = RecordStore<Job, S>;
pub type CertificationStore<S> = RecordStore<Certification, S>;
pub type EducationStore<S> = RecordStore<Education, S>;

pub fn skill_store<S: AttributeStore>(store: Arc<S>, config: &ResumeConfig) -> SkillStore<S> {
    RecordStore::new(store, config.skills_table.clone(), config.skills_read_limit)
}

pub fn job_store<S: AttributeStore>(store: Arc<S>, config: &ResumeConfig) -> JobStore<S> {
    RecordStore::new(store, config.jobs_table.clone(), config.jobs_read_limit)
}

pub fn certification_store<S: AttributeStore>(
    store: Arc<S>,
    config: &ResumeConfig,
) -> CertificationStore<S> {
    RecordStore::new(
        store,
        config.certifications_table.clone(),
        config.certifications_read_limit,
    )
}

pub fn education_store<S: AttributeStore>(
    store: Arc<S>,
    config: &ResumeConfig,
) -> EducationStore<S> {
    RecordStore::new(store, config.education_table.clone(), config.education_read_limit)
}
