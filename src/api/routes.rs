//! Handler names: which entity and which operation a deployed function runs.

use std::fmt;
use std::str::FromStr;

use crate::errors::ResumeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Skills,
    Jobs,
    Certifications,
    Education,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Read,
    Upsert,
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandlerName {
    pub entity: Entity,
    pub operation: Operation,
}

const HANDLERS: [(&str, Entity, Operation); 12] = [
    ("readSkills", Entity::Skills, Operation::Read),
    ("upsertSkill", Entity::Skills, Operation::Upsert),
    ("deleteSkill", Entity::Skills, Operation::Delete),
    ("readJobs", Entity::Jobs, Operation::Read),
    ("upsertJob", Entity::Jobs, Operation::Upsert),
    ("deleteJob", Entity::Jobs, Operation::Delete),
    ("readCertifications", Entity::Certifications, Operation::Read),
    ("upsertCertification", Entity::Certifications, Operation::Upsert),
    ("deleteCertification", Entity::Certifications, Operation::Delete),
    ("readEducation", Entity::Education, Operation::Read),
    ("upsertEducation", Entity::Education, Operation::Upsert),
    ("deleteEducation", Entity::Education, Operation::Delete),
];

impl FromStr for HandlerName {
    type Err = ResumeError;

    /// Accepts the bare name (`readSkills`) as well as the deployed handler
    /// form (`index.readSkillsHandler`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        let name = name.rsplit('.').next().unwrap_or(name);
        let name = name.strip_suffix("Handler").unwrap_or(name);

        HANDLERS
            .iter()
            .find(|(n, _, _)| *n == name)
            .map(|&(_, entity, operation)| HandlerName { entity, operation })
            .ok_or_else(|| ResumeError::Config(format!("unknown handler: {s}")))
    }
}

impl fmt::Display for HandlerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = HANDLERS
            .iter()
            .find(|(_, e, o)| *e == self.entity && *o == self.operation)
            .map_or("unknown", |(n, _, _)| *n);
        f.write_str(name)
    }
}
