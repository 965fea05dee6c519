use std::collections::HashSet;
use std::path::Path;

use crate::attributes::AttributeCatalog;
use crate::core::{Group, Member};
use crate::error::{EngineError, Result};

/// Member and group reference data, validated once at load time
#[derive(Debug, Clone, Default)]
pub struct DataCatalog {
    members: Vec<Member>,
    groups: Vec<Group>,
}

impl DataCatalog {
    /// Validate and wrap already-parsed data.
    ///
    /// Member and group ids must be unique and every member's group must exist.
    pub fn new(members: Vec<Member>, groups: Vec<Group>) -> Result<Self> {
        let mut group_ids = HashSet::new();
        for group in &groups {
            if !group_ids.insert(group.id.as_str()) {
                return Err(EngineError::DuplicateGroup(group.id.clone()));
            }
        }

        let mut member_ids = HashSet::new();
        for member in &members {
            if !member_ids.insert(member.id.as_str()) {
                return Err(EngineError::DuplicateMember(member.id.clone()));
            }
            if !group_ids.contains(member.group_id.as_str()) {
                return Err(EngineError::UnknownGroup {
                    member: member.id.clone(),
                    group: member.group_id.clone(),
                });
            }
        }

        tracing::debug!("Loaded {} members in {} groups", members.len(), groups.len());

        Ok(Self { members, groups })
    }

    pub fn from_json(members_json: &str, groups_json: &str) -> Result<Self> {
        let members: Vec<Member> = serde_json::from_str(members_json)?;
        let groups: Vec<Group> = serde_json::from_str(groups_json)?;
        Self::new(members, groups)
    }

    pub fn from_paths(members_path: impl AsRef<Path>, groups_path: impl AsRef<Path>) -> Result<Self> {
        let members_json = std::fs::read_to_string(members_path)?;
        let groups_json = std::fs::read_to_string(groups_path)?;
        Self::from_json(&members_json, &groups_json)
    }

    /// Log score keys the attribute catalog does not know. They still score.
    ///
    /// Returns the number of unknown `(member, key)` pairs.
    pub fn check_attribute_keys(&self, attributes: &AttributeCatalog) -> usize {
        let mut unknown = 0;
        for member in &self.members {
            for key in member.scores.keys() {
                if !attributes.is_valid_key(key) {
                    tracing::warn!("Member '{}' has unknown attribute key '{}'", member.id, key);
                    unknown += 1;
                }
            }
        }
        unknown
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn member(&self, id: &str) -> Option<&Member> {
        self.members.iter().find(|member| member.id == id)
    }

    pub fn group(&self, id: &str) -> Option<&Group> {
        self.groups.iter().find(|group| group.id == id)
    }
}
