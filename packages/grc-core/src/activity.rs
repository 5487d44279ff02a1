//! Recent-activity violation counts.
//!
//! A policy's propagated status lives at `raw.status.status`, a map from
//! cluster name to `{ "compliant": "Compliant" | "NonCompliant" | ... }`.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::trace;

use crate::record::get_field;

pub const STATUS_PATH: &str = "raw.status.status";
pub const POLICY_NAME_PATH: &str = "metadata.name";
pub const UNKNOWN_POLICY: &str = "unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViolationType {
    Policy,
    Cluster,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViolationCard {
    pub count: usize,
    pub violation_type: ViolationType,
}

impl ViolationCard {
    /// Cards with any violation are highlighted.
    pub fn alert(&self) -> bool {
        self.count > 0
    }
}

/// Whether a cluster status entry counts as a violation.
///
/// Only a non-empty compliance string that is not `noncompliant` (any case)
/// is compliant. Missing fields and non-string values are violations.
pub fn is_violation(status: &Value) -> bool {
    match status.get("compliant").and_then(Value::as_str) {
        Some(compliant) => compliant.is_empty() || compliant.to_lowercase() == "noncompliant",
        None => true,
    }
}

/// Name a policy is counted under: its `metadata.name` text, or the JSON text
/// of a non-string name.
fn policy_name(policy: &Value) -> String {
    match get_field(policy, POLICY_NAME_PATH) {
        Some(Value::String(name)) => name.clone(),
        Some(other) => other.to_string(),
        None => UNKNOWN_POLICY.to_string(),
    }
}

/// Distinct policies and clusters with at least one violation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViolationSummary {
    pub policies: BTreeSet<String>,
    pub clusters: BTreeSet<String>,
}

impl ViolationSummary {
    pub fn from_policies<'a, I>(policies: I) -> Self
    where
        I: IntoIterator<Item = &'a Value>,
    {
        let mut summary = Self::default();
        for policy in policies {
            let Some(statuses) = get_field(policy, STATUS_PATH).and_then(Value::as_object) else {
                continue;
            };
            for (cluster, status) in statuses {
                if !is_violation(status) {
                    continue;
                }
                let name = policy_name(policy);
                trace!(policy = name.as_str(), cluster = cluster.as_str(), "policy violation");
                summary.clusters.insert(cluster.clone());
                summary.policies.insert(name);
            }
        }
        summary
    }

    pub fn cards(&self) -> [ViolationCard; 2] {
        [
            ViolationCard {
                count: self.policies.len(),
                violation_type: ViolationType::Policy,
            },
            ViolationCard {
                count: self.clusters.len(),
                violation_type: ViolationType::Cluster,
            },
        ]
    }
}
