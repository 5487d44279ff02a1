//! Record and definition fixtures shaped like the policy API responses.

#![allow(dead_code)]

use grc_core::{KeyOptions, Record, TableDefinition};
use serde_json::json;

/// Per-cluster rows: `name` + `cluster` keys.
pub fn cluster_key_options() -> KeyOptions {
    KeyOptions::new("name").with_qualifier("cluster")
}

pub fn duplicated_cluster_rows() -> Vec<Record> {
    vec![
        json!({ "name": "a", "cluster": "x", "status": "NonCompliant" }),
        json!({ "name": "b", "cluster": "y", "status": "Compliant" }),
        json!({ "name": "a", "cluster": "x", "status": "Compliant" }),
    ]
}

pub fn policy(name: &str, namespace: &str, violations: u64, remediation: &str) -> Record {
    json!({
        "name": name,
        "namespace": namespace,
        "violations": violations,
        "remediation": remediation,
        "metadata": { "name": name, "namespace": namespace }
    })
}

pub fn policy_rows() -> Vec<Record> {
    vec![
        policy("policy-pod", "default", 2, "inform"),
        policy("policy-role", "kube-system", 0, "enforce"),
        policy("policy-namespace", "default", 10, "inform"),
        policy("policy-limitrange", "default", 2, "enforce"),
    ]
}

pub fn policies_definition() -> TableDefinition {
    serde_json::from_value(json!({
        "tableKeys": [
            { "msgKey": "table.header.policy.name", "resourceKey": "name" },
            { "msgKey": "table.header.namespace", "resourceKey": "namespace" },
            { "msgKey": "table.header.violation", "resourceKey": "violations" },
            { "msgKey": "table.header.remediation", "resourceKey": "remediation" }
        ]
    }))
    .expect("valid policies definition")
}

pub fn policy_clusters_definition() -> TableDefinition {
    serde_json::from_value(json!({
        "normalizedKey": "name",
        "tableKeys": [
            { "msgKey": "table.header.cluster", "resourceKey": "cluster" },
            { "msgKey": "table.header.status", "resourceKey": "status" }
        ]
    }))
    .expect("valid policy clusters definition")
}
