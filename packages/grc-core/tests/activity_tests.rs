//! Violation counts over propagated policy status.

use grc_core::{ViolationSummary, ViolationType};
use serde_json::{json, Value};

fn policy(name: Option<&str>, statuses: Value) -> Value {
    let mut policy = json!({ "raw": { "status": { "status": statuses } } });
    if let Some(name) = name {
        policy["metadata"] = json!({ "name": name });
    }
    policy
}

#[test]
fn counts_distinct_policies_and_clusters() {
    let policies = vec![
        policy(
            Some("policy-pod"),
            json!({
                "cluster-1": { "compliant": "NonCompliant" },
                "cluster-2": { "compliant": "Compliant" }
            }),
        ),
        policy(
            Some("policy-role"),
            json!({
                "cluster-1": { "compliant": "noncompliant" },
                "cluster-3": {}
            }),
        ),
        policy(Some("policy-quota"), json!({ "cluster-2": { "compliant": "compliant" } })),
    ];

    let summary = ViolationSummary::from_policies(&policies);

    assert_eq!(summary.policies.iter().collect::<Vec<_>>(), vec!["policy-pod", "policy-role"]);
    assert_eq!(summary.clusters.iter().collect::<Vec<_>>(), vec!["cluster-1", "cluster-3"]);

    let [policy_card, cluster_card] = summary.cards();
    assert_eq!((policy_card.count, policy_card.violation_type), (2, ViolationType::Policy));
    assert_eq!((cluster_card.count, cluster_card.violation_type), (2, ViolationType::Cluster));
    assert!(policy_card.alert());
}

#[test]
fn unnamed_policies_count_as_unknown() {
    let policies = vec![
        policy(None, json!({ "local-cluster": { "compliant": "NonCompliant" } })),
        policy(None, json!({ "remote": { "compliant": "NonCompliant" } })),
    ];

    let summary = ViolationSummary::from_policies(&policies);

    assert_eq!(summary.policies.len(), 1);
    assert!(summary.policies.contains("unknown"));
    assert_eq!(summary.clusters.len(), 2);
}

#[test]
fn cards_serialize_for_the_overview() {
    let summary = ViolationSummary::from_policies(&[] as &[Value]);

    assert_eq!(
        serde_json::to_value(summary.cards()).unwrap(),
        json!([
            { "count": 0, "violationType": "policy" },
            { "count": 0, "violationType": "cluster" }
        ])
    );
}
