use std::collections::HashSet;

use forest_space::prelude::*;

#[test]
fn test_labels_are_pairwise_distinct_within_a_call() {
    for estimator in Estimator::ALL {
        let call = forest_space::forest::forest_estimator(estimator, "m", &ForestConfig::new()).unwrap();
        let labels = call.labels();
        let unique: HashSet<&str> = labels.iter().copied().collect();
        assert_eq!(unique.len(), labels.len(), "{estimator}: {labels:?}");
    }
}

#[test]
fn test_labels_are_derived_from_base_tag_and_param() {
    let call = random_forest_classifier("rf", &ForestConfig::new()).unwrap();
    let labels = call.labels();
    assert_eq!(
        labels,
        vec![
            "rf.rfc_n_estimators",
            "rf.rfc_max_depth",
            "rf.rfc_min_samples_split",
            "rf.rfc_min_samples_leaf",
            "rf.rfc_min_samples_leaf.gt1",
            "rf.rfc_max_features",
            "rf.rfc_max_features.frac",
            "rf.rfc_max_leaf_nodes",
            "rf.rfc_min_impurity_decrease",
            "rf.rfc_bootstrap",
            "rf.rfc_random_state",
            "rf.rfc_criterion",
        ]
    );
}

#[test]
fn test_same_inputs_yield_same_labels() {
    let a = extra_trees_regressor("x.y", &ForestConfig::new()).unwrap();
    let b = extra_trees_regressor("x.y", &ForestConfig::new()).unwrap();
    assert_eq!(a.labels(), b.labels());
}

#[test]
fn test_families_sharing_a_base_name_do_not_collide() {
    let rf = random_forest_classifier("rf", &ForestConfig::new()).unwrap();
    let et = extra_trees_classifier("rf", &ForestConfig::new()).unwrap();
    let rf_labels: HashSet<&str> = rf.labels().into_iter().collect();
    let et_labels: HashSet<&str> = et.labels().into_iter().collect();
    assert!(rf_labels.is_disjoint(&et_labels));
    assert!(et_labels.iter().all(|l| l.starts_with("rf.etc_")));
}

#[test]
fn test_all_four_families_are_disjoint() {
    let mut seen = HashSet::new();
    for estimator in Estimator::ALL {
        let call = forest_space::forest::forest_estimator(estimator, "base", &ForestConfig::new()).unwrap();
        for label in call.labels() {
            assert!(seen.insert(label.to_owned()), "duplicate label {label}");
        }
    }
}

#[test]
fn test_overridden_parameters_drop_their_labels() {
    let call = random_forest_regressor(
        "r",
        &ForestConfig::new()
            .n_estimators(100)
            .max_features("sqrt")
            .random_state(7),
    )
    .unwrap();
    let labels = call.labels();
    assert!(!labels.contains(&"r.rfr_n_estimators"));
    assert!(!labels.contains(&"r.rfr_max_features"));
    assert!(!labels.contains(&"r.rfr_max_features.frac"));
    assert!(!labels.contains(&"r.rfr_random_state"));
    assert!(labels.contains(&"r.rfr_max_depth"));
}
