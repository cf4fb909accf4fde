use forest_space::prelude::*;

fn rejected(config: &ForestConfig) -> (String, String) {
    match random_forest_classifier("m", config) {
        Err(Error::InvalidParameter { name, value, .. }) => (name, value),
        other => panic!("expected InvalidParameter, got {other:?}"),
    }
}

#[test]
fn test_unknown_max_features_string_fails() {
    let err = random_forest_classifier("m", &ForestConfig::new().max_features("invalid")).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("max_features"), "{msg}");
    assert!(msg.contains("invalid"), "{msg}");
}

#[test]
fn test_known_max_features_strings_succeed() {
    for value in ["auto", "sqrt", "log2"] {
        assert!(
            random_forest_classifier("m", &ForestConfig::new().max_features(value)).is_ok(),
            "{value}"
        );
    }
}

#[test]
fn test_negative_float_n_estimators_fails() {
    let (name, value) = rejected(&ForestConfig::new().n_estimators(-1.0));
    assert_eq!(name, "n_estimators");
    assert_eq!(value, "-1.0");
}

#[test]
fn test_int_n_estimators_bypasses_float_rule() {
    assert!(random_forest_classifier("m", &ForestConfig::new().n_estimators(100)).is_ok());
    assert!(random_forest_classifier("m", &ForestConfig::new().n_estimators(-1)).is_ok());
}

#[test]
fn test_zero_float_fails_for_every_positive_parameter() {
    let configs = [
        ("n_estimators", ForestConfig::new().n_estimators(0.0)),
        ("max_depth", ForestConfig::new().max_depth(0.0)),
        ("min_samples_split", ForestConfig::new().min_samples_split(0.0)),
        ("min_samples_leaf", ForestConfig::new().min_samples_leaf(0.0)),
        ("max_features", ForestConfig::new().max_features(0.0)),
        ("max_leaf_nodes", ForestConfig::new().max_leaf_nodes(0.0)),
        ("min_impurity_decrease", ForestConfig::new().min_impurity_decrease(-0.5)),
    ];
    for (param, config) in configs {
        let (name, _) = rejected(&config);
        assert_eq!(name, param);
    }
}

#[test]
fn test_none_overrides_bypass_float_rule() {
    let config = ForestConfig::new()
        .max_depth(ParamValue::None)
        .max_leaf_nodes(ParamValue::None);
    assert!(random_forest_classifier("m", &config).is_ok());
}

#[test]
fn test_positive_float_fraction_succeeds() {
    let config = ForestConfig::new().min_samples_split(0.1).max_features(0.3);
    assert!(random_forest_regressor("m", &config).is_ok());
}

#[test]
fn test_negative_ccp_alpha_fails() {
    let (name, value) = rejected(&ForestConfig::new().ccp_alpha(-0.1));
    assert_eq!(name, "ccp_alpha");
    assert_eq!(value, "-0.1");
}

#[test]
fn test_zero_ccp_alpha_succeeds() {
    assert!(random_forest_classifier("m", &ForestConfig::new().ccp_alpha(0.0)).is_ok());
}

#[test]
fn test_first_failing_rule_wins() {
    let config = ForestConfig::new().ccp_alpha(-1.0).max_features("bogus");
    let (name, _) = rejected(&config);
    assert_eq!(name, "max_features");
}

#[test]
fn test_distribution_overrides_are_not_validated() {
    let config = ForestConfig::new().max_features(Distribution::choice("my.mf", ["bogus"]));
    assert!(random_forest_classifier("m", &config).is_ok());
}

#[test]
fn test_every_family_validates() {
    let config = ForestConfig::new().max_features("invalid");
    assert!(random_forest_classifier("m", &config).is_err());
    assert!(random_forest_regressor("m", &config).is_err());
    assert!(extra_trees_classifier("m", &config).is_err());
    assert!(extra_trees_regressor("m", &config).is_err());
}
