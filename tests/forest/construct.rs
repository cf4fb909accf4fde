#![allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]

use std::collections::BTreeMap;

use forest_space::prelude::*;

/// Draws a concrete value from a distribution graph, standing in for the
/// optimizer's sampler.
fn draw(rng: &mut fastrand::Rng, dist: &Distribution) -> ParamValue {
    match dist {
        Distribution::Constant(v) => v.clone(),
        Distribution::Categorical(c) => {
            let idx = rng.usize(..c.choices.len());
            draw(rng, &c.choices[idx])
        }
        Distribution::WeightedChoice(w) => {
            let total: f64 = w.choices.iter().map(|(p, _)| p).sum();
            let mut u = rng.f64() * total;
            for (p, choice) in &w.choices {
                if u < *p {
                    return draw(rng, choice);
                }
                u -= p;
            }
            draw(rng, &w.choices[w.choices.len() - 1].1)
        }
        Distribution::LogUniformInt(d) => {
            let (lo, hi) = (d.low.ln(), d.high.ln());
            let x = (lo + rng.f64() * (hi - lo)).exp();
            ParamValue::Int(((x / d.step).round() * d.step) as i64)
        }
        Distribution::Uniform(d) => ParamValue::Float(d.low + rng.f64() * (d.high - d.low)),
        Distribution::RandInt(d) => ParamValue::Int(rng.i64(0..d.upper)),
    }
}

#[derive(Debug)]
struct FakeForest {
    estimator: Estimator,
    params: BTreeMap<String, ParamValue>,
}

struct FakeFactory;

impl EstimatorFactory for FakeFactory {
    type Model = FakeForest;

    fn build(&self, estimator: Estimator, params: &BTreeMap<String, ParamValue>) -> Result<FakeForest> {
        if let Some(ParamValue::Str(c)) = params.get("criterion")
            && estimator.task() == Task::Regression
            && (c == "gini" || c == "entropy")
        {
            return Err(Error::Estimator(format!("criterion {c} is for classifiers")));
        }
        Ok(FakeForest {
            estimator,
            params: params.clone(),
        })
    }
}

#[test]
fn test_resolved_values_stay_in_range() {
    let mut rng = fastrand::Rng::with_seed(42);
    let call = random_forest_classifier("m", &ForestConfig::new()).unwrap();

    for _ in 0..500 {
        let model = call
            .construct(&FakeFactory, |d| Ok(draw(&mut rng, d)))
            .unwrap();
        assert_eq!(model.estimator, Estimator::RandomForestClassifier);
        assert_eq!(model.params.len(), 17);

        let n = model.params["n_estimators"].as_int().unwrap();
        assert!((10..=3000).contains(&n), "n_estimators {n}");

        match &model.params["max_depth"] {
            ParamValue::None => {}
            ParamValue::Int(d) => assert!((2..=4).contains(d)),
            other => panic!("max_depth {other:?}"),
        }

        let leaf = model.params["min_samples_leaf"].as_int().unwrap();
        assert!((1..=50).contains(&leaf), "min_samples_leaf {leaf}");

        match &model.params["max_features"] {
            ParamValue::None => {}
            ParamValue::Str(s) => assert!(s == "sqrt" || s == "log2"),
            ParamValue::Float(f) => assert!((0.0..=1.0).contains(f)),
            other => panic!("max_features {other:?}"),
        }

        let seed = model.params["random_state"].as_int().unwrap();
        assert!((0..5).contains(&seed));

        let criterion = model.params["criterion"].as_str().unwrap();
        assert!(criterion == "gini" || criterion == "entropy");
    }
}

#[test]
fn test_regressors_never_resolve_classifier_criteria() {
    let mut rng = fastrand::Rng::with_seed(7);
    for call in forest_regressors("reg").unwrap() {
        for _ in 0..100 {
            let model = call.construct(&FakeFactory, |d| Ok(draw(&mut rng, d)));
            assert!(model.is_ok());
        }
    }
}

#[test]
fn test_factory_errors_propagate() {
    let call = random_forest_regressor("m", &ForestConfig::new().criterion("gini")).unwrap();
    let mut rng = fastrand::Rng::with_seed(1);
    let err = call
        .construct(&FakeFactory, |d| Ok(draw(&mut rng, d)))
        .unwrap_err();
    assert!(matches!(err, Error::Estimator(_)));
}

#[test]
fn test_resolver_errors_abort_construction() {
    let call = extra_trees_classifier("m", &ForestConfig::new()).unwrap();
    let err = call.construct(&FakeFactory, forest_space::unresolved).unwrap_err();
    assert!(matches!(err, Error::Unresolved { label } if label == "m.etc_n_estimators"));
}

#[test]
fn test_fully_pinned_space_needs_no_resolver() {
    let config = ForestConfig::new()
        .n_estimators(100)
        .max_depth(8)
        .min_samples_split(2)
        .min_samples_leaf(1)
        .max_features("sqrt")
        .max_leaf_nodes(64)
        .min_impurity_decrease(0.01)
        .bootstrap(true)
        .random_state(0)
        .criterion("entropy");
    let call = extra_trees_classifier("m", &config).unwrap();
    assert!(call.labels().is_empty());

    let model = call.construct(&FakeFactory, forest_space::unresolved).unwrap();
    assert_eq!(model.params["max_depth"], ParamValue::Int(8));
    assert_eq!(model.params["min_weight_fraction_leaf"], ParamValue::Float(0.0));
    assert_eq!(model.params["n_jobs"], ParamValue::Int(1));
}
