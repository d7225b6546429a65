use crate::evaluator::*;
use crate::features::*;

use enum_dispatch::enum_dispatch;

/// All candidate features are variants of this enum
///
/// Consider to import [crate::FeatureEvaluator] and [crate::FeaturePropsTrait] as well
#[enum_dispatch(FeatureEvaluator<T>, FeaturePropsTrait)]
#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(bound = "T: Float")]
#[non_exhaustive]
pub enum Feature<T>
where
    T: Float,
{
    Constant,
    Monomial,
    UnaryOp(UnaryOp<T>),
    Product(Product<T>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operators::Operator;

    use ndarray::array;

    #[test]
    fn test_feature_partial_eq() {
        let constant1: Feature<f64> = Constant::new().into();
        let constant2: Feature<f64> = Constant::new().into();
        assert_eq!(constant1, constant2);

        let square: Feature<f64> = Monomial::new(2, 0).unwrap().into();
        assert_ne!(constant1, square);
        assert_ne!(square, Monomial::new(2, 1).unwrap().into());
        assert_ne!(square, Monomial::new(3, 0).unwrap().into());
    }

    #[test]
    fn memoized_name_does_not_affect_equality() {
        let a: Feature<f64> = Monomial::new(2, 0).unwrap().into();
        let b = a.clone();
        assert_eq!(a.canonical_name(), "x_0**2");
        assert!(a.canonical_name_cache().is_computed());
        assert!(!Feature::<f64>::from(Monomial::new(2, 0).unwrap())
            .canonical_name_cache()
            .is_computed());
        assert_eq!(a, b);
    }

    #[test]
    fn dispatch_to_variants() {
        let x = array![[1.0, 2.0], [3.0, 4.0]];
        let sin: Operator<f64> = "sin".parse().unwrap();
        let features: Vec<Feature<f64>> = vec![
            Constant::new().into(),
            Monomial::new(-1, 1).unwrap().into(),
            UnaryOp::new(Monomial::new(1, 0).unwrap(), sin).into(),
            Product::new(Monomial::new(1, 0).unwrap(), Monomial::new(1, 1).unwrap()).into(),
        ];
        let names: Vec<_> = features.iter().map(|f| f.name()).collect();
        assert_eq!(names, ["1", "x_1**-1", "sin(x_0)", "x_0*x_1"]);
        for feature in &features {
            assert_eq!(feature.eval(x.view()).len(), 2);
        }
        assert_eq!(features[3].eval(x.view()), array![2.0, 12.0]);
    }

    #[test]
    fn serde_json_round_trip() {
        let log: Operator<f64> = "log".parse().unwrap();
        let feature: Feature<f64> = Product::new(
            UnaryOp::new(Monomial::new(2, 1).unwrap(), log),
            Monomial::new(-1, 0).unwrap(),
        )
        .into();
        let json = serde_json::to_string(&feature).unwrap();
        let restored: Feature<f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(feature, restored);
        assert_eq!(restored.name(), "log(x_1**2)*x_0**-1");
    }

    #[test]
    fn json_schema() {
        let schema = schemars::schema_for!(Feature<f64>);
        let json = serde_json::to_string(&schema).unwrap();
        assert!(json.contains("Monomial"));
        assert!(json.contains("UnaryOp"));
    }
}
