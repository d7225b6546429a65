use crate::evaluator::*;
use crate::feature::Feature;
use crate::operators::{Operator, OperatorPropsTrait, OperatorTrait};

macro_const! {
    const DOC: &str = r"
Unary operator applied to another feature

Evaluates the base feature and applies the operator elementwise, named `<operator>(<base>)`.
Non-finite output, e.g. the logarithm of a non-positive value, is left in place and rejected
later by the validity filter.

- Depends on: what the base feature depends on
";
}

#[doc = DOC!()]
#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(bound = "T: Float")]
pub struct UnaryOp<T>
where
    T: Float,
{
    // Boxed to avoid a recursive type in `Feature`
    base: Box<Feature<T>>,
    operator: Operator<T>,
    #[serde(skip)]
    canonical: CanonicalName,
}

impl<T> UnaryOp<T>
where
    T: Float,
{
    pub fn new(base: impl Into<Feature<T>>, operator: Operator<T>) -> Self {
        Self {
            base: Box::new(base.into()),
            operator,
            canonical: CanonicalName::default(),
        }
    }

    pub fn base(&self) -> &Feature<T> {
        &self.base
    }

    pub fn operator(&self) -> &Operator<T> {
        &self.operator
    }

    pub const fn doc() -> &'static str {
        DOC
    }
}

impl<T> FeaturePropsTrait for UnaryOp<T>
where
    T: Float,
{
    fn name(&self) -> String {
        format!("{}({})", self.operator.name(), self.base.name())
    }

    fn expression(&self) -> Expression {
        Expression::call(self.operator.name(), self.base.expression())
    }

    fn variables(&self) -> BTreeSet<usize> {
        self.base.variables()
    }

    fn canonical_name_cache(&self) -> &CanonicalName {
        &self.canonical
    }
}

impl<T> FeatureEvaluator<T> for UnaryOp<T>
where
    T: Float,
{
    fn eval(&self, x: TableView<'_, T>) -> Column<T> {
        self.operator.transform(self.base.eval(x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::{Monomial, Product};

    use approx::assert_relative_eq;
    use ndarray::array;

    fn operator(name: &str) -> Operator<f64> {
        name.parse().unwrap()
    }

    #[test]
    fn names() {
        let f = UnaryOp::new(Monomial::new(2, 1).unwrap(), operator("sin"));
        assert_eq!(f.name(), "sin(x_1**2)");
        assert_eq!(f.canonical_name(), "sin(x_1**2)");
        assert_eq!(f.variables(), BTreeSet::from([1]));
    }

    #[test]
    fn canonical_argument() {
        let f = UnaryOp::new(
            Product::new(Monomial::new(1, 1).unwrap(), Monomial::new(1, 0).unwrap()),
            operator("exp"),
        );
        assert_eq!(f.name(), "exp(x_1*x_0)");
        assert_eq!(f.canonical_name(), "exp(x_0*x_1)");
    }

    #[test]
    fn eval() {
        let x = array![[1.0, 4.0], [2.0, 9.0]];
        let f = UnaryOp::new(Monomial::new(1, 1).unwrap(), operator("sqrt"));
        assert_relative_eq!(f.eval(x.view()), array![2.0, 3.0]);
    }

    #[test]
    fn non_finite_output_is_kept() {
        let x = array![[0.0], [1.0]];
        let f = UnaryOp::new(Monomial::new(1, 0).unwrap(), operator("log"));
        let values = f.eval(x.view());
        assert_eq!(values[0], f64::NEG_INFINITY);
        assert_eq!(values[1], 0.0);
    }

    #[test]
    fn custom_operator() {
        let x = array![[1.0], [2.0]];
        let f = UnaryOp::new(
            Monomial::new(1, 0).unwrap(),
            Operator::custom("half", |v: f64| 0.5 * v),
        );
        assert_eq!(f.name(), "half(x_0)");
        assert_eq!(f.eval(x.view()), array![0.5, 1.0]);
    }

    check_doc_static_method!(doc_static_method, UnaryOp::<f64>);
}
