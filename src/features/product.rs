use crate::evaluator::*;
use crate::feature::Feature;

macro_const! {
    const DOC: &str = r"
Product of two features

Elementwise product of both operands, named `<left>*<right>`. The canonical name treats the
product as commutative and associative and collects powers of repeated factors, so `x_0*x_0`
and `x_0**2` share a canonical name.

- Depends on: union of what both operands depend on
";
}

#[doc = DOC!()]
#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(bound = "T: Float")]
pub struct Product<T>
where
    T: Float,
{
    left: Box<Feature<T>>,
    right: Box<Feature<T>>,
    #[serde(skip)]
    canonical: CanonicalName,
}

impl<T> Product<T>
where
    T: Float,
{
    pub fn new(left: impl Into<Feature<T>>, right: impl Into<Feature<T>>) -> Self {
        Self {
            left: Box::new(left.into()),
            right: Box::new(right.into()),
            canonical: CanonicalName::default(),
        }
    }

    pub fn left(&self) -> &Feature<T> {
        &self.left
    }

    pub fn right(&self) -> &Feature<T> {
        &self.right
    }

    pub const fn doc() -> &'static str {
        DOC
    }
}

impl<T> FeaturePropsTrait for Product<T>
where
    T: Float,
{
    fn name(&self) -> String {
        format!("{}*{}", self.left.name(), self.right.name())
    }

    fn expression(&self) -> Expression {
        self.left.expression() * self.right.expression()
    }

    fn variables(&self) -> BTreeSet<usize> {
        let mut variables = self.left.variables();
        variables.extend(self.right.variables());
        variables
    }

    fn canonical_name_cache(&self) -> &CanonicalName {
        &self.canonical
    }
}

impl<T> FeatureEvaluator<T> for Product<T>
where
    T: Float,
{
    fn eval(&self, x: TableView<'_, T>) -> Column<T> {
        self.left.eval(x.view()) * self.right.eval(x)
    }
}
