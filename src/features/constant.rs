use crate::evaluator::*;

macro_const! {
    const DOC: &str = r"
Constant feature

Column of ones named `1`, the intercept of a downstream regression.

- Depends on: number of table rows only
";
}

#[doc = DOC!()]
#[derive(Clone, Debug, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Constant {
    #[serde(skip)]
    canonical: CanonicalName,
}

impl Constant {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn doc() -> &'static str {
        DOC
    }
}

impl FeaturePropsTrait for Constant {
    fn name(&self) -> String {
        "1".to_owned()
    }

    fn expression(&self) -> Expression {
        Expression::one()
    }

    fn variables(&self) -> BTreeSet<usize> {
        BTreeSet::new()
    }

    fn canonical_name_cache(&self) -> &CanonicalName {
        &self.canonical
    }
}

impl<T: Float> FeatureEvaluator<T> for Constant {
    fn eval(&self, x: TableView<'_, T>) -> Column<T> {
        Column::ones(x.nrows())
    }
}
