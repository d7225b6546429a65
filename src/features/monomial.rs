use crate::evaluator::*;

use std::num::NonZeroI32;

macro_const! {
    const DOC: &str = r"
Monomial of a single base variable

Column `index` of the table raised elementwise to a non-zero integer `exponent`, named `x_<index>`
for unit exponent and `x_<index>**<exponent>` otherwise. The zero power is the [Constant](crate::Constant)
feature and is rejected.

- Depends on: column `index`
";
}

#[doc = DOC!()]
#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Monomial {
    exponent: NonZeroI32,
    index: usize,
    #[serde(skip)]
    canonical: CanonicalName,
}

impl Monomial {
    pub fn new(exponent: i32, index: usize) -> Result<Self, SymbolicFeaturesError> {
        let exponent = NonZeroI32::new(exponent).ok_or_else(SymbolicFeaturesError::zero_exponent)?;
        Ok(Self {
            exponent,
            index,
            canonical: CanonicalName::default(),
        })
    }

    pub fn exponent(&self) -> i32 {
        self.exponent.get()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub const fn doc() -> &'static str {
        DOC
    }
}

impl FeaturePropsTrait for Monomial {
    fn name(&self) -> String {
        match self.exponent() {
            1 => format!("x_{}", self.index),
            exponent => format!("x_{}**{}", self.index, exponent),
        }
    }

    fn expression(&self) -> Expression {
        Expression::variable(self.index).pow(self.exponent().into())
    }

    fn variables(&self) -> BTreeSet<usize> {
        BTreeSet::from([self.index])
    }

    fn canonical_name_cache(&self) -> &CanonicalName {
        &self.canonical
    }
}

impl<T: Float> FeatureEvaluator<T> for Monomial {
    /// # Panics
    ///
    /// If the table has no column `index`
    fn eval(&self, x: TableView<'_, T>) -> Column<T> {
        let exponent = self.exponent();
        x.column(self.index).mapv(|v| v.powi(exponent))
    }
}
