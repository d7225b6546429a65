use crate::dedup::Candidate;
use crate::evaluator::*;
use crate::feature::Feature;
use crate::fingerprint::{Fingerprint, table_fingerprint};
use crate::operators::{Operator, OperatorPropsTrait};
use crate::pipeline::GenerationPipeline;
use crate::types::CowArray2;

use itertools::Itertools;
use ndarray::{Array2, ArrayView2, AsArray, Axis, Ix2, ShapeBuilder};
use std::sync::OnceLock;

macro_const! {
    const DOC: &str = r#"
Symbolic feature generator

Expands a table of base variables `x_0, x_1, ...` into a matrix of candidate features for
regression:

- constant `1`, optional
- monomials `x_i**e` for every configured exponent `e` and every column `i`
- unary operators applied to monomials, e.g. `sin(x_0**2)`
- products of a unary operator feature and a monomial, and of two monomials of different
  columns, e.g. `x_1*sin(x_0)` and `x_0*x_1**2`

Products of two powers of the same column, like `x_0*x_0**2`, are never generated, such a
product is a monomial already.

Candidates with any non-finite value are dropped, and a candidate is retained only if neither
its algebraically simplified name nor the hash of its values was seen before, so `x_0*x_0`
never shows up next to `x_0**2` and two identical input columns produce a single feature.

[SymbolicFeatures::fit] keeps the matrix of the fit table, transforming the same table again
returns a view of it without any evaluation.

```
use ndarray::array;
use symbolic_features::SymbolicFeatures;

let x = array![[1.0_f64], [2.0], [3.0]];
let mut features = SymbolicFeatures::<f64>::new([1, 2], [])?;
let matrix = features.fit_transform(&x)?;
assert_eq!(matrix, array![[1.0, 1.0, 1.0], [1.0, 2.0, 4.0], [1.0, 3.0, 9.0]]);
assert_eq!(features.names()?, ["1", "x_0", "x_0**2"]);
# Ok::<(), symbolic_features::SymbolicFeaturesError>(())
```
"#;
}

#[doc = DOC!()]
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(
    try_from = "SymbolicFeaturesParameters<T>",
    bound = "T: Float"
)]
pub struct SymbolicFeatures<T>
where
    T: Float,
{
    exponents: Vec<i32>,
    operators: Vec<Operator<T>>,
    include_constant: bool,
    fitted: Option<FittedState<T>>,
}

/// Everything [SymbolicFeatures::fit] learns from the fit table
#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema)]
#[serde(bound = "T: Float")]
struct FittedState<T>
where
    T: Float,
{
    features: Vec<Feature<T>>,
    n_columns: usize,
    #[serde(skip)]
    cache: Option<FitCache<T>>,
    #[serde(skip)]
    names: OnceLock<Vec<String>>,
}

#[derive(Clone, Debug)]
struct FitCache<T> {
    table_fingerprint: Fingerprint,
    matrix: Array2<T>,
}

impl<T> SymbolicFeatures<T>
where
    T: Float,
{
    /// New unfitted generator with the constant feature enabled
    ///
    /// Repeated exponents are collapsed keeping the first occurrence. Zero exponents and operator
    /// names that are repeated or are not identifiers are errors.
    pub fn new(
        exponents: impl IntoIterator<Item = i32>,
        operators: impl IntoIterator<Item = Operator<T>>,
    ) -> Result<Self, SymbolicFeaturesError> {
        let exponents: Vec<_> = exponents.into_iter().unique().collect();
        let operators: Vec<_> = operators.into_iter().collect();
        validate_exponents(&exponents)?;
        validate_operators(&operators)?;
        Ok(Self {
            exponents,
            operators,
            include_constant: true,
            fitted: None,
        })
    }

    /// Enable or disable the constant feature, forgets previous fit
    pub fn with_constant(mut self, include_constant: bool) -> Self {
        self.include_constant = include_constant;
        self.fitted = None;
        self
    }

    pub fn exponents(&self) -> &[i32] {
        &self.exponents
    }

    pub fn operators(&self) -> &[Operator<T>] {
        &self.operators
    }

    pub fn include_constant(&self) -> bool {
        self.include_constant
    }

    pub fn is_fitted(&self) -> bool {
        self.fitted.is_some()
    }

    /// Generate, filter and deduplicate the features of a table
    ///
    /// Fitted state is replaced only on success, a failed fit leaves the previous one in place.
    pub fn fit<'a, A>(&mut self, x: A) -> Result<&mut Self, SymbolicFeaturesError>
    where
        A: AsArray<'a, T, Ix2>,
        T: 'a,
    {
        self.fit_transform(x)?;
        Ok(self)
    }

    /// Fit and return the matrix of the fit table
    pub fn fit_transform<'a, A>(&mut self, x: A) -> Result<ArrayView2<'_, T>, SymbolicFeaturesError>
    where
        A: AsArray<'a, T, Ix2>,
        T: 'a,
    {
        let x = x.into();
        let table_fingerprint = table_fingerprint(&x);
        let retained = GenerationPipeline {
            exponents: &self.exponents,
            operators: &self.operators,
            include_constant: self.include_constant,
        }
        .run(x.view())?;
        if retained.is_empty() {
            return Err(SymbolicFeaturesError::EmptyResult);
        }

        let (features, columns): (Vec<_>, Vec<_>) =
            retained.into_iter().map(Candidate::into_parts).unzip();
        let matrix = assemble(x.nrows(), columns.into_iter());
        tracing::debug!(
            rows = x.nrows(),
            columns = x.ncols(),
            features = features.len(),
            %table_fingerprint,
            "features fitted"
        );

        let state = self.fitted.insert(FittedState {
            features,
            n_columns: x.ncols(),
            cache: None,
            names: OnceLock::new(),
        });
        let cache = state.cache.insert(FitCache {
            table_fingerprint,
            matrix,
        });
        Ok(cache.matrix.view())
    }

    /// Feature matrix of a table, one column per retained feature
    ///
    /// The fit table gives a view of the cached matrix, any other table is evaluated feature by
    /// feature into a new matrix.
    pub fn transform<'a, A>(&self, x: A) -> Result<CowArray2<'_, T>, SymbolicFeaturesError>
    where
        A: AsArray<'a, T, Ix2>,
        T: 'a,
    {
        let fitted = self.fitted()?;
        let x = x.into();
        if x.ncols() != fitted.n_columns {
            return Err(SymbolicFeaturesError::ColumnCountMismatch {
                expected: fitted.n_columns,
                actual: x.ncols(),
            });
        }
        if let Some(cache) = &fitted.cache {
            if cache.table_fingerprint == table_fingerprint(&x) {
                tracing::trace!(table_fingerprint = %cache.table_fingerprint, "cache hit");
                return Ok(cache.matrix.view().into());
            }
        }
        tracing::trace!(
            rows = x.nrows(),
            features = fitted.features.len(),
            "cache miss"
        );
        let columns = fitted.features.iter().map(|feature| feature.eval(x.view()));
        Ok(assemble(x.nrows(), columns).into())
    }

    /// Canonical names of the retained features in column order
    pub fn names(&self) -> Result<&[String], SymbolicFeaturesError> {
        let fitted = self.fitted()?;
        let names = fitted.names.get_or_init(|| {
            fitted
                .features
                .iter()
                .map(|feature| feature.canonical_name().to_owned())
                .collect()
        });
        Ok(names)
    }

    /// Retained features in column order
    pub fn features(&self) -> Result<&[Feature<T>], SymbolicFeaturesError> {
        Ok(&self.fitted()?.features)
    }

    pub const fn doc() -> &'static str {
        DOC
    }

    fn fitted(&self) -> Result<&FittedState<T>, SymbolicFeaturesError> {
        self.fitted.as_ref().ok_or(SymbolicFeaturesError::NotFitted)
    }
}

fn validate_exponents(exponents: &[i32]) -> Result<(), SymbolicFeaturesError> {
    if exponents.contains(&0) {
        return Err(SymbolicFeaturesError::zero_exponent());
    }
    Ok(())
}

fn validate_operators<T: Float>(operators: &[Operator<T>]) -> Result<(), SymbolicFeaturesError> {
    if let Some(operator) = operators.iter().find(|op| !is_identifier(op.name())) {
        return Err(SymbolicFeaturesError::InvalidParameter(format!(
            "operator name {:?} is not an identifier",
            operator.name()
        )));
    }
    if let Some(name) = operators.iter().map(|op| op.name()).duplicates().next() {
        return Err(SymbolicFeaturesError::InvalidParameter(format!(
            "operator {name:?} is given more than once"
        )));
    }
    Ok(())
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_')
}

/// Column-major matrix, so every column is a contiguous slice
fn assemble<T: Float>(nrows: usize, columns: impl ExactSizeIterator<Item = Column<T>>) -> Array2<T> {
    let mut matrix = Array2::zeros((nrows, columns.len()).f());
    for (mut target, column) in matrix.axis_iter_mut(Axis(1)).zip(columns) {
        target.assign(&column);
    }
    matrix
}

#[derive(Deserialize, JsonSchema)]
#[serde(rename = "SymbolicFeatures", bound = "T: Float")]
struct SymbolicFeaturesParameters<T>
where
    T: Float,
{
    exponents: Vec<i32>,
    operators: Vec<Operator<T>>,
    include_constant: bool,
    fitted: Option<FittedState<T>>,
}

impl<T> TryFrom<SymbolicFeaturesParameters<T>> for SymbolicFeatures<T>
where
    T: Float,
{
    type Error = SymbolicFeaturesError;

    fn try_from(value: SymbolicFeaturesParameters<T>) -> Result<Self, Self::Error> {
        let SymbolicFeaturesParameters {
            exponents,
            operators,
            include_constant,
            fitted,
        } = value;
        if let Some(fitted) = &fitted {
            if fitted.features.is_empty() {
                return Err(SymbolicFeaturesError::EmptyResult);
            }
            let out_of_range = fitted
                .features
                .iter()
                .flat_map(|feature| feature.variables())
                .find(|&index| index >= fitted.n_columns);
            if let Some(index) = out_of_range {
                return Err(SymbolicFeaturesError::InvalidParameter(format!(
                    "feature uses column {index}, but the fit table has {} columns",
                    fitted.n_columns
                )));
            }
        }
        let mut features = Self::new(exponents, operators)?.with_constant(include_constant);
        features.fitted = fitted;
        Ok(features)
    }
}

impl<T> JsonSchema for SymbolicFeatures<T>
where
    T: Float,
{
    fn is_referenceable() -> bool {
        false
    }

    fn schema_name() -> String {
        SymbolicFeaturesParameters::<T>::schema_name()
    }

    fn json_schema(r#gen: &mut schemars::r#gen::SchemaGenerator) -> schemars::schema::Schema {
        SymbolicFeaturesParameters::<T>::json_schema(r#gen)
    }
}
