pub use crate::error::SymbolicFeaturesError;
pub use crate::float_trait::Float;
pub use crate::symbolic::Expression;
pub use crate::types::{Column, TableView};

use enum_dispatch::enum_dispatch;
pub use macro_const::macro_const;
pub use schemars::JsonSchema;
pub use serde::{Deserialize, Serialize};
pub use std::collections::BTreeSet;
pub use std::fmt::Debug;
use std::sync::OnceLock;

/// Memoized canonical name of a single feature instance
///
/// Clones carry the memo along. It is derived data, so it never takes part in comparisons.
#[derive(Clone, Debug, Default)]
pub struct CanonicalName(OnceLock<String>);

impl CanonicalName {
    pub fn get_or_init(&self, expression: impl FnOnce() -> Expression) -> &str {
        self.0.get_or_init(|| expression().to_string())
    }

    pub fn is_computed(&self) -> bool {
        self.0.get().is_some()
    }
}

impl PartialEq for CanonicalName {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for CanonicalName {}

#[enum_dispatch]
pub trait FeaturePropsTrait {
    /// Structural name, e.g. `x_0**2*x_0`
    fn name(&self) -> String;

    /// Symbolic form of the feature in normal form
    fn expression(&self) -> Expression;

    /// Indices of the table columns the feature depends on
    fn variables(&self) -> BTreeSet<usize>;

    fn canonical_name_cache(&self) -> &CanonicalName;

    /// Algebraically simplified name, e.g. `x_0**3` for `x_0**2*x_0`
    ///
    /// Computed on the first call, later calls return the memoized string.
    fn canonical_name(&self) -> &str {
        self.canonical_name_cache()
            .get_or_init(|| self.expression())
    }
}

#[enum_dispatch]
pub trait FeatureEvaluator<T: Float>: FeaturePropsTrait + Clone + Debug + Send + Sync {
    /// Evaluate the feature on every row of the table
    ///
    /// Pure function of the table and the feature parameters, the output length is the number
    /// of table rows.
    fn eval(&self, x: TableView<'_, T>) -> Column<T>;
}
