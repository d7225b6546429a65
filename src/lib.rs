#![doc = include_str!("../README.md")]


mod evaluator;
pub use evaluator::{CanonicalName, FeatureEvaluator, FeaturePropsTrait};

mod error;
pub use error::{ParseError, SymbolicFeaturesError};

mod dedup;
pub use dedup::{Candidate, Deduplicator, dedup, is_valid};

mod feature;
pub use feature::Feature;

pub mod features;
pub use features::*;

mod fingerprint;
pub use fingerprint::{Fingerprint, fingerprint, table_fingerprint};

mod float_trait;
pub use float_trait::Float;

pub mod operators;
pub use operators::{Operator, OperatorPropsTrait, OperatorTrait};

mod pipeline;

pub mod symbolic;
pub use symbolic::{Expression, canonicalize};

mod symbolic_features;
pub use symbolic_features::SymbolicFeatures;

mod types;
pub use types::{Column, CowArray2, TableView};

pub use ndarray;
