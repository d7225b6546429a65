pub(super) use crate::float_trait::Float;

use crate::error::SymbolicFeaturesError;
use crate::types::Column;

use enum_dispatch::enum_dispatch;
pub(super) use macro_const::macro_const;
pub(super) use schemars::JsonSchema;
pub(super) use serde::{Deserialize, Serialize};
pub(super) use std::fmt::Debug;
use std::str::FromStr;

#[enum_dispatch]
pub trait OperatorPropsTrait {
    /// Name the operator has in feature names, e.g. `sin` in `sin(x_0)`
    fn name(&self) -> &str;
}

#[enum_dispatch]
pub trait OperatorTrait<T: Float>: OperatorPropsTrait + Clone + Debug + Send + Sync {
    /// Apply the operator to a single value
    fn apply(&self, x: T) -> T;

    /// Apply the operator elementwise, reusing the column allocation
    fn transform(&self, column: Column<T>) -> Column<T> {
        column.mapv_into(|x| self.apply(x))
    }
}

/// Unary operators applied to monomials
///
/// Built-in operators are serializable and can be parsed from their names, custom operators
/// wrap a user function and are neither.
#[enum_dispatch(OperatorTrait<T>, OperatorPropsTrait)]
#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(bound = "T: Float")]
#[non_exhaustive]
pub enum Operator<T: Float> {
    Abs(super::abs::AbsOperator),
    Arcsinh(super::arcsinh::ArcsinhOperator),
    Cos(super::cos::CosOperator),
    Exp(super::exp::ExpOperator),
    Log(super::log::LogOperator),
    Sin(super::sin::SinOperator),
    Sqrt(super::sqrt::SqrtOperator),
    Tanh(super::tanh::TanhOperator),
    #[serde(skip)]
    Custom(super::custom::CustomOperator<T>),
}

impl<T: Float> Operator<T> {
    /// Names accepted by [Operator::from_str]
    pub const BUILTIN_NAMES: [&'static str; 8] =
        ["abs", "arcsinh", "cos", "exp", "log", "sin", "sqrt", "tanh"];

    pub fn custom(name: impl Into<String>, func: fn(T) -> T) -> Self {
        super::custom::CustomOperator::new(name, func).into()
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }
}

impl<T: Float> FromStr for Operator<T> {
    type Err = SymbolicFeaturesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let operator = match s {
            "abs" => super::abs::AbsOperator::new().into(),
            "arcsinh" => super::arcsinh::ArcsinhOperator::new().into(),
            "cos" => super::cos::CosOperator::new().into(),
            "exp" => super::exp::ExpOperator::new().into(),
            "log" => super::log::LogOperator::new().into(),
            "sin" => super::sin::SinOperator::new().into(),
            "sqrt" => super::sqrt::SqrtOperator::new().into(),
            "tanh" => super::tanh::TanhOperator::new().into(),
            _ => return Err(SymbolicFeaturesError::UnknownOperator(s.to_owned())),
        };
        Ok(operator)
    }
}
