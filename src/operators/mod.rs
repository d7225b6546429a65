use operator::*;
pub use operator::{Operator, OperatorPropsTrait, OperatorTrait};

use paste::paste;

pub mod custom;
pub mod operator;

// mapv_into() applies the function in place and allocates nothing
macro_rules! operator_from_per_element_fn {
    ($module:ident, $func:expr, $name:literal, $doc:literal $(,)?) => {
        paste! {
            pub mod $module {
                use super::*;

                #[doc = $doc]
                #[derive(Clone, Debug, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash)]
                pub struct [<$module:camel Operator>] {}

                impl [<$module:camel Operator>] {
                    pub fn new() -> Self {
                        Self {}
                    }

                    pub const fn doc() -> &'static str {
                        $doc
                    }
                }

                impl OperatorPropsTrait for [<$module:camel Operator>] {
                    #[inline]
                    fn name(&self) -> &str {
                        $name
                    }
                }

                impl<T: Float> OperatorTrait<T> for [<$module:camel Operator>] {
                    #[inline]
                    fn apply(&self, x: T) -> T {
                        let func = $func;
                        func(x)
                    }
                }

            }
        }
    };
}

operator_from_per_element_fn!(abs, T::abs, "abs", "Absolute value operator");
operator_from_per_element_fn!(
    arcsinh,
    T::asinh,
    "arcsinh",
    "Hyperbolic arcsine operator"
);
operator_from_per_element_fn!(cos, T::cos, "cos", "Cosine operator");
operator_from_per_element_fn!(exp, T::exp, "exp", "Exponent operator");
operator_from_per_element_fn!(
    log,
    T::ln,
    "log",
    "Natural logarithm operator, non-finite for non-positive input"
);
operator_from_per_element_fn!(sin, T::sin, "sin", "Sine operator");
operator_from_per_element_fn!(
    sqrt,
    T::sqrt,
    "sqrt",
    "Square root operator, NaN for negative input"
);
operator_from_per_element_fn!(tanh, T::tanh, "tanh", "Hyperbolic tangent operator");
