//! Narrow symbolic simplifier for feature names
//!
//! Generated features only ever contain variables, unary operator calls, products and integer
//! powers, so an [Expression] is a product of powers in normal form. Canonical feature names
//! are the rendering of that normal form.

mod expression;
pub use expression::{Atom, Expression};

mod parser;

use crate::error::ParseError;

use std::str::FromStr;

impl FromStr for Expression {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse(s)
    }
}

/// Canonical form of a raw feature name
///
/// ```
/// use symbolic_features::canonicalize;
///
/// assert_eq!(canonicalize("x_1*x_0*x_0").unwrap(), "x_0**2*x_1");
/// assert_eq!(canonicalize("x_0**-1*x_0").unwrap(), "1");
/// ```
pub fn canonicalize(name: &str) -> Result<String, ParseError> {
    Ok(name.parse::<Expression>()?.to_string())
}
