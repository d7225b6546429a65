use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fmt;
use std::ops::Mul;

/// Non-multiplicative building block of an [Expression]
///
/// Variables order before calls, variables by column index and calls by operator name and then
/// by argument, which fixes the factor order of a canonical product.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Atom {
    Variable(usize),
    Call {
        operator: String,
        argument: Box<Expression>,
    },
}

/// Product of integer powers of atoms in normal form
///
/// Every atom appears at most once and never with zero exponent, so the empty product is the
/// constant one. Two expressions equal under commutativity, associativity and power arithmetic
/// of products compare equal and render to the same string.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Expression {
    factors: BTreeMap<Atom, i64>,
}

impl Expression {
    pub fn one() -> Self {
        Self::default()
    }

    pub fn variable(index: usize) -> Self {
        Self::from_atom(Atom::Variable(index))
    }

    pub fn call(operator: impl Into<String>, argument: Expression) -> Self {
        Self::from_atom(Atom::Call {
            operator: operator.into(),
            argument: Box::new(argument),
        })
    }

    fn from_atom(atom: Atom) -> Self {
        Self {
            factors: BTreeMap::from([(atom, 1)]),
        }
    }

    pub fn is_one(&self) -> bool {
        self.factors.is_empty()
    }

    /// Atoms with their exponents in canonical order
    pub fn factors(&self) -> impl Iterator<Item = (&Atom, i64)> {
        self.factors.iter().map(|(atom, &exponent)| (atom, exponent))
    }

    /// Raise to an integer power, `(a**n * b**m)**k = a**(n*k) * b**(m*k)`
    pub fn pow(self, exponent: i64) -> Self {
        if exponent == 0 {
            return Self::one();
        }
        let factors = self
            .factors
            .into_iter()
            .map(|(atom, e)| (atom, e.saturating_mul(exponent)))
            .collect();
        Self { factors }
    }

    fn multiply_factor(&mut self, atom: Atom, exponent: i64) {
        match self.factors.entry(atom) {
            Entry::Vacant(entry) => {
                if exponent != 0 {
                    entry.insert(exponent);
                }
            }
            Entry::Occupied(mut entry) => {
                let sum = entry.get().saturating_add(exponent);
                if sum == 0 {
                    entry.remove();
                } else {
                    *entry.get_mut() = sum;
                }
            }
        }
    }
}

impl Mul for Expression {
    type Output = Self;

    fn mul(mut self, rhs: Self) -> Self {
        for (atom, exponent) in rhs.factors {
            self.multiply_factor(atom, exponent);
        }
        self
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Variable(index) => write!(f, "x_{index}"),
            Self::Call { operator, argument } => write!(f, "{operator}({argument})"),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_one() {
            return f.write_str("1");
        }
        for (i, (atom, exponent)) in self.factors().enumerate() {
            if i > 0 {
                f.write_str("*")?;
            }
            match exponent {
                1 => write!(f, "{atom}")?,
                e if e > 0 => write!(f, "{atom}**{e}")?,
                e => write!(f, "{atom}**({e})")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn x(i: usize) -> Expression {
        Expression::variable(i)
    }

    #[test]
    fn repeated_base_collapses_to_power() {
        assert_eq!((x(0) * x(0)).to_string(), "x_0**2");
    }

    #[test]
    fn product_is_commutative() {
        let sin = Expression::call("sin", x(1));
        let a = x(0) * sin.clone() * x(2).pow(-1);
        let b = x(2).pow(-1) * sin * x(0);
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "x_0*x_2**(-1)*sin(x_1)");
    }

    #[test]
    fn zero_exponent_factors_vanish() {
        let e = x(0).pow(2) * x(0).pow(-2);
        assert!(e.is_one());
        assert_eq!(e.to_string(), "1");
        assert_eq!(Expression::call("log", x(3)).pow(0), Expression::one());
    }

    #[test]
    fn nested_power_arithmetic() {
        assert_eq!((x(0).pow(2) * x(1)).pow(3).to_string(), "x_0**6*x_1**3");
    }

    #[test]
    fn variables_order_by_index_not_text() {
        assert_eq!((x(10) * x(2)).to_string(), "x_2*x_10");
    }

    #[test]
    fn call_power_keeps_parentheses() {
        let cos = Expression::call("cos", x(0).pow(2));
        assert_eq!((cos.clone() * cos).to_string(), "cos(x_0**2)**2");
    }

    #[test]
    fn call_arguments_are_canonical() {
        let a = Expression::call("exp", x(1) * x(0));
        let b = Expression::call("exp", x(0) * x(1));
        assert_eq!(a, b);
    }
}
