use crate::dedup::{Candidate, dedup};
use crate::evaluator::*;
use crate::features::{Constant, Monomial, Product, UnaryOp};
use crate::operators::{Operator, OperatorTrait};

use itertools::{Itertools, iproduct};

/// Staged candidate generation
///
/// Every stage is deduplicated on its own to keep the input of later stages small, and the
/// union of all stages is deduplicated once more because a later stage may reproduce an earlier
/// feature in a different form, e.g. `x_0**2*x_0**-1` and `x_0`.
pub(crate) struct GenerationPipeline<'a, T>
where
    T: Float,
{
    pub exponents: &'a [i32],
    pub operators: &'a [Operator<T>],
    pub include_constant: bool,
}

impl<T> GenerationPipeline<'_, T>
where
    T: Float,
{
    /// Retained candidates in emission order: constant, monomials, unary operators, products
    pub fn run(&self, x: TableView<'_, T>) -> Result<Vec<Candidate<T>>, SymbolicFeaturesError> {
        let constant = self.constant_pool(x.view());
        let simple = self.simple_pool(x.view())?;
        let operator = self.operator_pool(&simple);
        let product = self.product_pool(&operator, &simple);

        let all = constant
            .into_iter()
            .chain(simple)
            .chain(operator)
            .chain(product);
        Ok(dedup_stage("final", all))
    }

    fn constant_pool(&self, x: TableView<'_, T>) -> Vec<Candidate<T>> {
        if self.include_constant {
            vec![Candidate::evaluate(Constant::new().into(), x)]
        } else {
            vec![]
        }
    }

    fn simple_pool(&self, x: TableView<'_, T>) -> Result<Vec<Candidate<T>>, SymbolicFeaturesError> {
        let candidates = iproduct!(self.exponents, 0..x.ncols())
            .map(|(&exponent, index)| -> Result<_, SymbolicFeaturesError> {
                let monomial = Monomial::new(exponent, index)?;
                Ok(Candidate::evaluate(monomial.into(), x.view()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(dedup_stage("monomials", candidates))
    }

    // Derived candidates reuse the columns of their operands instead of evaluating the table
    // again, every feature is a pure function of the table so the values are the same.

    fn operator_pool(&self, simple: &[Candidate<T>]) -> Vec<Candidate<T>> {
        let candidates = iproduct!(simple, self.operators).map(|(base, operator)| {
            let values = operator.transform(base.values().clone());
            let feature = UnaryOp::new(base.feature().clone(), operator.clone());
            Candidate::new(feature.into(), values)
        });
        dedup_stage("unary operators", candidates)
    }

    fn product_pool(
        &self,
        operator: &[Candidate<T>],
        simple: &[Candidate<T>],
    ) -> Vec<Candidate<T>> {
        let mixed = iproduct!(operator, simple);
        // Powers of the same variable are monomials already, pair different variables only
        let pairs = simple
            .iter()
            .tuple_combinations()
            .filter(|(a, b)| a.feature().variables().is_disjoint(&b.feature().variables()));
        let candidates = mixed.chain(pairs).map(|(left, right)| {
            let values = left.values() * right.values();
            let feature = Product::new(left.feature().clone(), right.feature().clone());
            Candidate::new(feature.into(), values)
        });
        dedup_stage("products", candidates)
    }
}

fn dedup_stage<T: Float>(
    stage: &str,
    candidates: impl IntoIterator<Item = Candidate<T>>,
) -> Vec<Candidate<T>> {
    let mut total = 0_usize;
    let retained = dedup(candidates.into_iter().inspect(|_| total += 1));
    tracing::debug!(
        stage,
        candidates = total,
        retained = retained.len(),
        "generation stage finished"
    );
    retained
}
