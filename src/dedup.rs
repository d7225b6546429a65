use crate::evaluator::*;
use crate::feature::Feature;
use crate::fingerprint::{Fingerprint, fingerprint};

use ndarray::{ArrayBase, Data, Dimension};
use std::collections::HashSet;
use std::sync::OnceLock;

/// Whether every value is finite, i.e. neither NaN nor infinite
pub fn is_valid<T, S, D>(values: &ArrayBase<S, D>) -> bool
where
    T: Float,
    S: Data<Elem = T>,
    D: Dimension,
{
    values.iter().all(|x| x.is_finite())
}

/// Feature together with its column evaluated on the training table
///
/// The content fingerprint of the column is computed at most once per candidate, however many
/// deduplication passes the candidate goes through.
#[derive(Clone, Debug)]
pub struct Candidate<T>
where
    T: Float,
{
    feature: Feature<T>,
    values: Column<T>,
    fingerprint: OnceLock<Fingerprint>,
}

impl<T> Candidate<T>
where
    T: Float,
{
    pub fn new(feature: Feature<T>, values: Column<T>) -> Self {
        Self {
            feature,
            values,
            fingerprint: OnceLock::new(),
        }
    }

    pub fn evaluate(feature: Feature<T>, x: TableView<'_, T>) -> Self {
        let values = feature.eval(x);
        Self::new(feature, values)
    }

    pub fn feature(&self) -> &Feature<T> {
        &self.feature
    }

    pub fn values(&self) -> &Column<T> {
        &self.values
    }

    pub fn canonical_name(&self) -> &str {
        self.feature.canonical_name()
    }

    pub fn fingerprint(&self) -> Fingerprint {
        *self.fingerprint.get_or_init(|| fingerprint(&self.values))
    }

    pub fn is_fingerprint_computed(&self) -> bool {
        self.fingerprint.get().is_some()
    }

    pub fn is_valid(&self) -> bool {
        is_valid(&self.values)
    }

    pub fn into_parts(self) -> (Feature<T>, Column<T>) {
        (self.feature, self.values)
    }
}

/// Keeps the first candidate of every equivalence class
///
/// Two candidates are equivalent when they share either the canonical name or the content
/// fingerprint. Candidates with non-finite values are rejected without being recorded.
#[derive(Clone, Debug, Default)]
pub struct Deduplicator {
    names: HashSet<String>,
    fingerprints: HashSet<Fingerprint>,
}

impl Deduplicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true and records both keys if the candidate is retained
    pub fn admit<T: Float>(&mut self, candidate: &Candidate<T>) -> bool {
        if !candidate.is_valid() {
            return false;
        }
        // Name first, so a known name never pays for hashing the column
        let name = candidate.canonical_name();
        if self.names.contains(name) {
            return false;
        }
        if !self.fingerprints.insert(candidate.fingerprint()) {
            return false;
        }
        self.names.insert(name.to_owned());
        true
    }

    /// Number of retained candidates so far
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Valid candidates with unseen canonical names and fingerprints, in input order
pub fn dedup<T: Float>(candidates: impl IntoIterator<Item = Candidate<T>>) -> Vec<Candidate<T>> {
    let mut deduplicator = Deduplicator::new();
    candidates
        .into_iter()
        .filter(|candidate| deduplicator.admit(candidate))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::{Constant, Monomial, Product};

    use ndarray::{Array1, array};

    fn candidate(feature: impl Into<Feature<f64>>, values: Column<f64>) -> Candidate<f64> {
        Candidate::new(feature.into(), values)
    }

    fn names(candidates: &[Candidate<f64>]) -> Vec<&str> {
        candidates.iter().map(Candidate::canonical_name).collect()
    }

    #[test]
    fn validity() {
        assert!(is_valid(&array![1.0, -2.0, 0.0]));
        assert!(is_valid(&Array1::<f32>::zeros(0)));
        assert!(!is_valid(&array![1.0, f64::NAN]));
        assert!(!is_valid(&array![f64::INFINITY, 1.0]));
        assert!(!is_valid(&array![[1.0, 2.0], [f64::NEG_INFINITY, 0.0]]));
    }

    #[test]
    fn invalid_candidates_are_dropped_silently() {
        let retained = dedup([
            candidate(Monomial::new(-1, 0).unwrap(), array![f64::INFINITY, 1.0]),
            candidate(Monomial::new(1, 0).unwrap(), array![0.0, 1.0]),
        ]);
        assert_eq!(names(&retained), ["x_0"]);
    }

    #[test]
    fn equal_canonical_names() {
        let retained = dedup([
            candidate(Monomial::new(2, 0).unwrap(), array![1.0, 4.0]),
            candidate(
                Product::<f64>::new(Monomial::new(1, 0).unwrap(), Monomial::new(1, 0).unwrap()),
                // different values on purpose, the name alone decides
                array![1.0, 5.0],
            ),
        ]);
        assert_eq!(names(&retained), ["x_0**2"]);
    }

    #[test]
    fn equal_fingerprints() {
        let retained = dedup([
            candidate(Monomial::new(1, 0).unwrap(), array![1.0, 2.0, 3.0]),
            candidate(Monomial::new(1, 1).unwrap(), array![1.0, 2.0, 3.0]),
            candidate(Monomial::new(1, 2).unwrap(), array![1.0, 2.0, 4.0]),
        ]);
        assert_eq!(names(&retained), ["x_0", "x_2"]);
    }

    #[test]
    fn first_occurrence_wins() {
        let retained = dedup([
            candidate(Constant::new(), array![1.0, 1.0]),
            candidate(Monomial::new(1, 0).unwrap(), array![1.0, 1.0]),
        ]);
        assert_eq!(names(&retained), ["1"]);
    }

    #[test]
    fn rejected_keys_are_not_recorded() {
        let mut deduplicator = Deduplicator::new();
        assert!(deduplicator.admit(&candidate(Monomial::new(1, 0).unwrap(), array![1.0, 2.0])));
        // fingerprint collides, so the new name must stay unseen
        assert!(!deduplicator.admit(&candidate(Monomial::new(1, 1).unwrap(), array![1.0, 2.0])));
        assert!(deduplicator.admit(&candidate(Monomial::new(1, 1).unwrap(), array![2.0, 1.0])));
        assert_eq!(deduplicator.len(), 2);
    }

    #[test]
    fn known_name_skips_fingerprint() {
        let mut deduplicator = Deduplicator::new();
        let first = candidate(Monomial::new(1, 0).unwrap(), array![1.0, 2.0]);
        let second = candidate(Monomial::new(1, 0).unwrap(), array![3.0, 4.0]);
        assert!(deduplicator.admit(&first));
        assert!(first.is_fingerprint_computed());
        assert!(!deduplicator.admit(&second));
        assert!(!second.is_fingerprint_computed());
    }

    #[test]
    fn fingerprint_is_memoized() {
        let c = candidate(Monomial::new(1, 0).unwrap(), array![1.0, 2.0]);
        assert!(!c.is_fingerprint_computed());
        let fp = c.fingerprint();
        assert!(c.is_fingerprint_computed());
        assert_eq!(fp, c.fingerprint());
        assert_eq!(fp, fingerprint(c.values()));
    }
}
