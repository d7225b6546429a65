use crate::float_trait::Float;

use ndarray::{ArrayBase, Data, Dimension};
use serde::{Deserialize, Serialize};
use std::fmt;
use xxhash_rust::xxh3::xxh3_128;

/// 128-bit XXH3 hash of numeric content
///
/// Sensitive to order and to every bit of every value, so `0.0` and `-0.0` differ.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Fingerprint(u128);

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", self.0)
    }
}

fn extend_bytes<T, S, D>(bytes: &mut Vec<u8>, values: &ArrayBase<S, D>)
where
    T: Float,
    S: Data<Elem = T>,
    D: Dimension,
{
    // Logical order, so the memory layout of the array does not matter
    for &x in values.iter() {
        bytes.extend_from_slice(&x.fingerprint_bits().to_le_bytes());
    }
}

/// Fingerprint of an evaluated feature column
pub fn fingerprint<T, S, D>(values: &ArrayBase<S, D>) -> Fingerprint
where
    T: Float,
    S: Data<Elem = T>,
    D: Dimension,
{
    let mut bytes = Vec::with_capacity(values.len() * size_of::<u64>());
    extend_bytes(&mut bytes, values);
    Fingerprint(xxh3_128(&bytes))
}

/// Fingerprint of a table, shape included
///
/// Tables with equal values laid out in a different shape must not match each other, which a
/// fingerprint of the flattened values alone cannot tell apart.
pub fn table_fingerprint<T, S, D>(table: &ArrayBase<S, D>) -> Fingerprint
where
    T: Float,
    S: Data<Elem = T>,
    D: Dimension,
{
    let shape = table.shape();
    let mut bytes = Vec::with_capacity((shape.len() + table.len()) * size_of::<u64>());
    for &n in shape {
        bytes.extend_from_slice(&(n as u64).to_le_bytes());
    }
    extend_bytes(&mut bytes, table);
    Fingerprint(xxh3_128(&bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    use ndarray::{Array1, Array2, array};

    #[test]
    fn equal_values_equal_fingerprints() {
        let a = array![1.0_f64, 2.0, 3.0];
        let b = Array1::from(vec![1.0_f64, 2.0, 3.0]);
        assert_eq!(fingerprint(&a), fingerprint(&b));
        assert_eq!(fingerprint(&a), fingerprint(&a.view()));
    }

    #[test]
    fn order_sensitive() {
        assert_ne!(
            fingerprint(&array![1.0_f64, 2.0, 3.0]),
            fingerprint(&array![3.0_f64, 2.0, 1.0])
        );
    }

    #[test]
    fn precision_sensitive() {
        let a = array![1.0_f64, 2.0, 3.0];
        let b = array![1.0_f64, 2.0, 3.0 + f64::EPSILON * 4.0];
        assert_ne!(fingerprint(&a), fingerprint(&b));
        assert_ne!(fingerprint(&array![0.0_f64]), fingerprint(&array![-0.0_f64]));
    }

    #[test]
    fn layout_independent() {
        let c: Array2<f64> = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
        let f = c.t().as_standard_layout().reversed_axes().into_owned();
        assert_eq!(c, f);
        assert_ne!(c.is_standard_layout(), f.is_standard_layout());
        assert_eq!(table_fingerprint(&c), table_fingerprint(&f));
    }

    #[test]
    fn shape_sensitive() {
        let a: Array2<f64> = array![[1.0, 2.0, 3.0, 4.0]];
        let b = a.clone().into_shape_with_order((2, 2)).unwrap();
        assert_eq!(fingerprint(&a), fingerprint(&b));
        assert_ne!(table_fingerprint(&a), table_fingerprint(&b));
    }

    #[test]
    fn display_is_fixed_width_hex() {
        let s = fingerprint(&array![0.5_f32, 2.0]).to_string();
        assert_eq!(s.len(), 32);
        assert!(s.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
