use ndarray::NdFloat;
use schemars::JsonSchema;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Floating point scalar the features are evaluated on, implemented for [f32] and [f64]
pub trait Float:
    NdFloat + num_traits::FloatConst + Default + Serialize + DeserializeOwned + JsonSchema
{
    /// Bit pattern of the value widened to 64 bits, used for content fingerprints
    fn fingerprint_bits(self) -> u64;
}

impl Float for f32 {
    #[inline]
    fn fingerprint_bits(self) -> u64 {
        u64::from(self.to_bits())
    }
}

impl Float for f64 {
    #[inline]
    fn fingerprint_bits(self) -> u64 {
        self.to_bits()
    }
}
