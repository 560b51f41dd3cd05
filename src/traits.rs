use rand::RngCore;

use crate::dataset::Dataset;
use crate::error::Result;

/// Learns parameters from a dataset, then rewrites sample rows in place.
pub trait Transformer {
    fn fit<D: Dataset + ?Sized>(&mut self, dataset: &D);

    /// Fails if called before [`Transformer::fit`]. Rows are left untouched on error.
    fn transform(&self, samples: &mut [Vec<f64>]) -> Result<()>;
}

/// Learns from a set of categorical values, then produces guesses from them.
pub trait Categorical {
    type Value;

    fn fit(&mut self, values: &[Self::Value]) -> Result<()>;

    fn guess(&self, rng: &mut dyn RngCore) -> Result<Self::Value>;
}
