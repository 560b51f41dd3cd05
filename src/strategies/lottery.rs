use std::collections::HashSet;
use std::hash::Hash;

use rand::seq::SliceRandom;
use rand::{Rng, RngCore};
use tracing::debug;

use crate::error::{PreprocessError, Result};
use crate::traits::Categorical;

/// Holds a lottery in which every category seen during fitting has the same
/// chance of being drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct Lottery<T> {
    /// Distinct values in order of first occurrence.
    categories: Vec<T>,
}

impl<T> Default for Lottery<T> {
    fn default() -> Self {
        Self {
            categories: Vec::new(),
        }
    }
}

impl<T: Eq + Hash + Clone> Lottery<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn categories(&self) -> &[T] {
        &self.categories
    }

    pub fn is_fitted(&self) -> bool {
        !self.categories.is_empty()
    }

    /// Stores every distinct value. Needs at least one value.
    pub fn fit(&mut self, values: &[T]) -> Result<()> {
        if values.is_empty() {
            return Err(PreprocessError::InvalidInput(
                "lottery needs to be fit with at least one value".to_string(),
            ));
        }

        let mut seen = HashSet::with_capacity(values.len());
        let categories = values
            .iter()
            .filter(|value| seen.insert(*value))
            .cloned()
            .collect::<Vec<T>>();

        debug!(
            values = values.len(),
            categories = categories.len(),
            "fitted lottery"
        );

        self.categories = categories;

        Ok(())
    }

    /// Draws one stored category uniformly at random.
    pub fn guess<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<T> {
        self.categories
            .choose(rng)
            .cloned()
            .ok_or(PreprocessError::NotFitted("Lottery"))
    }
}

impl<T: Eq + Hash + Clone> Categorical for Lottery<T> {
    type Value = T;

    fn fit(&mut self, values: &[T]) -> Result<()> {
        Lottery::fit(self, values)
    }

    fn guess(&self, rng: &mut dyn RngCore) -> Result<T> {
        Lottery::guess(self, rng)
    }
}
