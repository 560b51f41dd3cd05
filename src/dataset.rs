use serde::{Deserialize, Serialize};

use crate::error::{PreprocessError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnType {
    Continuous,
    Categorical,
}

/// A table of samples that can be walked column by column.
///
/// Column types are supplied by the implementor; nothing here infers them.
pub trait Dataset {
    fn num_samples(&self) -> usize;

    fn num_columns(&self) -> usize;

    fn column_type(&self, column: usize) -> ColumnType;

    /// Yields every column exactly once, in index order, with its values.
    fn rotate(&self) -> Box<dyn Iterator<Item = (usize, Vec<f64>)> + '_>;
}

/// In-memory row-major dataset without labels.
///
/// Categorical columns carry their category codes as floats.
#[derive(Debug, Clone, PartialEq)]
pub struct Unlabeled {
    samples: Vec<Vec<f64>>,
    types: Vec<ColumnType>,
}

impl Unlabeled {
    pub fn new(samples: Vec<Vec<f64>>, types: Vec<ColumnType>) -> Result<Self> {
        if let Some((row, sample)) = samples
            .iter()
            .enumerate()
            .find(|(_, sample)| sample.len() != types.len())
        {
            return Err(PreprocessError::DimensionMismatch {
                row,
                expected: types.len(),
                actual: sample.len(),
            });
        }

        Ok(Self { samples, types })
    }

    pub fn samples(&self) -> &[Vec<f64>] {
        &self.samples
    }

    pub fn samples_mut(&mut self) -> &mut [Vec<f64>] {
        &mut self.samples
    }

    pub fn types(&self) -> &[ColumnType] {
        &self.types
    }

    pub fn into_samples(self) -> Vec<Vec<f64>> {
        self.samples
    }
}

impl Dataset for Unlabeled {
    fn num_samples(&self) -> usize {
        self.samples.len()
    }

    fn num_columns(&self) -> usize {
        self.types.len()
    }

    /// Panics if `column` is out of range.
    fn column_type(&self, column: usize) -> ColumnType {
        self.types[column]
    }

    fn rotate(&self) -> Box<dyn Iterator<Item = (usize, Vec<f64>)> + '_> {
        Box::new((0..self.types.len()).map(move |column| {
            let values = self
                .samples
                .iter()
                .map(|sample| sample[column])
                .collect::<Vec<f64>>();
            (column, values)
        }))
    }
}
