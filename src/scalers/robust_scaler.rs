use std::collections::BTreeMap;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, trace, warn};

use crate::config::ScalerConfig;
use crate::dataset::{ColumnType, Dataset};
use crate::error::{PreprocessError, Result};
use crate::stats::Quartiles;
use crate::traits::Transformer;

/// Centers continuous columns on their median and scales them by their
/// interquartile range.
///
/// Columns that were not continuous at fit time are never touched. A column
/// whose fitted IQR is exactly zero scales every value to the constant `1.0`
/// instead of dividing by zero.
#[derive(Debug, Clone, PartialEq)]
pub struct RobustScaler {
    center: bool,
    scale: bool,
    params: Option<FittedParams>,
}

/// Both maps are built by the same fit pass, so their key sets are equal.
#[derive(Debug, Clone, PartialEq)]
struct FittedParams {
    medians: BTreeMap<usize, f64>,
    iqrs: BTreeMap<usize, f64>,
}

impl Default for RobustScaler {
    fn default() -> Self {
        Self::new(true, true)
    }
}

impl RobustScaler {
    pub fn new(center: bool, scale: bool) -> Self {
        RobustScaler {
            center,
            scale,
            params: None,
        }
    }

    pub fn from_config(config: &ScalerConfig) -> Self {
        Self::new(config.center, config.scale)
    }

    pub fn center(&self) -> bool {
        self.center
    }

    pub fn scale(&self) -> bool {
        self.scale
    }

    pub fn is_fitted(&self) -> bool {
        self.params.is_some()
    }

    /// Fitted medians keyed by column index, `None` before fitting.
    pub fn medians(&self) -> Option<&BTreeMap<usize, f64>> {
        self.params.as_ref().map(|params| &params.medians)
    }

    /// Fitted interquartile ranges keyed by column index, `None` before fitting.
    pub fn iqrs(&self) -> Option<&BTreeMap<usize, f64>> {
        self.params.as_ref().map(|params| &params.iqrs)
    }

    /// Computes the median and IQR of every continuous column.
    ///
    /// Replaces anything learned by a previous fit. Continuous columns
    /// without values get no entry.
    pub fn fit<D: Dataset + ?Sized>(&mut self, dataset: &D) {
        let mut medians = BTreeMap::new();
        let mut iqrs = BTreeMap::new();

        for (column, values) in dataset.rotate() {
            if dataset.column_type(column) != ColumnType::Continuous {
                continue;
            }

            let quartiles = match Quartiles::from_values(&values) {
                Some(q) => q,
                None => {
                    trace!(column, "no values in continuous column, skipping");
                    continue;
                }
            };

            let iqr = quartiles.iqr();
            if iqr == 0.0 {
                warn!(column, "interquartile range is zero, scaled values will be 1.0");
            }
            trace!(column, median = quartiles.median(), iqr, "fitted column");

            medians.insert(column, quartiles.median());
            iqrs.insert(column, iqr);
        }

        debug!(
            columns = medians.len(),
            samples = dataset.num_samples(),
            "fitted robust scaler"
        );

        self.params = Some(FittedParams { medians, iqrs });
    }

    /// Centers and scales the fitted columns of every row in place.
    ///
    /// All rows are checked before any of them is modified.
    pub fn transform(&self, samples: &mut [Vec<f64>]) -> Result<()> {
        let params = self
            .params
            .as_ref()
            .ok_or(PreprocessError::NotFitted("RobustScaler"))?;

        if let Some(&last) = params.medians.keys().next_back() {
            if let Some((row, sample)) = samples
                .iter()
                .enumerate()
                .find(|(_, sample)| sample.len() <= last)
            {
                return Err(PreprocessError::DimensionMismatch {
                    row,
                    expected: last + 1,
                    actual: sample.len(),
                });
            }
        }

        #[cfg(feature = "parallel")]
        samples
            .par_iter_mut()
            .for_each(|sample| self.transform_sample(params, sample));

        #[cfg(not(feature = "parallel"))]
        samples
            .iter_mut()
            .for_each(|sample| self.transform_sample(params, sample));

        Ok(())
    }

    pub fn fit_transform<D: Dataset + ?Sized>(
        &mut self,
        dataset: &D,
        samples: &mut [Vec<f64>],
    ) -> Result<()> {
        self.fit(dataset);
        self.transform(samples)
    }

    /// Drops the fitted parameters.
    pub fn reset(&mut self) {
        self.params = None;
    }

    fn transform_sample(&self, params: &FittedParams, sample: &mut [f64]) {
        for (&column, &median) in &params.medians {
            let iqr = params.iqrs.get(&column).copied().unwrap_or(0.0);
            sample[column] = self.transform_value(sample[column], median, iqr);
        }
    }

    fn transform_value(&self, value: f64, median: f64, iqr: f64) -> f64 {
        let mut feature = value;

        if self.center {
            feature -= median;
        }

        if self.scale {
            feature = if iqr != 0.0 { feature / iqr } else { 1.0 };
        }

        feature
    }
}

impl Transformer for RobustScaler {
    fn fit<D: Dataset + ?Sized>(&mut self, dataset: &D) {
        RobustScaler::fit(self, dataset)
    }

    fn transform(&self, samples: &mut [Vec<f64>]) -> Result<()> {
        RobustScaler::transform(self, samples)
    }
}
