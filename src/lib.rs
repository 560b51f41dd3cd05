//! Fit-then-apply preprocessing operators.
//!
//! [`RobustScaler`] centers continuous columns on their median and scales them
//! by their interquartile range. [`Lottery`] remembers the distinct values of a
//! categorical feature and draws one of them uniformly at random.

pub mod config;
pub mod dataset;
pub mod error;
pub mod scalers;
pub mod stats;
pub mod strategies;
pub mod traits;

pub use config::ScalerConfig;
pub use dataset::{ColumnType, Dataset, Unlabeled};
pub use error::{PreprocessError, Result};
pub use scalers::RobustScaler;
pub use strategies::Lottery;
pub use traits::{Categorical, Transformer};
