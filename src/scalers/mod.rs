mod robust_scaler;

pub use robust_scaler::RobustScaler;
