//! Application constants and configuration

pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default location of the serialized model, relative to the working directory.
pub const DEFAULT_MODEL_PATH: &str = "model_dumps/model.json";
/// Default location of the preprocessed test table.
pub const DEFAULT_DATA_PATH: &str = "data/preprocessed_data.csv";

/// Identifier columns stripped from the test table before prediction.
pub const DROPPED_COLUMNS: &[&str] = &["Product_ID"];

/// Occupation codes are one-hot encoded over this many buckets.
pub const OCCUPATION_BUCKETS: usize = 20;
/// Product-category codes are one-hot encoded over this many buckets.
pub const CATEGORY_BUCKETS: usize = 21;
/// Scalar features preceding the one-hot blocks: gender, age, city, stay, marital.
pub const SCALAR_FEATURES: usize = 5;
/// Feature vector length the custom-example form produces.
pub const FEATURE_LEN: usize = SCALAR_FEATURES + OCCUPATION_BUCKETS + CATEGORY_BUCKETS;

/// Age at and above which the encoded age flag flips to 0.
pub const AGE_THRESHOLD: u32 = 55;

/// Held-out RMSE shown on the metrics page.
/// TODO: compute this from a labeled evaluation split once one ships with the data export.
pub const RMSE_PLACEHOLDER: f64 = 3006.55;

/// Number of rows shown by the sample-predictions query.
pub const SAMPLE_ROWS: usize = 5;
