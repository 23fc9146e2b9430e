mod settings;
mod validation;

pub use settings::{ApplicationSettings, Settings, StoreSettings};
pub use validation::validate_store_settings;
