pub mod frequency;
pub mod model;
pub mod recover;

pub use frequency::{approximation_index, FrequencyDistribution};
pub use model::FrequencyModel;
pub use recover::recover_shift;
