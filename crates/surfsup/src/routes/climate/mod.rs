mod error;
pub mod precipitation;
pub mod stations;
pub mod temperature;
pub mod tobs;

pub use error::{ApiError, ErrorBody};
pub use precipitation::precipitation;
pub use stations::stations;
pub use temperature::{temperature_between, temperature_from};
pub use tobs::tobs;
