mod climate_data;
mod date_key;
mod date_window;

pub use climate_data::*;
pub use date_key::DateKey;
pub use date_window::{resolve_window, window_start, WINDOW_DAYS};
