pub mod api;
pub mod model;
pub mod utils;

pub use utils::*;
