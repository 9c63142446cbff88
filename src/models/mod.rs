pub mod chart_data;
pub mod health;
pub mod info;

pub use chart_data::*;
pub use health::*;
pub use info::*;
