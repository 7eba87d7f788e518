// HTTP routes
pub mod flows;
pub mod health;

pub use flows::*;
pub use health::*;
