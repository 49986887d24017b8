// Module declarations
pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod models;


// Re-export commonly used items
pub use client::{Linear, LinearClient};
pub use config::Config;
pub use error::{ClientError, LinearError, LinearResult};
pub use models::*;
