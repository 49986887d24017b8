pub mod issues;
pub mod linear_client;

pub use issues::Linear;
pub use linear_client::LinearClient;
