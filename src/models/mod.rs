// Re-export all models organized by domain
pub mod errors;
pub mod intervals;
pub mod request;
pub mod response;
pub mod user;

pub use errors::*;
pub use intervals::*;
pub use request::*;
pub use response::*;
pub use user::*;
