pub mod interval_service;
pub mod scheduling_backend;

pub use interval_service::*;
pub use scheduling_backend::*;
