pub mod core;
pub mod models;
pub mod services;
pub mod ui;

pub use crate::core::errors::{Error, Result};
pub use crate::core::options::ListOptions;
