pub mod cli;
pub mod config;
pub mod error;
pub mod invoker;

pub use error::{Error, Result};
