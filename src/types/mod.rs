#![allow(dead_code)]

mod error;
mod package;

pub use error::GenerateError;
pub use package::*;
