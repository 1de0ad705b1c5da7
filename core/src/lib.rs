#![no_std]

extern crate alloc;

pub use error::*;
pub use field::*;
pub use generator::*;
pub use request::*;
pub use state::*;
pub use types::*;

mod error;
mod field;
mod generator;
mod request;
mod state;
mod types;
