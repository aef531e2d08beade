#![doc = include_str!("../README.md")]

mod entry;
pub mod error;
mod options;
mod resolver;
mod result;
mod walker;

pub use entry::*;
pub use options::*;
pub use resolver::*;
pub use result::*;
pub use walker::*;
