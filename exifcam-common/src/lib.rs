#![doc = include_str!("../README.md")]

pub mod byte_order;
pub mod error;
pub mod math;
pub mod read;
pub mod tag;
pub mod utils;

pub mod prelude {
    pub use crate::byte_order::Endianness;
    pub use crate::error::ErrorKind;
    pub use crate::math::*;
    pub use crate::read::{ByteCursor, ReadError, Width};
    pub use crate::tag::Tag;
}
