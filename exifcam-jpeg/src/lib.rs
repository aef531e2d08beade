#![doc = include_str!("../README.md")]

mod anchor;
mod error;

pub use anchor::*;
pub use error::*;

pub const EXIF_IDENTIFIER_STRING: &[u8] = b"Exif\0\0";

pub const MARKER_START: u8 = 0xFF;

exifcam_common::utils::convertible_enum!(
    #[repr(u8)]
    #[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
    pub enum Marker {
        /// Temporary private use, no length field
        TEM = 0x01,
        SOF0 = 0xC0,
        SOF1 = 0xC1,
        SOF2 = 0xC2,
        /// Define Huffman table
        DHT = 0xC4,
        /// Start of image
        SOI = 0xD8,
        /// End of image
        EOI = 0xD9,
        /// Start of scan
        SOS = 0xDA,
        DQT = 0xDB,
        APP0 = 0xE0,
        /// Exif, XMP
        APP1 = 0xE1,
        /// ICC color profile
        APP2 = 0xE2,
        /// Comment
        COM = 0xFE,
    }
);

impl Marker {
    /// Markers that are not followed by a length field
    pub fn is_standalone(self) -> bool {
        matches!(self, Self::TEM | Self::SOI | Self::Unknown(0xD0..=0xD7))
    }

    /// Segments after which no more metadata segments are expected
    pub fn ends_header(self) -> bool {
        matches!(self, Self::SOS | Self::EOI)
    }
}
