use exifcam_common::error::ErrorKind;
use exifcam_common::math::MathError;
use exifcam_common::read::ReadError;

use crate::Marker;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Read: {0}")]
    Read(#[from] ReadError),
    #[error("Math: {0}")]
    Math(#[from] MathError),
    #[error("Data does not start with a JPEG SOI marker: {0:x?}")]
    NotJpeg([u8; 2]),
    #[error("Expected segment marker, found byte 0x{0:X}")]
    MarkerExpected(u8),
    #[error("Segment {0:?} has invalid length {1}")]
    SegmentLengthInvalid(Marker, u16),
    #[error("No Exif APP1 segment before image data")]
    NoExifSegment,
    #[error("Unknown byte order mark {0:x?}")]
    UnknownByteOrder([u8; 2]),
    #[error("TIFF magic number is {0} instead of 42")]
    MagicBytesWrong(u16),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Read(err) => err.kind(),
            _ => ErrorKind::MalformedStructure,
        }
    }
}
