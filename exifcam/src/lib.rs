#![doc = include_str!("../README.md")]

use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::{Path, PathBuf};

pub use exifcam_common::byte_order::Endianness;
pub use exifcam_common::error::ErrorKind;
use exifcam_common::read::{ByteCursor, ReadError};
pub use exifcam_exif::{ExifResult, SubIfdPolicy, WalkOptions};
use exifcam_exif::IfdWalker;
pub use exifcam_jpeg::{AnchorMode, HeaderCheck, SegmentAnchor};

pub use exifcam_common as common;
pub use exifcam_exif as exif;
pub use exifcam_jpeg as jpeg;

/// Selects how strictly a file is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Options {
    pub anchor: AnchorMode,
    pub header: HeaderCheck,
    pub walk: WalkOptions,
}

impl Options {
    /// Searches the Exif segment, validates the TIFF header, and only follows
    /// the Exif IFD pointer tag
    pub fn strict() -> Self {
        Self {
            anchor: AnchorMode::Scan,
            header: HeaderCheck::Strict,
            walk: WalkOptions::strict(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to open '{}': {source}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Read: {0}")]
    Read(#[from] ReadError),
    #[error("JPEG: {0}")]
    Jpeg(#[from] exifcam_jpeg::Error),
    #[error("Exif: {0}")]
    Exif(#[from] exifcam_exif::error::Error),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Open { .. } => ErrorKind::Io,
            Self::Read(err) => err.kind(),
            Self::Jpeg(err) => err.kind(),
            Self::Exif(err) => err.kind(),
        }
    }
}

/// Camera make and model of the JPEG file at `path`
pub fn parse(path: impl AsRef<Path>) -> Result<ExifResult, Error> {
    parse_with(path, &Options::default())
}

pub fn parse_with(path: impl AsRef<Path>, options: &Options) -> Result<ExifResult, Error> {
    let path = path.as_ref();
    tracing::debug!("Parsing {path:?}");

    let file = File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;

    parse_reader(BufReader::new(file), options)
}

/// Same as [`parse_with`] for data that is already open
pub fn parse_reader<R: Read + Seek>(reader: R, options: &Options) -> Result<ExifResult, Error> {
    let mut cursor = ByteCursor::new(reader)?;

    let anchor = SegmentAnchor::locate(&mut cursor, options.anchor, options.header)?;

    let result = IfdWalker::new(
        &mut cursor,
        anchor.endianness,
        anchor.offset,
        options.walk,
    )
    .walk(anchor.first_ifd_offset)?;

    Ok(result)
}
