use std::io::{Read, Seek};

use exifcam_common::prelude::*;

use crate::{Error, Marker, EXIF_IDENTIFIER_STRING, MARKER_START};

/// Position of the TIFF header when the Exif APP1 segment directly follows
/// the SOI marker
///
/// SOI (2) + APP1 marker (2) + segment length (2) + `Exif\0\0` (6)
pub const APP1_TIFF_OFFSET: u64 = 12;

/// TIFF magic number following the byte order mark
pub const TIFF_MAGIC: u16 = 42;

/// How the start of the TIFF header is found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnchorMode {
    /// Assume the header at [`APP1_TIFF_OFFSET`]
    #[default]
    Fixed,
    /// Walk the JPEG segments and use the first Exif APP1 segment
    Scan,
}

/// How much of the TIFF header is validated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeaderCheck {
    /// `II` means little endian, anything else big endian, magic number is
    /// not read
    #[default]
    Lenient,
    /// Requires `II` or `MM` and the magic number 42
    Strict,
}

/// Start of the TIFF structure inside the file
///
/// All offsets stored in image file directories are relative to `offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentAnchor {
    pub endianness: Endianness,
    /// Absolute position of the byte order mark
    pub offset: u64,
    /// Position of the zeroth IFD, relative to `offset`
    pub first_ifd_offset: u32,
}

impl SegmentAnchor {
    pub fn locate<R: Read + Seek>(
        cursor: &mut ByteCursor<R>,
        mode: AnchorMode,
        check: HeaderCheck,
    ) -> Result<Self, Error> {
        let offset = match mode {
            AnchorMode::Fixed => APP1_TIFF_OFFSET,
            AnchorMode::Scan => Self::find_tiff_header(cursor)?,
        };

        Self::read_header(cursor, offset, check)
    }

    /// Reads byte order and zeroth IFD offset of the TIFF header at `offset`
    pub fn read_header<R: Read + Seek>(
        cursor: &mut ByteCursor<R>,
        offset: u64,
        check: HeaderCheck,
    ) -> Result<Self, Error> {
        cursor.seek_absolute(offset)?;
        let mark = cursor.read_array::<2>()?;

        let endianness = match check {
            HeaderCheck::Lenient => Endianness::from_order_mark(mark),
            HeaderCheck::Strict => {
                let endianness =
                    Endianness::from_order_mark_strict(mark).ok_or(Error::UnknownByteOrder(mark))?;
                let magic = cursor.read_u16(endianness)?;
                if magic != TIFF_MAGIC {
                    return Err(Error::MagicBytesWrong(magic));
                }
                endianness
            }
        };

        cursor.seek_absolute(offset.safe_add(4)?)?;
        let first_ifd_offset = cursor.read_u32(endianness)?;

        tracing::debug!(
            "TIFF header at byte {offset}: {endianness} endian, zeroth IFD at {first_ifd_offset}"
        );

        Ok(Self {
            endianness,
            offset,
            first_ifd_offset,
        })
    }

    /// Absolute position of an offset stored inside the TIFF structure
    pub fn absolute(&self, offset: u32) -> Result<u64, MathError> {
        self.offset.safe_add(u64::from(offset))
    }

    /// Returns the position of the TIFF header inside the first Exif APP1
    /// segment
    fn find_tiff_header<R: Read + Seek>(cursor: &mut ByteCursor<R>) -> Result<u64, Error> {
        cursor.seek_absolute(0)?;

        let soi = cursor.read_array::<2>()?;
        if soi != [MARKER_START, Marker::SOI.into()] {
            return Err(Error::NotJpeg(soi));
        }

        loop {
            let [start] = cursor.read_array::<1>()?;
            if start != MARKER_START {
                return Err(Error::MarkerExpected(start));
            }

            // Markers may be preceded by any number of fill bytes
            let mut marker_byte = start;
            while marker_byte == MARKER_START {
                [marker_byte] = cursor.read_array::<1>()?;
            }
            let marker = Marker::from(marker_byte);

            if marker.ends_header() {
                return Err(Error::NoExifSegment);
            }
            if marker.is_standalone() {
                continue;
            }

            let length_pos = cursor.position();
            let len = cursor.read_u16(Endianness::Big)?;
            if len < 2 {
                return Err(Error::SegmentLengthInvalid(marker, len));
            }
            tracing::debug!("Segment {marker:?} at byte {length_pos} with length {len}");

            let data_len = u64::from(len).safe_sub(2)?;
            if marker == Marker::APP1 && data_len >= EXIF_IDENTIFIER_STRING.len().u64()? {
                let identifier = cursor.read_array::<6>()?;
                if identifier.as_slice() == EXIF_IDENTIFIER_STRING {
                    return Ok(cursor.position());
                }
                tracing::debug!("APP1 segment without Exif identifier");
            }

            cursor.seek_absolute(length_pos.safe_add(u64::from(len))?)?;
        }
    }
}
