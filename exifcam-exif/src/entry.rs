use std::io::{Read, Seek};

use exifcam_common::prelude::*;

use crate::error::Result;

/// Size of one IFD entry in bytes
pub const ENTRY_SIZE: u64 = 12;

/// One entry of an image file directory
///
/// The two byte type field between tag and count is skipped when reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IfdEntry {
    pub tag: Tag,
    pub count: u32,
    /// Offset relative to the TIFF header, or the value itself for small
    /// values
    pub value_offset: u32,
}

impl IfdEntry {
    /// Read a single entry at the current position of `cursor`
    pub fn read<R: Read + Seek>(cursor: &mut ByteCursor<R>, order: Endianness) -> Result<Self> {
        let tag = Tag(cursor.read_u16(order)?);
        cursor.seek_relative(2)?;
        let count = cursor.read_uint(Width::Four, order)?;
        let value_offset = cursor.read_uint(Width::Four, order)?;

        Ok(Self {
            tag,
            count,
            value_offset,
        })
    }
}
