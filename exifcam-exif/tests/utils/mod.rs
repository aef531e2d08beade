#![allow(dead_code)]

use std::io::Cursor;

pub use exifcam_common::prelude::*;
pub use exifcam_exif::error::Error;
pub use exifcam_exif::*;

pub const ASCII: u16 = 2;
pub const LONG: u16 = 4;

/// Assembles a TIFF structure
///
/// Directories are appended after the data they point to. The first IFD
/// offset in the header is set by [`Self::first_ifd`].
pub struct Tiff {
    pub order: Endianness,
    pub data: Vec<u8>,
}

impl Tiff {
    pub fn new(order: Endianness) -> Self {
        let mut tiff = Self {
            order,
            data: Vec::new(),
        };

        match order {
            Endianness::Little => tiff.data.extend_from_slice(b"II"),
            Endianness::Big => tiff.data.extend_from_slice(b"MM"),
        }
        tiff.u16(42);
        tiff.u32(0);

        tiff
    }

    pub fn offset(&self) -> u32 {
        self.data.len() as u32
    }

    pub fn u16(&mut self, value: u16) {
        match self.order {
            Endianness::Little => self.data.extend_from_slice(&value.to_le_bytes()),
            Endianness::Big => self.data.extend_from_slice(&value.to_be_bytes()),
        }
    }

    pub fn u32(&mut self, value: u32) {
        match self.order {
            Endianness::Little => self.data.extend_from_slice(&value.to_le_bytes()),
            Endianness::Big => self.data.extend_from_slice(&value.to_be_bytes()),
        }
    }

    pub fn first_ifd(&mut self, offset: u32) {
        let bytes = match self.order {
            Endianness::Little => offset.to_le_bytes(),
            Endianness::Big => offset.to_be_bytes(),
        };
        self.data[4..8].copy_from_slice(&bytes);
    }

    pub fn first_ifd_offset(&self) -> u32 {
        let bytes = self.data[4..8].try_into().unwrap();
        self.order.u32(bytes)
    }

    /// Appends raw bytes and returns their offset
    pub fn blob(&mut self, bytes: &[u8]) -> u32 {
        let offset = self.offset();
        self.data.extend_from_slice(bytes);
        offset
    }

    /// Appends an IFD with `(tag, type, count, value)` entries
    ///
    /// The next IFD offset is written as four bytes, of which the walker
    /// consumes the leading two.
    pub fn ifd(&mut self, entries: &[(u16, u16, u32, u32)], next: u16) -> u32 {
        let offset = self.offset();

        self.u16(entries.len() as u16);
        for (tag, data_type, count, value) in entries {
            self.u16(*tag);
            self.u16(*data_type);
            self.u32(*count);
            self.u32(*value);
        }
        self.u16(next);
        self.data.extend_from_slice(&[0, 0]);

        offset
    }

    pub fn cursor(&self) -> ByteCursor<Cursor<Vec<u8>>> {
        ByteCursor::new(Cursor::new(self.data.clone())).unwrap()
    }

    /// Walks the directories with the TIFF header at position zero
    pub fn walk(&self, options: WalkOptions) -> error::Result<ExifResult> {
        let mut cursor = self.cursor();
        IfdWalker::new(&mut cursor, self.order, 0, options).walk(self.first_ifd_offset())
    }
}

/// Length of an IFD with `n` entries
pub fn ifd_len(n: u32) -> u32 {
    2 + 12 * n + 4
}
