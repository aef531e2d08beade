#![allow(dead_code)]

use std::io::Write;

use exifcam_common::byte_order::Endianness;
use tempfile::NamedTempFile;

pub const MAKE: u16 = 0x10F;
pub const MODEL: u16 = 0x110;
pub const ORIENTATION: u16 = 0x112;
pub const EXIF_POINTER: u16 = 0x8769;

pub const SHORT: u16 = 3;
pub const ASCII: u16 = 2;
pub const LONG: u16 = 4;

/// Exif block of a JPEG file, assembled back to front
///
/// Values and child directories are appended before the directories that
/// reference them.
pub struct Exif {
    order: Endianness,
    tiff: Vec<u8>,
}

impl Exif {
    pub fn new(order: Endianness) -> Self {
        let mut exif = Self {
            order,
            tiff: Vec::new(),
        };

        match order {
            Endianness::Little => exif.tiff.extend_from_slice(b"II"),
            Endianness::Big => exif.tiff.extend_from_slice(b"MM"),
        }
        exif.u16(42);
        exif.u32(0);

        exif
    }

    fn u16(&mut self, value: u16) {
        match self.order {
            Endianness::Little => self.tiff.extend_from_slice(&value.to_le_bytes()),
            Endianness::Big => self.tiff.extend_from_slice(&value.to_be_bytes()),
        }
    }

    fn u32(&mut self, value: u32) {
        match self.order {
            Endianness::Little => self.tiff.extend_from_slice(&value.to_le_bytes()),
            Endianness::Big => self.tiff.extend_from_slice(&value.to_be_bytes()),
        }
    }

    pub fn offset(&self) -> u32 {
        self.tiff.len() as u32
    }

    pub fn string(&mut self, value: &[u8]) -> (u32, u32) {
        let offset = self.offset();
        self.tiff.extend_from_slice(value);
        (offset, value.len() as u32)
    }

    /// Appends a directory of `(tag, type, count, value)` entries
    pub fn ifd(&mut self, entries: &[(u16, u16, u32, u32)], next: u32) -> u32 {
        let offset = self.offset();

        self.u16(entries.len() as u16);
        for (tag, data_type, count, value) in entries {
            self.u16(*tag);
            self.u16(*data_type);
            self.u32(*count);
            self.u32(*value);
        }
        // Next IFD offset, the leading two bytes are used
        self.u16(next as u16);
        self.u16(0);

        offset
    }

    pub fn first_ifd(mut self, offset: u32) -> Self {
        let bytes = match self.order {
            Endianness::Little => offset.to_le_bytes(),
            Endianness::Big => offset.to_be_bytes(),
        };
        self.tiff[4..8].copy_from_slice(&bytes);
        self
    }

    /// JPEG with the Exif segment directly after SOI
    pub fn jpeg(&self) -> Vec<u8> {
        self.jpeg_with_prefix(&[])
    }

    /// JPEG with the given segments between SOI and the Exif segment
    pub fn jpeg_with_prefix(&self, segments: &[u8]) -> Vec<u8> {
        let mut data = vec![0xFF, 0xD8];
        data.extend_from_slice(segments);

        data.extend_from_slice(&[0xFF, 0xE1]);
        data.extend_from_slice(&(self.tiff.len() as u16 + 8).to_be_bytes());
        data.extend_from_slice(b"Exif\0\0");
        data.extend_from_slice(&self.tiff);

        // Start of scan with a tiny bit of entropy coded data and EOI
        data.extend_from_slice(&[0xFF, 0xDA, 0x00, 0x02, 0x12, 0x34, 0xFF, 0xD9]);

        data
    }
}

/// APP0 JFIF segment
pub fn jfif() -> Vec<u8> {
    let mut data = vec![0xFF, 0xE0];
    data.extend_from_slice(&16_u16.to_be_bytes());
    data.extend_from_slice(b"JFIF\0");
    data.extend_from_slice(&[1, 1, 0, 0, 1, 0, 1, 0, 0]);
    data
}

pub fn write_file(data: &[u8]) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".jpg").tempfile().unwrap();
    file.write_all(data).unwrap();
    file.flush().unwrap();
    file
}
