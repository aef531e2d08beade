use std::io::{Read, Seek};

use exifcam_common::prelude::*;

use crate::error::{Error, Result};
use crate::IfdEntry;

/// Value of an entry that is of interest
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedTag {
    Make(String),
    Model(String),
}

/// Materializes camera make and model entries
///
/// Both values are always read from the offset stored in the entry, even if
/// the string is short enough to be stored inline in the entry itself.
#[derive(Debug, Clone, Copy)]
pub struct TagResolver {
    anchor: u64,
}

impl TagResolver {
    /// `anchor` is the absolute position of the TIFF header
    pub fn new(anchor: u64) -> Self {
        Self { anchor }
    }

    /// Returns `None` for all tags except make and model
    ///
    /// The cursor position is left unchanged.
    pub fn resolve<R: Read + Seek>(
        &self,
        cursor: &mut ByteCursor<R>,
        entry: &IfdEntry,
    ) -> Result<Option<ResolvedTag>> {
        let wrap: fn(String) -> ResolvedTag = match entry.tag {
            Tag::MAKE => ResolvedTag::Make,
            Tag::MODEL => ResolvedTag::Model,
            _ => return Ok(None),
        };

        let pos = self.anchor.safe_add(u64::from(entry.value_offset))?;
        let bytes = cursor.read_bytes_at(pos, entry.count.usize()?)?;
        let value = decode_ascii(entry.tag, bytes)?;

        tracing::debug!("{} at byte {pos}: {value:?}", entry.tag);

        Ok(Some(wrap(value)))
    }
}

/// Decodes an ASCII value
///
/// NULL bytes terminating the value are removed.
///
/// ```
/// # use exifcam_common::tag::Tag;
/// # use exifcam_exif::decode_ascii;
/// assert_eq!(decode_ascii(Tag::MAKE, b"Canon\0".to_vec()).unwrap(), "Canon");
/// assert!(decode_ascii(Tag::MAKE, vec![b'C', 0xFF]).is_err());
/// ```
pub fn decode_ascii(tag: Tag, mut bytes: Vec<u8>) -> Result<String> {
    if let Some((index, byte)) = bytes.iter().enumerate().find(|(_, x)| !x.is_ascii()) {
        return Err(Error::NotAscii {
            tag,
            byte: *byte,
            index,
        });
    }

    while bytes.last() == Some(&0) {
        bytes.pop();
    }

    Ok(bytes.into_iter().map(char::from).collect())
}
