use std::collections::BTreeSet;
use std::io::{Read, Seek};

use exifcam_common::prelude::*;

use crate::error::{Error, Result};
use crate::{ExifResult, IfdEntry, ResolvedTag, TagResolver, WalkOptions};

/// Recursive traversal of image file directories
///
/// Starting at the zeroth IFD, the walker follows the sub-directory selected
/// by [`SubIfdPolicy`](crate::SubIfdPolicy) and the next-IFD offset of every
/// directory it reads. State only lives for one walk.
#[derive(Debug)]
pub struct IfdWalker<'a, R> {
    cursor: &'a mut ByteCursor<R>,
    endianness: Endianness,
    anchor: u64,
    options: WalkOptions,
    resolver: TagResolver,
    visited: BTreeSet<u64>,
    make: Option<String>,
    model: Option<String>,
}

impl<'a, R: Read + Seek> IfdWalker<'a, R> {
    /// `anchor` is the absolute position of the TIFF header all directory
    /// offsets are relative to
    pub fn new(
        cursor: &'a mut ByteCursor<R>,
        endianness: Endianness,
        anchor: u64,
        options: WalkOptions,
    ) -> Self {
        Self {
            cursor,
            endianness,
            anchor,
            options,
            resolver: TagResolver::new(anchor),
            visited: BTreeSet::new(),
            make: None,
            model: None,
        }
    }

    /// Visits all directories reachable from the zeroth IFD
    ///
    /// A `first_ifd_offset` of zero means there are no directories.
    pub fn walk(mut self, first_ifd_offset: u32) -> Result<ExifResult> {
        if first_ifd_offset > 0 {
            self.read_directory(first_ifd_offset, true, 0)?;
        } else {
            tracing::debug!("No zeroth IFD present");
        }

        Ok(ExifResult::new(self.make, self.model, self.endianness))
    }

    fn read_directory(&mut self, offset: u32, zeroth: bool, depth: u32) -> Result<()> {
        if let Some(max_depth) = self.options.max_depth {
            if depth > max_depth {
                return Err(Error::DepthExceeded(max_depth));
            }
        }

        let position = self.anchor.safe_add(u64::from(offset))?;
        if self.options.detect_cycles && !self.visited.insert(position) {
            return Err(Error::DirectoryRevisited(offset));
        }

        self.cursor.seek_absolute(position)?;
        let n_entries = self.cursor.read_u16(self.endianness)?;
        tracing::debug!("Reading IFD at offset {offset} with {n_entries} entries");

        let mut entries = Vec::with_capacity(n_entries.usize()?);
        for _ in 0..n_entries {
            let entry = IfdEntry::read(self.cursor, self.endianness)?;
            if let Some(resolved) = self.resolver.resolve(self.cursor, &entry)? {
                self.store(resolved);
            }
            entries.push(entry);
        }

        let resume = self.cursor.position();

        if zeroth {
            if let Some(sub_offset) = self.options.sub_ifd.sub_directory_offset(&entries) {
                tracing::debug!("Following sub-directory at offset {sub_offset}");
                self.read_directory(sub_offset, false, depth.safe_add(1)?)?;
            }
            self.cursor.seek_absolute(resume)?;
        }

        let next_offset = self.cursor.read_uint(Width::Two, self.endianness)?;
        if next_offset > 0 {
            tracing::debug!("Following next IFD at offset {next_offset}");
            let zeroth = zeroth && self.options.chain_inherits_zeroth;
            self.read_directory(next_offset, zeroth, depth.safe_add(1)?)?;
        }

        Ok(())
    }

    /// Later values replace earlier ones
    fn store(&mut self, resolved: ResolvedTag) {
        let (slot, value) = match resolved {
            ResolvedTag::Make(value) => (&mut self.make, value),
            ResolvedTag::Model(value) => (&mut self.model, value),
        };

        if slot.is_some() {
            tracing::info!("Replacing previously found value with {value:?}");
        }

        *slot = Some(value);
    }
}
