use exifcam_common::tag::Tag;

use crate::IfdEntry;

/// Decides which entry of the zeroth IFD points to the Exif sub-directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SubIfdPolicy {
    /// The value of the last entry is assumed to be the sub-directory
    /// offset, regardless of its tag
    ///
    /// A trailing make or model entry points to its string and is never
    /// followed.
    #[default]
    TrailingEntry,
    /// Only an entry tagged [`Tag::EXIF_IFD_POINTER`] is followed
    ExifPointerTag,
}

impl SubIfdPolicy {
    /// Offset of the sub-directory, if any should be visited
    ///
    /// ```
    /// # use exifcam_common::tag::Tag;
    /// # use exifcam_exif::*;
    /// let entries = [
    ///     IfdEntry { tag: Tag::EXIF_IFD_POINTER, count: 1, value_offset: 40 },
    ///     IfdEntry { tag: Tag(0x8825), count: 1, value_offset: 90 },
    /// ];
    /// assert_eq!(SubIfdPolicy::TrailingEntry.sub_directory_offset(&entries), Some(90));
    /// assert_eq!(SubIfdPolicy::ExifPointerTag.sub_directory_offset(&entries), Some(40));
    /// assert_eq!(SubIfdPolicy::TrailingEntry.sub_directory_offset(&[]), None);
    ///
    /// let model = IfdEntry { tag: Tag::MODEL, count: 8, value_offset: 26 };
    /// assert_eq!(SubIfdPolicy::TrailingEntry.sub_directory_offset(&[model]), None);
    /// ```
    pub fn sub_directory_offset(self, entries: &[IfdEntry]) -> Option<u32> {
        let entry = match self {
            Self::TrailingEntry => entries
                .last()
                .filter(|x| x.tag != Tag::MAKE && x.tag != Tag::MODEL),
            Self::ExifPointerTag => entries.iter().find(|x| x.tag == Tag::EXIF_IFD_POINTER),
        }?;

        (entry.value_offset > 0).then_some(entry.value_offset)
    }
}

/// Limits and policies for [`IfdWalker`](crate::IfdWalker)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WalkOptions {
    pub sub_ifd: SubIfdPolicy,
    /// Maximum number of nested directory visits
    pub max_depth: Option<u32>,
    /// Fail when a directory offset is reached twice
    pub detect_cycles: bool,
    /// Directories chained to the zeroth IFD are also searched for a
    /// sub-directory
    ///
    /// When disabled, only the zeroth IFD itself has a sub-directory. This
    /// is required for files with a thumbnail IFD whose last entry is not
    /// an offset, unless [`SubIfdPolicy::ExifPointerTag`] is used.
    pub chain_inherits_zeroth: bool,
}

impl WalkOptions {
    pub const DEFAULT_MAX_DEPTH: u32 = 64;

    /// No depth limit and no cycle detection
    pub fn unguarded() -> Self {
        Self {
            sub_ifd: SubIfdPolicy::TrailingEntry,
            max_depth: None,
            detect_cycles: false,
            chain_inherits_zeroth: true,
        }
    }

    /// Follows only the Exif IFD pointer tag of the zeroth IFD
    pub fn strict() -> Self {
        Self {
            sub_ifd: SubIfdPolicy::ExifPointerTag,
            chain_inherits_zeroth: false,
            ..Self::default()
        }
    }
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            sub_ifd: SubIfdPolicy::default(),
            max_depth: Some(Self::DEFAULT_MAX_DEPTH),
            detect_cycles: true,
            chain_inherits_zeroth: true,
        }
    }
}
