/// Byte order of the TIFF structure
///
/// Detected once from the two byte order mark at the start of the TIFF header
/// and used for every multi-byte integer afterward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Endianness {
    /// `II`, Intel
    Little,
    /// `MM`, Motorola
    Big,
}

impl Endianness {
    pub const LITTLE_MARK: [u8; 2] = *b"II";
    pub const BIG_MARK: [u8; 2] = *b"MM";

    /// `II` selects little endian, every other mark selects big endian
    ///
    /// ```
    /// # use exifcam_common::byte_order::Endianness;
    /// assert_eq!(Endianness::from_order_mark(*b"II"), Endianness::Little);
    /// assert_eq!(Endianness::from_order_mark(*b"MM"), Endianness::Big);
    /// assert_eq!(Endianness::from_order_mark([0, 0]), Endianness::Big);
    /// ```
    pub fn from_order_mark(mark: [u8; 2]) -> Self {
        if mark == Self::LITTLE_MARK {
            Self::Little
        } else {
            Self::Big
        }
    }

    /// Only accepts `II` and `MM`
    pub fn from_order_mark_strict(mark: [u8; 2]) -> Option<Self> {
        match mark {
            Self::LITTLE_MARK => Some(Self::Little),
            Self::BIG_MARK => Some(Self::Big),
            _ => None,
        }
    }

    pub fn u16(self, bytes: [u8; 2]) -> u16 {
        match self {
            Self::Little => u16::from_le_bytes(bytes),
            Self::Big => u16::from_be_bytes(bytes),
        }
    }

    pub fn u32(self, bytes: [u8; 4]) -> u32 {
        match self {
            Self::Little => u32::from_le_bytes(bytes),
            Self::Big => u32::from_be_bytes(bytes),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Little => "little",
            Self::Big => "big",
        }
    }
}

impl std::fmt::Display for Endianness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
