/// Numeric identifier of an IFD entry
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
pub struct Tag(pub u16);

impl Tag {
    /// Camera manufacturer
    pub const MAKE: Self = Self(0x10F);
    /// Camera model
    pub const MODEL: Self = Self(0x110);

    pub const EXIF_IFD_POINTER: Self = Self(0x8769);

    pub fn name(self) -> Option<&'static str> {
        match self {
            Self::MAKE => Some("Make"),
            Self::MODEL => Some("Model"),
            Self::EXIF_IFD_POINTER => Some("ExifIfdPointer"),
            _ => None,
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "0x{:X}", self.0),
        }
    }
}

impl From<u16> for Tag {
    fn from(value: u16) -> Self {
        Self(value)
    }
}
