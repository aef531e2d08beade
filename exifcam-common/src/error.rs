/// Coarse classification shared by the error types of all exifcam crates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// File could not be opened, or a read or seek ran past the available
    /// bytes
    Io,
    /// A make or model value is not ASCII text
    Decode,
    /// The data does not have the expected layout or loops back onto itself
    MalformedStructure,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Io => "IO error",
            Self::Decode => "decode error",
            Self::MalformedStructure => "malformed structure",
        })
    }
}
