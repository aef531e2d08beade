use exifcam_common::error::ErrorKind;
use exifcam_common::math::MathError;
use exifcam_common::read::ReadError;
use exifcam_common::tag::Tag;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Read: {0}")]
    Read(#[from] ReadError),
    #[error("Math: {0}")]
    Math(#[from] MathError),
    #[error("Value of tag {tag} has non-ASCII byte 0x{byte:X} at index {index}")]
    NotAscii { tag: Tag, byte: u8, index: usize },
    #[error("Directories nested deeper than {0} levels")]
    DepthExceeded(u32),
    #[error("Directory at offset {0} reached a second time")]
    DirectoryRevisited(u32),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Read(err) => err.kind(),
            Self::NotAscii { .. } => ErrorKind::Decode,
            Self::Math(_) | Self::DepthExceeded(_) | Self::DirectoryRevisited(_) => {
                ErrorKind::MalformedStructure
            }
        }
    }
}
