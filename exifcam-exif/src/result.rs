use exifcam_common::byte_order::Endianness;

/// Camera identification found in an Exif block
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExifResult {
    make: Option<String>,
    model: Option<String>,
    endianness: Endianness,
}

impl ExifResult {
    pub fn new(make: Option<String>, model: Option<String>, endianness: Endianness) -> Self {
        Self {
            make,
            model,
            endianness,
        }
    }

    /// Camera manufacturer
    pub fn make(&self) -> Option<&str> {
        self.make.as_deref()
    }

    /// Camera model
    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    /// Byte order of the TIFF structure
    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    /// Neither make nor model were found
    pub fn is_empty(&self) -> bool {
        self.make.is_none() && self.model.is_none()
    }
}

impl std::fmt::Display for ExifResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Camera Make: {}", self.make().unwrap_or_default())?;
        write!(f, "Camera Model: {}", self.model().unwrap_or_default())
    }
}
