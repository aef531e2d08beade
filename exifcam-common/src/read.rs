use std::io::{ErrorKind, Read, Seek, SeekFrom};

use crate::byte_order::Endianness;
use crate::math::*;

/// Width of an unsigned integer field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Width {
    Two,
    Four,
}

/// Seekable view over a byte source, bounded by the length of the source
///
/// All reads and seeks fail with [`ReadError::Io`] instead of moving past the
/// end of the data.
///
/// ```
/// # use std::io::Cursor;
/// # use exifcam_common::prelude::*;
/// let mut cursor = ByteCursor::new(Cursor::new(vec![0x2A, 0, 0, 0, 0x2A])).unwrap();
/// assert_eq!(cursor.read_u16(Endianness::Little).unwrap(), 42);
/// assert_eq!(cursor.read_u16(Endianness::Big).unwrap(), 0);
/// assert_eq!(cursor.position(), 4);
/// assert!(cursor.read_u32(Endianness::Big).is_err());
/// ```
#[derive(Debug)]
pub struct ByteCursor<R> {
    inner: R,
    position: u64,
    len: u64,
}

impl<R: Read + Seek> ByteCursor<R> {
    pub fn new(mut inner: R) -> Result<Self, ReadError> {
        let len = inner.seek(SeekFrom::End(0))?;
        inner.seek(SeekFrom::Start(0))?;

        Ok(Self {
            inner,
            position: 0,
            len,
        })
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn position(&self) -> u64 {
        self.position
    }

    pub fn seek_absolute(&mut self, pos: u64) -> Result<(), ReadError> {
        if pos > self.len {
            return Err(ReadError::Io(std::io::Error::new(
                ErrorKind::UnexpectedEof,
                format!("Seek to {pos} beyond end of data at {}", self.len),
            )));
        }

        self.position = self.inner.seek(SeekFrom::Start(pos))?;

        Ok(())
    }

    /// ```
    /// # use std::io::Cursor;
    /// # use exifcam_common::prelude::*;
    /// let mut cursor = ByteCursor::new(Cursor::new(b"abcdef".to_vec())).unwrap();
    /// cursor.seek_relative(4).unwrap();
    /// cursor.seek_relative(-1).unwrap();
    /// assert_eq!(cursor.read_bytes(2).unwrap(), b"de");
    /// assert!(cursor.seek_relative(-7).is_err());
    /// ```
    pub fn seek_relative(&mut self, delta: i64) -> Result<(), ReadError> {
        let pos = self
            .position
            .i64()
            .ok()
            .and_then(|x| x.safe_add(delta).ok())
            .and_then(|x| x.u64().ok())
            .ok_or_else(|| {
                ReadError::Io(std::io::Error::new(
                    ErrorKind::InvalidInput,
                    format!("Seek by {delta} from {} out of range", self.position),
                ))
            })?;

        self.seek_absolute(pos)
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], ReadError> {
        self.ensure_available(N)?;

        let mut buf = [0; N];
        self.inner.read_exact(&mut buf)?;
        self.position = self.position.safe_add(N.u64()?)?;

        Ok(buf)
    }

    pub fn read_bytes(&mut self, n: usize) -> Result<Vec<u8>, ReadError> {
        self.ensure_available(n)?;

        let mut buf = vec![0; n];
        self.inner.read_exact(&mut buf)?;
        self.position = self.position.safe_add(n.u64()?)?;

        Ok(buf)
    }

    /// Reads `n` bytes at `pos` and moves back to the current position
    pub fn read_bytes_at(&mut self, pos: u64, n: usize) -> Result<Vec<u8>, ReadError> {
        let resume = self.position;
        self.seek_absolute(pos)?;
        let bytes = self.read_bytes(n)?;
        self.seek_absolute(resume)?;

        Ok(bytes)
    }

    pub fn read_uint(&mut self, width: Width, order: Endianness) -> Result<u32, ReadError> {
        match width {
            Width::Two => self.read_u16(order).map(u32::from),
            Width::Four => self.read_u32(order),
        }
    }

    pub fn read_u16(&mut self, order: Endianness) -> Result<u16, ReadError> {
        Ok(order.u16(self.read_array()?))
    }

    pub fn read_u32(&mut self, order: Endianness) -> Result<u32, ReadError> {
        Ok(order.u32(self.read_array()?))
    }

    fn ensure_available(&self, n: usize) -> Result<(), ReadError> {
        let end = self.position.safe_add(n.u64()?)?;
        if end > self.len {
            return Err(ReadError::Io(std::io::Error::new(
                ErrorKind::UnexpectedEof,
                format!(
                    "Reading {n} bytes at {} exceeds data of length {}",
                    self.position, self.len
                ),
            )));
        }

        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("Math: {0}")]
    Math(#[from] MathError),
    #[error("IO: {0}")]
    Io(#[from] std::io::Error),
}

impl ReadError {
    pub fn kind(&self) -> crate::error::ErrorKind {
        match self {
            Self::Io(_) => crate::error::ErrorKind::Io,
            Self::Math(_) => crate::error::ErrorKind::MalformedStructure,
        }
    }
}
