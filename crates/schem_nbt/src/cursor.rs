//! Positioned big-endian reader over a borrowed byte buffer
//!

use byteorder::{BigEndian, ByteOrder};

use crate::error::{Error, Result};

/// Reads NBT primitives from an in-memory buffer
///
/// The buffer is only ever borrowed. Anything that has to outlive the
/// cursor (strings, arrays) is copied out.
///
/// ```
/// use schem_nbt::cursor::ByteCursor;
///
/// let mut cursor = ByteCursor::new(&[0x00, 0x02, b'h', b'i', 0xFF]);
/// assert_eq!(cursor.read_string().unwrap(), "hi");
/// assert_eq!(cursor.read_i8().unwrap(), -1);
/// assert!(cursor.read_u8().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    /// Current read offset from the start of the buffer
    pub fn position(&self) -> usize {
        self.offset
    }

    /// Number of bytes left to read
    pub fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    fn take(&mut self, needed: usize) -> Result<&'a [u8]> {
        if needed > self.remaining() {
            return Err(Error::OutOfBounds {
                offset: self.offset,
                needed,
                remaining: self.remaining(),
            });
        }

        let start = self.offset;
        self.offset += needed;
        Ok(&self.data[start..self.offset])
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    /// Reads a single byte as two's complement, so `0x80..=0xFF` map to `-128..=-1`
    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(self.read_u8()? as i8)
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        Ok(BigEndian::read_u16(self.take(2)?))
    }

    pub fn read_i16(&mut self) -> Result<i16> {
        Ok(BigEndian::read_i16(self.take(2)?))
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        Ok(BigEndian::read_i32(self.take(4)?))
    }

    pub fn read_i64(&mut self) -> Result<i64> {
        Ok(BigEndian::read_i64(self.take(8)?))
    }

    pub fn read_f32(&mut self) -> Result<f32> {
        Ok(BigEndian::read_f32(self.take(4)?))
    }

    pub fn read_f64(&mut self) -> Result<f64> {
        Ok(BigEndian::read_f64(self.take(8)?))
    }

    /// Reads a `u16` length prefixed UTF-8 string
    pub fn read_string(&mut self) -> Result<String> {
        let length = self.read_u16()? as usize;
        if length == 0 {
            return Ok(String::new());
        }

        let offset = self.offset;
        let bytes = self.take(length)?;
        String::from_utf8(bytes.to_vec()).map_err(|source| Error::InvalidString { offset, source })
    }

    /// Reads the `i32` element count in front of every typed array.
    ///
    /// A negative count is read as an empty array rather than an error. The
    /// count is also checked against what is left in the buffer so a corrupt
    /// prefix fails before anything gets allocated.
    fn read_array_len(&mut self, width: usize) -> Result<usize> {
        let length = self.read_i32()?.max(0) as usize;

        let needed = length.saturating_mul(width);
        if needed > self.remaining() {
            return Err(Error::OutOfBounds {
                offset: self.offset,
                needed,
                remaining: self.remaining(),
            });
        }

        Ok(length)
    }

    pub fn read_byte_array(&mut self) -> Result<Vec<i8>> {
        let length = self.read_array_len(1)?;
        Ok(self.take(length)?.iter().map(|&b| b as i8).collect())
    }

    pub fn read_int_array(&mut self) -> Result<Vec<i32>> {
        let length = self.read_array_len(4)?;
        let bytes = self.take(length * 4)?;

        let mut values = vec![0i32; length];
        BigEndian::read_i32_into(bytes, &mut values);
        Ok(values)
    }

    pub fn read_long_array(&mut self) -> Result<Vec<i64>> {
        let length = self.read_array_len(8)?;
        let bytes = self.take(length * 8)?;

        let mut values = vec![0i64; length];
        BigEndian::read_i64_into(bytes, &mut values);
        Ok(values)
    }
}
