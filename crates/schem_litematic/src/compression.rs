//! Container decompression handling.

use std::{borrow::Cow, io::Read};

use flate2::read::GzDecoder;
use tracing::{debug, instrument};

/// How the NBT payload was stored inside the file
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum CompressionMethod {
    /// Plain, uncompressed NBT
    None,

    /// Gzip stream, the normal case for `.litematic` files
    #[default]
    Gzip,
}

/// Decompress a gzip container, falling back to the raw bytes.
///
/// A failed decompression is not an error: the input is assumed to be
/// uncompressed NBT and the decoder will reject it if it is not.
#[instrument(skip_all, fields(len = data.len()))]
pub fn decompress(data: &[u8]) -> (Cow<'_, [u8]>, CompressionMethod) {
    let mut decoder = GzDecoder::new(data);
    let mut buffer = Vec::new();

    match decoder.read_to_end(&mut buffer) {
        Ok(size) => {
            debug!("decompressed {} bytes", size);
            (Cow::Owned(buffer), CompressionMethod::Gzip)
        }
        Err(err) => {
            debug!("not a gzip stream ({}), reading as raw nbt", err);
            (Cow::Borrowed(data), CompressionMethod::None)
        }
    }
}

#[cfg(test)]
mod test {
    use std::io::Write;

    use flate2::{write::GzEncoder, Compression};

    use crate::compression::{decompress, CompressionMethod};

    #[test]
    fn decompress_gzip() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&[0x0A, 0x00, 0x00, 0x00]).unwrap();
        let input = encoder.finish().unwrap();

        let (data, method) = decompress(&input);
        assert_eq!(method, CompressionMethod::Gzip);
        assert_eq!(&*data, &[0x0A, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn decompress_falls_back_to_raw() {
        let input = [0x0A, 0x00, 0x00, 0x00];

        let (data, method) = decompress(&input);
        assert_eq!(method, CompressionMethod::None);
        assert_eq!(&*data, &input);
    }

    #[test]
    fn decompress_truncated_gzip_falls_back() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&[0x0A; 64]).unwrap();
        let mut input = encoder.finish().unwrap();
        input.truncate(input.len() / 2);

        let (data, method) = decompress(&input);
        assert_eq!(method, CompressionMethod::None);
        assert_eq!(&*data, input.as_slice());
    }
}
