use crate::error::DecodeError;
use crate::header::{DataType, TargaHeader};

/// Internal storage format an upload step should allocate for the pixels.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StorageFormat {
    R8,
    Rgb8,
    Rgba8,
}

impl StorageFormat {
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            Self::R8 => 1,
            Self::Rgb8 => 3,
            Self::Rgba8 => 4,
        }
    }
}

/// Channel order of the decoded byte stream.
///
/// The container stores multi-byte pixels in reversed (blue-first) order.
/// This is an external-format constraint and is preserved bit-exact; swizzling
/// to conventional RGB is the upload step's business, if it wants it at all.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TransferFormat {
    Red,
    Bgr,
    Bgra,
}

/// A decoded image: pixels plus the metadata an upload step needs.
///
/// The buffer is exactly `width * height * bytes_per_pixel` and is owned by
/// the caller; the decoder keeps nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
    pub storage: StorageFormat,
    pub transfer: TransferFormat,
}

/// Decodes the full byte content of one `.tga` file.
///
/// Pure function of its input; on error nothing is returned and any partially
/// decoded buffer is dropped.
pub fn decode(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    let header = TargaHeader::parse(bytes)?;
    let (storage, transfer) = format_pair(header.bits_per_pixel)?;

    let bpp = storage.bytes_per_pixel();
    let out_len = header.pixel_count() * bpp;
    let stream = &bytes[TargaHeader::SIZE..];

    let pixels = match header.data_type {
        DataType::TrueColor | DataType::Grayscale => {
            // Raw row-major pixels follow the header directly.
            if stream.len() < out_len {
                return Err(DecodeError::TruncatedPixelData {
                    expected: out_len,
                    got: stream.len(),
                });
            }
            stream[..out_len].to_vec()
        }

        DataType::RleTrueColor | DataType::RleGrayscale => decode_rle(stream, out_len, bpp)?,

        // Color-mapped containers are out of scope; fail loudly rather than
        // hand back an empty image.
        DataType::None | DataType::Indexed | DataType::RleIndexed => {
            return Err(DecodeError::UnsupportedDataType {
                code: header.data_type as u8,
            });
        }
    };

    Ok(DecodedImage {
        width: header.width as u32,
        height: header.height as u32,
        pixels,
        storage,
        transfer,
    })
}

/// Derives the (storage, transfer) pair from bits-per-pixel.
fn format_pair(bits_per_pixel: u8) -> Result<(StorageFormat, TransferFormat), DecodeError> {
    match bits_per_pixel {
        8 => Ok((StorageFormat::R8, TransferFormat::Red)),
        24 => Ok((StorageFormat::Rgb8, TransferFormat::Bgr)),
        32 => Ok((StorageFormat::Rgba8, TransferFormat::Bgra)),
        bits_per_pixel => Err(DecodeError::UnsupportedPixelFormat { bits_per_pixel }),
    }
}

/// Unpacks an RLE packet stream into exactly `out_len` bytes.
///
/// Packet grammar: one control byte, bit 7 set = run packet (one pixel
/// replicated), clear = raw packet (literal pixels); the low 7 bits hold
/// `count - 1`, so count is in `[1, 128]`. Packets are consumed strictly in
/// sequence. Decoding stops at the pixel quota: a packet crossing the quota is
/// clamped there and trailing stream bytes are ignored, never an error.
fn decode_rle(stream: &[u8], out_len: usize, bpp: usize) -> Result<Vec<u8>, DecodeError> {
    let mut out = Vec::with_capacity(out_len);
    let mut pos = 0usize;

    while out.len() < out_len {
        let Some(&control) = stream.get(pos) else {
            return Err(truncated(out_len, out.len()));
        };
        pos += 1;

        let count = (control & 0x7f) as usize + 1;
        let remaining = out_len - out.len();

        if control & 0x80 != 0 {
            let Some(pixel) = stream.get(pos..pos + bpp) else {
                return Err(truncated(out_len, out.len()));
            };
            pos += bpp;

            for _ in 0..count.min(remaining / bpp) {
                out.extend_from_slice(pixel);
            }
        } else {
            let take = (count * bpp).min(remaining);
            let Some(chunk) = stream.get(pos..pos + take) else {
                return Err(truncated(out_len, out.len() + stream.len() - pos));
            };
            pos += take;

            out.extend_from_slice(chunk);
        }
    }

    Ok(out)
}

fn truncated(expected: usize, got: usize) -> DecodeError {
    DecodeError::TruncatedPixelData { expected, got }
}
