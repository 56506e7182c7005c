use crate::error::DecodeError;

/// Pixel-stream layout declared by the header's data-type code.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DataType {
    /// No image data present.
    None = 0,
    /// Uncompressed, color-mapped (indexed).
    Indexed = 1,
    /// Uncompressed true-color.
    TrueColor = 2,
    /// Uncompressed grayscale.
    Grayscale = 3,
    /// Run-length-encoded, color-mapped (indexed).
    RleIndexed = 9,
    /// Run-length-encoded true-color.
    RleTrueColor = 10,
    /// Run-length-encoded grayscale.
    RleGrayscale = 11,
}

impl DataType {
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::None),
            1 => Some(Self::Indexed),
            2 => Some(Self::TrueColor),
            3 => Some(Self::Grayscale),
            9 => Some(Self::RleIndexed),
            10 => Some(Self::RleTrueColor),
            11 => Some(Self::RleGrayscale),
            _ => None,
        }
    }

    pub fn is_rle(self) -> bool {
        matches!(self, Self::RleIndexed | Self::RleTrueColor | Self::RleGrayscale)
    }
}

/// The fixed 18-byte `.tga` header, parsed.
///
/// All multi-byte fields are little-endian and unaligned in the file. The
/// colormap and origin fields are carried but not interpreted further.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TargaHeader {
    pub id_length: u8,
    pub color_map: u8,
    pub data_type: DataType,
    pub colormap_index: u16,
    pub colormap_length: u16,
    pub colormap_entry_size: u8,
    pub x_origin: u16,
    pub y_origin: u16,
    pub width: u16,
    pub height: u16,
    pub bits_per_pixel: u8,
    pub descriptor: u8,
}

impl TargaHeader {
    /// Size of the packed header on disk, in bytes.
    pub const SIZE: usize = 18;

    /// Parses the header from the start of a file's bytes.
    ///
    /// Public so tooling can sniff dimensions without decoding pixels.
    pub fn parse(bytes: &[u8]) -> Result<Self, DecodeError> {
        if bytes.len() < Self::SIZE {
            return Err(DecodeError::TruncatedHeader);
        }

        let data_type =
            DataType::from_code(bytes[2]).ok_or(DecodeError::UnsupportedDataType { code: bytes[2] })?;

        Ok(Self {
            id_length: bytes[0],
            color_map: bytes[1],
            data_type,
            colormap_index: read_u16(bytes, 3),
            colormap_length: read_u16(bytes, 5),
            colormap_entry_size: bytes[7],
            x_origin: read_u16(bytes, 8),
            y_origin: read_u16(bytes, 10),
            width: read_u16(bytes, 12),
            height: read_u16(bytes, 14),
            bits_per_pixel: bytes[16],
            descriptor: bytes[17],
        })
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

fn read_u16(bytes: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([bytes[at], bytes[at + 1]])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_packed_fields() {
        let mut raw = [0u8; TargaHeader::SIZE];
        raw[2] = 10; // RLE true-color
        raw[12] = 0x00;
        raw[13] = 0x02; // width = 512
        raw[14] = 0x80;
        raw[15] = 0x01; // height = 384
        raw[16] = 32;

        let header = TargaHeader::parse(&raw).unwrap();
        assert_eq!(header.data_type, DataType::RleTrueColor);
        assert_eq!(header.width, 512);
        assert_eq!(header.height, 384);
        assert_eq!(header.bits_per_pixel, 32);
        assert_eq!(header.pixel_count(), 512 * 384);
    }

    #[test]
    fn short_input_is_truncated_header() {
        let raw = [0u8; TargaHeader::SIZE - 1];
        assert_eq!(TargaHeader::parse(&raw), Err(DecodeError::TruncatedHeader));
    }

    #[test]
    fn unknown_data_type_code_is_rejected() {
        let mut raw = [0u8; TargaHeader::SIZE];
        raw[2] = 7;
        assert_eq!(
            TargaHeader::parse(&raw),
            Err(DecodeError::UnsupportedDataType { code: 7 })
        );
    }

    #[test]
    fn rle_classification() {
        assert!(DataType::RleGrayscale.is_rle());
        assert!(!DataType::TrueColor.is_rle());
    }
}
