//! Image format detection from leading magic bytes.

/// Image formats recognised by [`sniff`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageType {
    Jpeg,
    Png,
    Gif,
    Bmp,
    Unknown,
}

const JPEG_MAGIC: [u8; 2] = [0xFF, 0xD8];
const PNG_MAGIC: [u8; 4] = [0x89, 0x50, 0x4E, 0x47];
const GIF_MAGIC: [u8; 4] = [0x47, 0x49, 0x46, 0x38];
const BMP_MAGIC: [u8; 2] = [0x42, 0x4D];

impl ImageType {
    /// File extension including the leading dot, or None for Unknown.
    pub const fn extension(self) -> Option<&'static str> {
        match self {
            ImageType::Jpeg => Some(".jpeg"),
            ImageType::Png => Some(".png"),
            ImageType::Gif => Some(".gif"),
            ImageType::Bmp => Some(".bmp"),
            ImageType::Unknown => None,
        }
    }

    pub const fn is_known(self) -> bool {
        !matches!(self, ImageType::Unknown)
    }
}

/// Classify image data by its first four bytes.
///
/// JPEG and BMP match on a two-byte prefix. PNG and GIF require the first
/// four bytes to equal the signature exactly. Only `data[..4]` is inspected.
pub fn sniff(data: &[u8]) -> ImageType {
    let head = &data[..data.len().min(4)];
    if head.starts_with(&JPEG_MAGIC) {
        ImageType::Jpeg
    } else if head == PNG_MAGIC {
        ImageType::Png
    } else if head == GIF_MAGIC {
        ImageType::Gif
    } else if head.starts_with(&BMP_MAGIC) {
        ImageType::Bmp
    } else {
        ImageType::Unknown
    }
}
