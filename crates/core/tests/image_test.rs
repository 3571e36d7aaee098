//! Tests for image format detection and image export.

use std::path::PathBuf;
use std::time::SystemTime;

use layoutscan_core::image::{ImageType, ImageWriter, sniff};
use layoutscan_core::layout::LayoutImage;

fn make_temp_dir(prefix: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    dir.push(format!("{}_{}", prefix, nanos));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

const PNG_HEADER: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

// ============================================================================
// Magic number detection
// ============================================================================

#[test]
fn test_jpeg_matches_on_two_byte_prefix() {
    for tail in [[0x00, 0x00], [0xFF, 0xE0], [0xFF, 0xDB], [0x12, 0x34]] {
        let data = [0xFF, 0xD8, tail[0], tail[1], 0x99];
        assert_eq!(sniff(&data), ImageType::Jpeg, "tail {:02x?}", tail);
    }
}

#[test]
fn test_png_requires_exact_signature() {
    assert_eq!(sniff(&PNG_HEADER), ImageType::Png);
    for i in 0..4 {
        let mut near_miss = PNG_HEADER;
        near_miss[i] ^= 0x01;
        assert_eq!(sniff(&near_miss), ImageType::Unknown, "altered byte {}", i);
    }
}

#[test]
fn test_gif_requires_exact_signature() {
    assert_eq!(sniff(b"GIF89a"), ImageType::Gif);
    assert_eq!(sniff(b"GIF87a"), ImageType::Gif);
    assert_eq!(sniff(b"GIF7"), ImageType::Unknown);
}

#[test]
fn test_bmp_matches_on_two_byte_prefix() {
    assert_eq!(sniff(b"BM\x36\x00\x0c"), ImageType::Bmp);
    assert_eq!(sniff(b"BMxx"), ImageType::Bmp);
    assert_eq!(sniff(b"MB\x00\x00"), ImageType::Unknown);
}

#[test]
fn test_unknown_formats() {
    assert_eq!(sniff(b"%PDF-1.7"), ImageType::Unknown);
    assert_eq!(sniff(&[0x00, 0x00, 0x00, 0x0C]), ImageType::Unknown);
    assert_eq!(ImageType::Unknown.extension(), None);
    assert!(!ImageType::Unknown.is_known());
}

#[test]
fn test_extensions() {
    assert_eq!(ImageType::Jpeg.extension(), Some(".jpeg"));
    assert_eq!(ImageType::Png.extension(), Some(".png"));
    assert_eq!(ImageType::Gif.extension(), Some(".gif"));
    assert_eq!(ImageType::Bmp.extension(), Some(".bmp"));
}

// ============================================================================
// ImageWriter
// ============================================================================

#[test]
fn test_save_writes_and_overwrites() {
    let dir = make_temp_dir("layoutscan_image_save");
    let writer = ImageWriter::new(&dir);

    assert!(writer.save("a.bin", b"first"));
    assert!(writer.save("a.bin", b"second"));
    assert_eq!(std::fs::read(dir.join("a.bin")).unwrap(), b"second");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_save_into_a_file_path_fails() {
    let dir = make_temp_dir("layoutscan_image_notdir");
    let file = dir.join("plain.txt");
    std::fs::write(&file, b"x").unwrap();

    let writer = ImageWriter::new(&file);
    assert!(!writer.save("a.png", &PNG_HEADER));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_export_image_names_file_by_page_and_name() {
    let dir = make_temp_dir("layoutscan_image_export");
    let writer = ImageWriter::new(&dir);
    let img = LayoutImage::new((0.0, 0.0, 10.0, 10.0), "Im3", Some(PNG_HEADER.to_vec()));

    let saved = writer.export_image(&img, 7).unwrap();
    assert_eq!(saved, "7_Im3.png");
    assert_eq!(std::fs::read(dir.join(&saved)).unwrap(), PNG_HEADER);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_export_unknown_format_writes_nothing() {
    let dir = make_temp_dir("layoutscan_image_unknown");
    let writer = ImageWriter::new(&dir);
    let img = LayoutImage::new((0.0, 0.0, 10.0, 10.0), "Im0", Some(vec![1, 2, 3, 4, 5]));

    assert_eq!(writer.export_image(&img, 1), None);
    assert_eq!(std::fs::read_dir(&dir).unwrap().count(), 0);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_export_into_missing_folder_is_none() {
    let dir = make_temp_dir("layoutscan_image_missing").join("absent");
    let writer = ImageWriter::new(&dir);
    let img = LayoutImage::new((0.0, 0.0, 10.0, 10.0), "Im0", Some(PNG_HEADER.to_vec()));

    assert_eq!(writer.export_image(&img, 1), None);
    assert!(!dir.exists());
}

#[test]
fn test_saved_extension_matches_resniff() {
    let dir = make_temp_dir("layoutscan_image_resniff");
    let writer = ImageWriter::new(&dir);
    let samples: [(&str, Vec<u8>); 4] = [
        ("J", vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10]),
        ("P", PNG_HEADER.to_vec()),
        ("G", b"GIF89a\x01\x00".to_vec()),
        ("B", b"BM\x1e\x00\x00\x00".to_vec()),
    ];

    for (name, data) in samples {
        let img = LayoutImage::new((0.0, 0.0, 1.0, 1.0), name, Some(data));
        let saved = writer.export_image(&img, 2).unwrap();
        let bytes = std::fs::read(dir.join(&saved)).unwrap();
        let ext = sniff(&bytes).extension().unwrap();
        assert!(saved.ends_with(ext), "{} should end with {}", saved, ext);
        assert_eq!(saved, format!("2_{}{}", name, ext));
    }

    let _ = std::fs::remove_dir_all(&dir);
}
