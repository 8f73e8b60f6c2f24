//! Fixture builders shared by the unit tests

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Entry to place in a test archive; `None` content marks a directory
pub type ZipFixture<'a> = (&'a str, Option<&'a [u8]>);

/// Creates a ZIP archive at `dir/name` holding the given entries
pub fn create_test_zip(dir: &Path, name: &str, entries: &[ZipFixture]) -> PathBuf {
    let zip_path = dir.join(name);
    let file = File::create(&zip_path).unwrap();
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for (entry_name, content) in entries {
        match content {
            Some(bytes) => {
                writer.start_file(entry_name.to_string(), options).unwrap();
                writer.write_all(bytes).unwrap();
            }
            None => writer.add_directory(entry_name.to_string(), options).unwrap(),
        }
    }
    writer.finish().unwrap();
    zip_path
}

/// Builds an image with every pixel set to `color`
pub fn solid_image(width: u32, height: u32, color: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba(color))
}

/// Encodes a solid image as PNG bytes
pub fn solid_png_bytes(width: u32, height: u32, color: [u8; 4]) -> Vec<u8> {
    let mut bytes = Vec::new();
    solid_image(width, height, color)
        .write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
        .unwrap();
    bytes
}

/// Writes a solid PNG to `path`
pub fn write_solid_png(path: &Path, width: u32, height: u32, color: [u8; 4]) {
    solid_image(width, height, color).save(path).unwrap();
}
