#[macro_use]
extern crate tracing;

use anyhow::Context;
use image::{ExtendedColorType, ImageEncoder, ImageFormat, Rgb, RgbImage, codecs::ico::IcoEncoder};
use itertools::Itertools;
use std::{
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
};

pub const ICON_SIZE: u32 = 16;
pub const ICON_COLOR: Rgb<u8> = Rgb([0, 0, 0]);
pub const OUTPUT_PATH: &str = "favicon.ico";

/// What a decoded icon looks like.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IconReport {
    pub width: u32,
    pub height: u32,
    /// The color every pixel shares, `None` if they differ
    pub solid: Option<Rgb<u8>>,
}

pub fn pixel_buffer() -> RgbImage {
    RgbImage::from_pixel(ICON_SIZE, ICON_SIZE, ICON_COLOR)
}

/// Encode the buffer as an ICO container with a single 24-bit entry.
pub fn encode_ico(buffer: &RgbImage) -> anyhow::Result<Vec<u8>> {
    let mut encoded = Vec::new();
    IcoEncoder::new(&mut encoded)
        .write_image(
            buffer.as_raw(),
            buffer.width(),
            buffer.height(),
            ExtendedColorType::Rgb8,
        )
        .context("failed to encode icon")?;

    Ok(encoded)
}

fn staging_path(path: &Path) -> PathBuf {
    let mut staging = path.as_os_str().to_owned();
    staging.push(".part");
    PathBuf::from(staging)
}

fn write_staged(staging: &Path, encoded: &[u8]) -> io::Result<()> {
    let mut file = File::create(staging)?;
    file.write_all(encoded)?;
    file.sync_all()
}

/// Write `encoded` to `path`.
///
/// The bytes land in `<path>.part` first and are renamed over the target once
/// they are on disk. On failure the staging file is removed and the target is
/// left as it was.
pub fn write_icon(path: &Path, encoded: &[u8]) -> anyhow::Result<()> {
    let staging = staging_path(path);
    debug!(staging = %staging.display(), "writing staging file");

    if let Err(error) = write_staged(&staging, encoded).and_then(|()| fs::rename(&staging, path)) {
        let _ = fs::remove_file(&staging);
        return Err(error).with_context(|| format!("failed to write {}", path.display()));
    }

    Ok(())
}

pub fn generate_icon_at(path: &Path) -> anyhow::Result<()> {
    let buffer = pixel_buffer();
    let encoded = encode_ico(&buffer)?;
    debug!(bytes = encoded.len(), "encoded icon");

    write_icon(path, &encoded)?;
    debug!(path = %path.display(), "wrote icon");

    Ok(())
}

/// Write the 16x16 black `favicon.ico` into the current directory.
pub fn generate_icon() -> anyhow::Result<()> {
    generate_icon_at(Path::new(OUTPUT_PATH))
}

pub fn inspect_icon(encoded: &[u8]) -> anyhow::Result<IconReport> {
    let image = image::load_from_memory_with_format(encoded, ImageFormat::Ico)?.to_rgb8();
    let solid = image.pixels().copied().all_equal_value().ok();

    Ok(IconReport {
        width: image.width(),
        height: image.height(),
        solid,
    })
}

/// Read the icon at `path` and make sure it is the one `generate_icon` writes.
pub fn check_icon(path: &Path) -> anyhow::Result<IconReport> {
    let encoded = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let report =
        inspect_icon(&encoded).with_context(|| format!("failed to decode {}", path.display()))?;

    anyhow::ensure!(
        (report.width, report.height) == (ICON_SIZE, ICON_SIZE),
        "{} is {}x{}, expected {ICON_SIZE}x{ICON_SIZE}",
        path.display(),
        report.width,
        report.height,
    );

    match report.solid {
        Some(color) if color == ICON_COLOR => Ok(report),
        Some(Rgb([r, g, b])) => anyhow::bail!("{} is filled with ({r}, {g}, {b})", path.display()),
        None => anyhow::bail!("{} is not a single color", path.display()),
    }
}
