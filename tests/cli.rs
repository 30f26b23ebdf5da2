use image::{ImageFormat, Rgb};
use std::{fs, path::PathBuf, process::Command};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("favicon-cli-{name}-{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn writes_favicon_into_working_directory() {
    let dir = scratch_dir("run");

    let output = Command::new(env!("CARGO_BIN_EXE_favicon"))
        .current_dir(&dir)
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let encoded = fs::read(dir.join("favicon.ico")).unwrap();
    let image = image::load_from_memory_with_format(&encoded, ImageFormat::Ico)
        .unwrap()
        .to_rgb8();
    assert_eq!(image.dimensions(), (16, 16));
    assert!(image.pixels().all(|pixel| *pixel == Rgb([0, 0, 0])));
}

#[test]
fn rejects_arguments() {
    let dir = scratch_dir("args");

    let status = Command::new(env!("CARGO_BIN_EXE_favicon"))
        .arg("--size")
        .arg("32")
        .current_dir(&dir)
        .status()
        .unwrap();

    assert!(!status.success());
    assert!(!dir.join("favicon.ico").exists());
}
