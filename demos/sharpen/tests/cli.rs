use std::path::Path;
use std::process::{Command, Output, Stdio};

use keysharp::image::{Image, ImageSize};
use keysharp::io::{read_image_any_gray8, read_image_any_rgb8, write_image_jpeg_rgb8};

fn run_sharpen(dir: &Path, args: &[&str]) -> std::io::Result<Output> {
    Command::new(env!("CARGO_BIN_EXE_sharpen"))
        .args(args)
        .current_dir(dir)
        .env("RUST_LOG", "info")
        .stdin(Stdio::null())
        .output()
}

fn write_input(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let data = (0..20 * 10 * 3).map(|i| ((i * 13) % 256) as u8).collect();
    let image = Image::<u8, 3>::new([20, 10].into(), data)?;
    write_image_jpeg_rgb8(dir.join("boomer.jpg"), &image, 100)?;
    Ok(())
}

#[test]
fn missing_input_exits_with_load_failure() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempfile::tempdir()?;

    let output = run_sharpen(tmp_dir.path(), &["--batch"])?;
    assert!(!output.status.success());
    #[cfg(unix)]
    assert_eq!(output.status.code(), Some(255));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("File does not exist: boomer.jpg"), "{stderr}");
    assert!(!tmp_dir.path().join("output.jpg").exists());

    Ok(())
}

#[test]
fn batch_run_writes_output() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempfile::tempdir()?;
    write_input(tmp_dir.path())?;

    let output = run_sharpen(tmp_dir.path(), &["--batch"])?;
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(String::from_utf8_lossy(&output.stderr).contains("identical"));

    let sharpened = read_image_any_rgb8(tmp_dir.path().join("output.jpg"))?;
    assert_eq!(sharpened.size(), ImageSize::from([20, 10]));

    Ok(())
}

#[test]
fn grayscale_run_writes_output() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempfile::tempdir()?;
    write_input(tmp_dir.path())?;

    // stdin is closed, so every wait for a key returns at once
    let output = run_sharpen(tmp_dir.path(), &["--grayscale", "-o", "gray.jpg"])?;
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let sharpened = read_image_any_gray8(tmp_dir.path().join("gray.jpg"))?;
    assert_eq!(sharpened.size(), ImageSize::from([20, 10]));

    Ok(())
}
