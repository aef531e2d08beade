use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use exifcam::{AnchorMode, Options};
use tracing_subscriber::prelude::*;

const USAGE: &str = "Usage: exifcam-scan [--scan] [--strict] <FILE or FOLDER>";

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::builder().from_env_lossy())
        .with(tracing_subscriber::fmt::Layer::default().compact())
        .init();

    let mut options = Options::default();
    let mut path = None;

    for arg in std::env::args_os().skip(1) {
        match arg.to_str() {
            Some("--scan") => options.anchor = AnchorMode::Scan,
            Some("--strict") => options = Options::strict(),
            Some("-h" | "--help") => {
                println!("{USAGE}");
                return ExitCode::SUCCESS;
            }
            _ if path.is_none() => path = Some(PathBuf::from(arg)),
            _ => {
                eprintln!("{USAGE}");
                return ExitCode::FAILURE;
            }
        }
    }

    let Some(path) = path else {
        eprintln!("{USAGE}");
        return ExitCode::FAILURE;
    };

    let files = if path.is_dir() {
        match jpeg_files(&path) {
            Ok(files) => files,
            Err(err) => {
                tracing::error!("Failed to list {path:?}: {err}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        vec![path]
    };

    let mut failed = false;
    for file in files {
        match exifcam::parse_with(&file, &options) {
            Ok(result) => println!(
                "{}\t{}\t{}",
                file.display(),
                result.make().unwrap_or("–"),
                result.model().unwrap_or("–")
            ),
            Err(err) => {
                tracing::warn!("Skipping {file:?} ({}): {err}", err.kind());
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Files in `dir` with a `jpg` or `jpeg` extension, sorted by name
fn jpeg_files(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && is_jpeg_name(&path) {
            files.push(path);
        }
    }

    files.sort();

    Ok(files)
}

fn is_jpeg_name(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg"))
}
