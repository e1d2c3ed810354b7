//! PNG export of rendered screens.

use crate::config::OutputConfig;
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while writing a rendered image.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode PNG: {0}")]
    Encode(#[from] cairo::IoError),
}

/// Generate a filename based on the template and current time.
///
/// # Arguments
/// * `template` - Template string with chrono format specifiers
///
/// # Returns
/// Generated filename with a `.png` extension
pub fn generate_filename(template: &str) -> String {
    let now = Local::now();
    let filename = now.format(template).to_string();
    format!("{}.png", filename)
}

/// Directory images go to when the config does not name one.
pub fn default_directory() -> PathBuf {
    dirs::picture_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("canvas-draw")
}

/// Resolves where the next image is written.
///
/// An explicit path wins; otherwise the configured (or default) directory is
/// joined with a filename generated from the template.
pub fn resolve_output_path(explicit: Option<&Path>, config: &OutputConfig) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    let directory = config
        .directory
        .as_deref()
        .map(expand_tilde)
        .unwrap_or_else(default_directory);
    directory.join(generate_filename(&config.filename_template))
}

/// Ensure the directory exists, creating it if necessary.
pub fn ensure_directory_exists(directory: &Path) -> Result<(), ExportError> {
    if !directory.as_os_str().is_empty() && !directory.exists() {
        log::info!("Creating output directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }
    Ok(())
}

/// Encodes a surface as PNG bytes.
pub fn encode_png(surface: &cairo::ImageSurface) -> Result<Vec<u8>, ExportError> {
    let mut buffer = Vec::new();
    surface.write_to_png(&mut buffer)?;
    Ok(buffer)
}

/// Writes a surface as a PNG file.
///
/// Parent directories are created as needed and, on unix, the file is
/// restricted to user read/write.
///
/// # Returns
/// Path to the saved file
pub fn save_png(surface: &cairo::ImageSurface, path: &Path) -> Result<PathBuf, ExportError> {
    if let Some(parent) = path.parent() {
        ensure_directory_exists(parent)?;
    }

    let image_data = encode_png(surface)?;
    log::info!(
        "Saving image to: {} ({} bytes)",
        path.display(),
        image_data.len()
    );

    fs::write(path, &image_data)?;

    let written_size = fs::metadata(path)?.len();
    log::debug!("File written: {} bytes", written_size);

    #[cfg(unix)]
    {
        use std::fs::Permissions;
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, Permissions::from_mode(0o600))?;
    }

    Ok(path.to_path_buf())
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn small_surface() -> cairo::ImageSurface {
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, 8, 8).unwrap();
        {
            let ctx = cairo::Context::new(&surface).unwrap();
            ctx.set_source_rgb(1.0, 0.0, 0.0);
            ctx.paint().unwrap();
        }
        surface
    }

    #[test]
    fn test_generate_filename() {
        let filename = generate_filename("test_%Y%m%d");
        assert!(filename.starts_with("test_"));
        assert!(filename.ends_with(".png"));
        assert_eq!(filename.len(), "test_20260101.png".len());
    }

    #[test]
    fn test_expand_tilde() {
        let expanded = expand_tilde("~/Pictures");
        assert!(!expanded.to_string_lossy().starts_with("~"));

        let no_tilde = expand_tilde("/absolute/path");
        assert_eq!(no_tilde, PathBuf::from("/absolute/path"));
    }

    #[test]
    fn explicit_output_path_wins() {
        let config = OutputConfig::default();
        let path = resolve_output_path(Some(Path::new("/tmp/out.png")), &config);
        assert_eq!(path, PathBuf::from("/tmp/out.png"));
    }

    #[test]
    fn configured_directory_is_used() {
        let config = OutputConfig {
            directory: Some("/tmp/renders".to_string()),
            filename_template: "fixed".to_string(),
        };
        assert_eq!(
            resolve_output_path(None, &config),
            PathBuf::from("/tmp/renders/fixed.png")
        );
    }

    #[test]
    fn save_png_creates_parent_directories() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("demo.png");
        let saved = save_png(&small_surface(), &path).unwrap();
        assert_eq!(saved, path);

        let bytes = fs::read(&path).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = fs::metadata(&path).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o600);
        }
    }
}
