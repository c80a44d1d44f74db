//! Writing generated files to disk.
//!
//! # Write modes
//!
//! - `Replace` truncates each file. With atomic writes enabled the content
//!   goes to `<name>.tmp` first and is renamed over the target, so readers
//!   never see a half-written file.
//! - `Append` adds to the end of each file, creating it if needed.

use crate::types::{FilesError, Result};
use sdkwrap_codegen::GeneratedCode;
use sdkwrap_core::{GeneratorConfig, WriteMode};
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info};

/// Options for writing generated files.
///
/// # Examples
///
/// ```
/// use sdkwrap_core::WriteMode;
/// use sdkwrap_files::ExportOptions;
///
/// let options = ExportOptions::default()
///     .with_mode(WriteMode::Append)
///     .with_atomic_writes(false);
/// assert_eq!(options.mode, WriteMode::Append);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportOptions {
    /// Replace or append
    pub mode: WriteMode,
    /// Use temp file plus rename in replace mode
    pub atomic: bool,
}

impl ExportOptions {
    /// Creates options with defaults (replace, atomic).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            mode: WriteMode::Replace,
            atomic: true,
        }
    }

    /// Creates options from generator configuration.
    #[must_use]
    pub const fn from_config(config: &GeneratorConfig) -> Self {
        Self {
            mode: config.write_mode,
            atomic: config.atomic_writes,
        }
    }

    /// Sets the write mode.
    #[must_use]
    pub const fn with_mode(mut self, mode: WriteMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets whether replace mode writes atomically.
    #[must_use]
    pub const fn with_atomic_writes(mut self, atomic: bool) -> Self {
        self.atomic = atomic;
        self
    }
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Writes every file of `code` into `output_dir`.
///
/// Returns the paths written, in file order.
///
/// # Errors
///
/// Returns error if:
/// - `output_dir` does not exist or is not a directory
/// - a file name is absolute or contains `..`
/// - any create, write, flush, sync or rename fails
pub fn write_generated(
    code: &GeneratedCode,
    output_dir: impl AsRef<Path>,
    options: &ExportOptions,
) -> Result<Vec<PathBuf>> {
    let dir = output_dir.as_ref();
    if !dir.is_dir() {
        return Err(FilesError::DirectoryNotFound {
            path: dir.display().to_string(),
        });
    }

    let mut written = Vec::with_capacity(code.file_count());
    for file in code.files() {
        let path = dir.join(checked_relative(file.path())?);
        write_file(&path, file.content(), options)?;
        debug!(path = %path.display(), bytes = file.content().len(), mode = options.mode.as_str(), "wrote file");
        written.push(path);
    }

    info!(
        files = written.len(),
        dir = %dir.display(),
        mode = options.mode.as_str(),
        "generated files written"
    );
    Ok(written)
}

fn checked_relative(name: &str) -> Result<&Path> {
    let path = Path::new(name);
    let plain = !name.is_empty()
        && path
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
    if plain {
        Ok(path)
    } else {
        Err(FilesError::InvalidPath {
            path: name.to_string(),
        })
    }
}

fn write_file(path: &Path, content: &str, options: &ExportOptions) -> Result<()> {
    match options.mode {
        WriteMode::Append => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| io_error("open", path, e))?;
            write_buffered(file, path, content)
        }
        WriteMode::Replace if options.atomic => {
            let temp_path = temp_path_for(path);
            let file = File::create(&temp_path).map_err(|e| io_error("create", &temp_path, e))?;
            if let Err(e) = write_buffered(file, &temp_path, content) {
                let _ = fs::remove_file(&temp_path);
                return Err(e);
            }
            fs::rename(&temp_path, path).map_err(|e| io_error("rename", &temp_path, e))
        }
        WriteMode::Replace => {
            let file = File::create(path).map_err(|e| io_error("create", path, e))?;
            write_buffered(file, path, content)
        }
    }
}

fn write_buffered(file: File, path: &Path, content: &str) -> Result<()> {
    let mut writer = BufWriter::new(file);
    writer
        .write_all(content.as_bytes())
        .map_err(|e| io_error("write", path, e))?;
    writer.flush().map_err(|e| io_error("flush", path, e))?;
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| io_error("sync", path, e))
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

fn io_error(operation: &'static str, path: &Path, source: std::io::Error) -> FilesError {
    FilesError::Io {
        operation,
        path: path.display().to_string(),
        source,
    }
}
