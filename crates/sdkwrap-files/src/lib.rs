//! Output writing for generated wrapper files.
//!
//! Writes a [`GeneratedCode`](sdkwrap_codegen::GeneratedCode) set into an
//! existing directory. Each file goes through one buffered handle that is
//! flushed and synced before the call returns.
//!
//! # Examples
//!
//! ```
//! use sdkwrap_codegen::{GeneratedCode, GeneratedFile};
//! use sdkwrap_files::{ExportOptions, write_generated};
//! # use tempfile::TempDir;
//!
//! # let temp = TempDir::new().unwrap();
//! # let output_dir = temp.path();
//! let mut code = GeneratedCode::new();
//! code.add_file(GeneratedFile {
//!     path: "SdkWrappers.DcimApi.Generated.ps1".to_string(),
//!     content: "function ReadDevice {}\n\n".to_string(),
//! });
//!
//! let written = write_generated(&code, output_dir, &ExportOptions::default()).unwrap();
//! assert_eq!(written.len(), 1);
//! assert!(output_dir.join("SdkWrappers.DcimApi.Generated.ps1").exists());
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod types;
pub mod writer;

pub use types::{FilesError, Result};
pub use writer::{ExportOptions, write_generated};
