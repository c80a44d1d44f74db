//! Rendered output types.
//!
//! # Examples
//!
//! ```
//! use sdkwrap_codegen::{GeneratedCode, GeneratedFile};
//!
//! let mut code = GeneratedCode::new();
//! code.add_file(GeneratedFile {
//!     path: "SdkWrappers.DcimApi.Generated.ps1".to_string(),
//!     content: "function ReadDevice {}".to_string(),
//! });
//!
//! assert_eq!(code.file_count(), 1);
//! ```

use serde::{Deserialize, Serialize};

/// All files produced by rendering a generation report.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneratedCode {
    /// Files in output-unit order
    pub files: Vec<GeneratedFile>,
}

impl GeneratedCode {
    /// Creates an empty container.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file.
    pub fn add_file(&mut self, file: GeneratedFile) {
        self.files.push(file);
    }

    /// Returns the number of files.
    #[inline]
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Returns an iterator over the files.
    #[inline]
    pub fn files(&self) -> impl Iterator<Item = &GeneratedFile> {
        self.files.iter()
    }

    /// Total content size in bytes.
    #[must_use]
    pub fn total_bytes(&self) -> usize {
        self.files.iter().map(|f| f.content.len()).sum()
    }
}

/// One rendered file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedFile {
    /// File name relative to the output directory
    pub path: String,
    /// File content
    pub content: String,
}

impl GeneratedFile {
    /// Returns the file path.
    #[inline]
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the file content.
    #[inline]
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_code_accumulates() {
        let mut code = GeneratedCode::new();
        assert_eq!(code.file_count(), 0);

        code.add_file(GeneratedFile {
            path: "a.ps1".to_string(),
            content: "abc".to_string(),
        });
        code.add_file(GeneratedFile {
            path: "b.ps1".to_string(),
            content: "de".to_string(),
        });

        assert_eq!(code.file_count(), 2);
        assert_eq!(code.total_bytes(), 5);
        let paths: Vec<_> = code.files().map(GeneratedFile::path).collect();
        assert_eq!(paths, vec!["a.ps1", "b.ps1"]);
    }
}
