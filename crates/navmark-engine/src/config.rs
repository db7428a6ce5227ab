//! Engine Configuration

use std::io;
use std::path::PathBuf;

use crate::engine::ExportError;

/// Export configuration options
#[derive(Debug, Clone)]
pub struct Config {
    /// Title of the generated document
    pub title: String,

    /// Description of the generated document
    pub description: String,

    /// Directory receiving both output files
    pub output_dir: PathBuf,

    /// File name of the pure JSON output
    pub json_file_name: String,

    /// File name of the script wrapper output
    pub script_file_name: String,

    /// Global the script wrapper assigns the document to
    pub script_global: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "My Navigation".to_string(),
            description: "Generated from browser bookmarks".to_string(),
            output_dir: PathBuf::from("."),
            json_file_name: "data.json".to_string(),
            script_file_name: "data.js".to_string(),
            script_global: "window.NAV_DATA".to_string(),
        }
    }
}

impl Config {
    /// Replace the output directory
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Default configuration writing next to the running executable
    pub fn beside_executable() -> Result<Self, ExportError> {
        Ok(Self::default().with_output_dir(executable_dir()?))
    }

    pub fn json_path(&self) -> PathBuf {
        self.output_dir.join(&self.json_file_name)
    }

    pub fn script_path(&self) -> PathBuf {
        self.output_dir.join(&self.script_file_name)
    }
}

/// Directory containing the running executable
pub fn executable_dir() -> Result<PathBuf, ExportError> {
    let exe = std::env::current_exe().map_err(ExportError::ExecutableDir)?;
    exe.parent()
        .map(|dir| dir.to_path_buf())
        .ok_or_else(|| ExportError::ExecutableDir(io::Error::other("executable has no parent directory")))
}
