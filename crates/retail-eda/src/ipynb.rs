//! Jupyter notebook (.ipynb) model and serialization.
//!
//! Field order in every struct is the key order Jupyter itself writes.

use std::ffi::OsString;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;

use crate::error::{NotebookError, NotebookResult};

/// Notebook format major version.
pub const NBFORMAT: u32 = 4;

/// Notebook format minor version.
pub const NBFORMAT_MINOR: u32 = 4;

/// Indentation used when serializing notebooks.
const INDENT: &[u8] = b" ";

/// Per-cell metadata. Always empty for generated cells.
pub type CellMetadata = serde_json::Map<String, serde_json::Value>;

/// A Jupyter notebook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JupyterNotebook {
    /// Notebook cells
    pub cells: Vec<JupyterCell>,

    /// Notebook metadata
    pub metadata: JupyterMetadata,

    /// Format version (always 4)
    pub nbformat: u32,

    /// Minor format version
    pub nbformat_minor: u32,
}

/// Jupyter notebook metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JupyterMetadata {
    /// Kernel specification
    pub kernelspec: KernelSpec,

    /// Language info
    pub language_info: LanguageInfo,
}

/// Kernel specification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KernelSpec {
    /// Display name
    pub display_name: String,

    /// Language
    pub language: String,

    /// Kernel name
    pub name: String,
}

/// Language information.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageInfo {
    /// Editor highlighting mode
    pub codemirror_mode: CodemirrorMode,

    /// File extension
    pub file_extension: String,

    /// MIME type
    pub mimetype: String,

    /// Language name
    pub name: String,

    /// Exporter used by nbconvert
    pub nbconvert_exporter: String,

    /// Pygments lexer name
    pub pygments_lexer: String,

    /// Version
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodemirrorMode {
    pub name: String,
    pub version: u32,
}

/// A Jupyter cell.
///
/// Code cells are never executed here, so `outputs` stays empty and
/// `execution_count` is written as an explicit `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cell_type", rename_all = "lowercase")]
pub enum JupyterCell {
    Markdown {
        metadata: CellMetadata,
        source: Vec<String>,
    },
    Code {
        execution_count: Option<u32>,
        metadata: CellMetadata,
        outputs: Vec<serde_json::Value>,
        source: Vec<String>,
    },
}

impl JupyterCell {
    /// Create a markdown cell from a block of text.
    pub fn markdown(text: &str) -> Self {
        Self::Markdown {
            metadata: CellMetadata::new(),
            source: source_lines(text),
        }
    }

    /// Create an unexecuted code cell from a block of text.
    pub fn code(text: &str) -> Self {
        Self::Code {
            execution_count: None,
            metadata: CellMetadata::new(),
            outputs: Vec::new(),
            source: source_lines(text),
        }
    }

    /// Source lines, each but the last ending in `\n`.
    pub fn source(&self) -> &[String] {
        match self {
            Self::Markdown { source, .. } | Self::Code { source, .. } => source,
        }
    }

    /// The cell's text with lines joined back together.
    pub fn text(&self) -> String {
        self.source().concat()
    }

    pub fn is_code(&self) -> bool {
        matches!(self, Self::Code { .. })
    }
}

/// Split a block of text into notebook source lines.
///
/// Lines keep their terminator; the final line has none. Empty text yields
/// no lines.
fn source_lines(text: &str) -> Vec<String> {
    text.split_inclusive('\n').map(str::to_string).collect()
}

impl JupyterNotebook {
    /// Create a new empty notebook.
    pub fn new() -> Self {
        Self {
            cells: Vec::new(),
            metadata: JupyterMetadata::default(),
            nbformat: NBFORMAT,
            nbformat_minor: NBFORMAT_MINOR,
        }
    }

    /// Number of markdown cells.
    pub fn markdown_count(&self) -> usize {
        self.cells.len() - self.code_count()
    }

    /// Number of code cells.
    pub fn code_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_code()).count()
    }

    /// Serialize to indented JSON, without a trailing newline.
    pub fn to_json(&self) -> NotebookResult<String> {
        let mut buf = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
        self.serialize(&mut serializer)?;
        // serde_json only ever emits valid UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Write the notebook to a file, replacing any existing one.
    ///
    /// Missing parent directories are created. The JSON goes to a sibling
    /// temp file that is renamed over `path` once fully synced, so a failed
    /// write never leaves a truncated notebook behind.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> NotebookResult<()> {
        let path = path.as_ref();
        let json = self.to_json()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| NotebookError::write(path, e))?;
        }

        // create_new: never clobber a file that happens to share the temp name
        let temp_path = temp_path_for(path);
        let file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&temp_path)
            .map_err(|e| NotebookError::write(path, e))?;

        if let Err(e) = write_then_rename(file, &temp_path, path, json.as_bytes()) {
            let _ = fs::remove_file(&temp_path);
            return Err(NotebookError::write(path, e));
        }

        tracing::debug!("Wrote {} bytes to {}", json.len(), path.display());
        Ok(())
    }

    /// Read a notebook from a file.
    pub fn read_from_file(path: impl AsRef<Path>) -> NotebookResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| NotebookError::ReadError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let notebook: Self = serde_json::from_str(&content)?;
        Ok(notebook)
    }
}

impl Default for JupyterNotebook {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for JupyterMetadata {
    fn default() -> Self {
        Self {
            kernelspec: KernelSpec {
                display_name: "Python 3".to_string(),
                language: "python".to_string(),
                name: "python3".to_string(),
            },
            language_info: LanguageInfo {
                codemirror_mode: CodemirrorMode {
                    name: "ipython".to_string(),
                    version: 3,
                },
                file_extension: ".py".to_string(),
                mimetype: "text/x-python".to_string(),
                name: "python".to_string(),
                nbconvert_exporter: "python".to_string(),
                pygments_lexer: "ipython3".to_string(),
                version: "3.8.5".to_string(),
            },
        }
    }
}

/// `out.ipynb` -> `.out.ipynb.<pid>.tmp`, next to the target.
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(path.file_name().unwrap_or_default());
    name.push(format!(".{}.tmp", std::process::id()));
    path.with_file_name(name)
}

fn write_then_rename(
    mut file: fs::File,
    temp_path: &Path,
    path: &Path,
    bytes: &[u8],
) -> io::Result<()> {
    file.write_all(bytes)?;
    file.sync_all()?;
    drop(file);
    fs::rename(temp_path, path)
}
