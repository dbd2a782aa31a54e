//! Generator for the retail sales exploratory data analysis notebook.
//!
//! # Architecture
//!
//! ```text
//! content (literal cell text) ─────► build() ─────► JupyterNotebook ─────► serialize_and_write() ─────► retail-sales-eda.ipynb
//! ```

mod assembler;
mod content;
mod error;
mod ipynb;

pub use assembler::{NotebookBuilder, build};
pub use error::{NotebookError, NotebookResult};
pub use ipynb::{
    CellMetadata, CodemirrorMode, JupyterCell, JupyterMetadata, JupyterNotebook, KernelSpec,
    LanguageInfo, NBFORMAT, NBFORMAT_MINOR,
};

use std::path::Path;

/// Path the notebook is written to when none is given.
pub const DEFAULT_OUTPUT_PATH: &str = "retail-sales-eda.ipynb";

/// Line printed once the notebook has been written.
pub const SUCCESS_MESSAGE: &str = "Notebook created successfully!";

/// Serialize a notebook and write it to `path`, replacing any existing file.
pub fn serialize_and_write(
    notebook: &JupyterNotebook,
    path: impl AsRef<Path>,
) -> NotebookResult<()> {
    let path = path.as_ref();
    notebook.write_to_file(path)?;

    tracing::info!("Wrote {} ({} cells)", path.display(), notebook.cells.len());

    Ok(())
}

/// Build the retail EDA notebook and write it to `path`.
pub fn create_notebook(path: impl AsRef<Path>) -> NotebookResult<JupyterNotebook> {
    let notebook = build();
    serialize_and_write(&notebook, path)?;
    Ok(notebook)
}
