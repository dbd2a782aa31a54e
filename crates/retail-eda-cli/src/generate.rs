//! Notebook generation command.

use std::path::Path;
use std::time::Instant;

use anyhow::Context;
use retail_eda::{SUCCESS_MESSAGE, create_notebook};

/// Write the retail EDA notebook to `output` and report success on stdout.
pub fn execute(output: &Path) -> anyhow::Result<()> {
    let start = Instant::now();

    let notebook = create_notebook(output)
        .with_context(|| format!("Could not create notebook at {}", output.display()))?;

    tracing::debug!(
        "Generated {} markdown and {} code cells in {:.2}ms",
        notebook.markdown_count(),
        notebook.code_count(),
        start.elapsed().as_secs_f64() * 1000.0
    );

    println!("{}", SUCCESS_MESSAGE);
    Ok(())
}
