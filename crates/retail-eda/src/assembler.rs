//! Assembles the retail sales EDA notebook.

use crate::content;
use crate::ipynb::{JupyterCell, JupyterNotebook};

/// Builder for notebooks with Python kernel metadata.
#[derive(Debug, Default)]
pub struct NotebookBuilder {
    notebook: JupyterNotebook,
}

impl NotebookBuilder {
    /// Create a builder for an empty notebook.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a markdown cell.
    pub fn markdown(mut self, text: &str) -> Self {
        self.notebook.cells.push(JupyterCell::markdown(text));
        self
    }

    /// Append an unexecuted code cell.
    pub fn code(mut self, text: &str) -> Self {
        self.notebook.cells.push(JupyterCell::code(text));
        self
    }

    pub fn finish(self) -> JupyterNotebook {
        self.notebook
    }
}

/// Build the retail sales EDA notebook.
///
/// The result depends only on literal content, so every call returns an
/// identical notebook.
pub fn build() -> JupyterNotebook {
    let notebook = NotebookBuilder::new()
        .markdown(content::TITLE)
        .markdown(content::SETUP_HEADER)
        .code(content::SETUP)
        .markdown(content::LOAD_HEADER)
        .code(content::LOAD)
        .markdown(content::CLEANING_HEADER)
        .code(content::CLEANING)
        .markdown(content::ANALYSIS_HEADER)
        .code(content::BASIC_STATS)
        .code(content::MONTHLY_REVENUE)
        .code(content::WEEKDAY_REVENUE)
        .code(content::TOP_PRODUCTS)
        .code(content::COUNTRY_SALES)
        .markdown(content::INSIGHTS_HEADER)
        .code(content::INSIGHTS)
        .finish();

    tracing::debug!(
        "Assembled notebook: {} markdown, {} code cells",
        notebook.markdown_count(),
        notebook.code_count()
    );

    notebook
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_counts() {
        let notebook = build();
        assert_eq!(notebook.cells.len(), 15);
        assert_eq!(notebook.markdown_count(), 6);
        assert_eq!(notebook.code_count(), 9);
    }

    #[test]
    fn test_build_is_deterministic() {
        assert_eq!(build(), build());
    }

    #[test]
    fn test_title_cell() {
        let notebook = build();
        let first = &notebook.cells[0];
        assert!(!first.is_code());
        assert_eq!(first.source()[0], "# Retail Sales Exploratory Data Analysis\n");
        assert_eq!(first.source()[1], "\n");
        assert!(first.source()[2].starts_with("This notebook analyzes online retail sales data"));
    }

    #[test]
    fn test_section_order() {
        let headers: Vec<String> = build()
            .cells
            .iter()
            .filter(|c| !c.is_code())
            .skip(1)
            .map(JupyterCell::text)
            .collect();

        assert_eq!(
            headers,
            [
                "## 1. Setup and Imports",
                "## 2. Load Data",
                "## 3. Data Cleaning",
                "## 4. Exploratory Analysis",
                "## 5. Insights and Conclusions",
            ]
        );
    }

    #[test]
    fn test_code_cells_unexecuted() {
        for cell in build().cells {
            if let JupyterCell::Code {
                execution_count,
                outputs,
                metadata,
                ..
            } = cell
            {
                assert!(execution_count.is_none());
                assert!(outputs.is_empty());
                assert!(metadata.is_empty());
            }
        }
    }

    #[test]
    fn test_last_line_has_no_newline() {
        for cell in build().cells {
            let source = cell.source();
            let (last, rest) = source.split_last().unwrap();
            assert!(!last.ends_with('\n'), "trailing newline in {last:?}");
            assert!(rest.iter().all(|l| l.ends_with('\n')));
        }
    }

    #[test]
    fn test_setup_cell_lines() {
        let notebook = build();
        let setup = notebook.cells[2].source();
        assert_eq!(setup.len(), 11);
        assert_eq!(setup[3], "import pandas as pd\n");
        assert_eq!(setup[10], "plt.rcParams[\"figure.figsize\"] = (12,6)");
    }

    #[test]
    fn test_builder_appends_in_order() {
        let notebook = NotebookBuilder::new().code("a").markdown("b").finish();
        assert!(notebook.cells[0].is_code());
        assert_eq!(notebook.cells[1].text(), "b");
        assert_eq!(notebook.metadata.kernelspec.name, "python3");
    }
}
