pub mod config;
pub mod run;
pub mod theory;

use anyhow::{Context, Result};
use std::path::Path;

/// Write `content` to `output`, or to stdout when no path is given.
pub(crate) fn emit(content: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => std::fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display())),
        None => {
            print!("{content}");
            Ok(())
        }
    }
}
