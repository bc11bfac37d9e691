//! Write a sample experiment file to get started.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::config::SAMPLE_EXPERIMENT;
use crate::{Error, Result};

/// Write the sample experiment to `path`. Refuses to overwrite.
pub fn run(path: &Path) -> Result<()> {
    if path.exists() {
        return Err(Error::InvalidArgument(format!(
            "{} already exists",
            path.display()
        )));
    }

    fs::write(path, SAMPLE_EXPERIMENT)?;
    info!(path = %path.display(), "Sample experiment written");
    println!("Sample experiment written to {}", path.display());
    Ok(())
}
