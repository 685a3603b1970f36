//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use super::Manifest;
use crate::{Error, ParseContext, Result, lower::lower_manifest};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "jgen.toml")
    }
}

impl Manifest {
    /// Parse a jgen.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a jgen.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse and validate a manifest, lowering its units to the source model.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let mut manifest: Manifest =
        toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;

    let ctx = ParseContext::new(content, filename);
    manifest.lowered = lower_manifest(&manifest, &ctx)?;

    tracing::debug!(
        filename,
        units = manifest.lowered.len(),
        "parsed manifest"
    );
    Ok(manifest)
}
