use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

/// Trait for types that can be emitted as a source file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file below `base`, honoring its overwrite rule
    fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);
        write_with_rules(&path, self.rules().overwrite, || self.render())
    }
}

fn write_with_rules(
    path: &Path,
    overwrite: Overwrite,
    content: impl FnOnce() -> String,
) -> Result<WriteResult> {
    if overwrite == Overwrite::IfMissing && path.exists() {
        tracing::debug!(path = %path.display(), "file exists, skipping");
        return Ok(WriteResult::Skipped);
    }
    write_file(path, &content())?;
    Ok(WriteResult::Written)
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create directory {}", parent.display()))?;
    }
    std::fs::write(path, content)
        .wrap_err_with(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was skipped (already exists)
    Skipped,
}

/// A rendered source file ready to be written
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
    rules: FileRules,
}

impl File {
    /// Create a new file that is always overwritten
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            rules: FileRules::default(),
        }
    }

    /// Replace the write rules
    pub fn with_rules(mut self, rules: FileRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn rules(&self) -> &FileRules {
        &self.rules
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the file according to its rules
    pub fn write(&self) -> Result<WriteResult> {
        write_with_rules(&self.path, self.rules.overwrite, || self.content.clone())
    }
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileRules {
    pub overwrite: Overwrite,
}

impl FileRules {
    pub fn new(overwrite: Overwrite) -> Self {
        Self { overwrite }
    }
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite
    #[default]
    Always,
    /// Only create if the file doesn't exist
    IfMissing,
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    struct Greeting;

    impl GeneratedFile for Greeting {
        fn path(&self, base: &Path) -> PathBuf {
            base.join("com").join("foo").join("Greeting.java")
        }

        fn rules(&self) -> FileRules {
            FileRules::new(Overwrite::IfMissing)
        }

        fn render(&self) -> String {
            "package com.foo;\n".to_string()
        }
    }

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("Test.java");

        write_file(&path, "nested").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_file_write_always_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Test.java");
        fs::write(&path, "original").unwrap();

        let result = File::new(&path, "updated").write().unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "updated");
    }

    #[test]
    fn test_file_write_if_missing_creates_new() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("New.java");

        let file = File::new(&path, "new content").with_rules(FileRules::new(Overwrite::IfMissing));

        assert_eq!(file.write().unwrap(), WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "new content");
    }

    #[test]
    fn test_file_write_if_missing_skips_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Existing.java");
        fs::write(&path, "original").unwrap();

        let file =
            File::new(&path, "should not write").with_rules(FileRules::new(Overwrite::IfMissing));

        assert_eq!(file.write().unwrap(), WriteResult::Skipped);
        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
    }

    #[test]
    fn test_generated_file_write() {
        let temp = TempDir::new().unwrap();

        assert_eq!(Greeting.write(temp.path()).unwrap(), WriteResult::Written);
        assert_eq!(Greeting.write(temp.path()).unwrap(), WriteResult::Skipped);

        let written = temp.path().join("com/foo/Greeting.java");
        assert_eq!(fs::read_to_string(written).unwrap(), "package com.foo;\n");
    }

    #[test]
    fn test_file_exists() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Test.java");

        let file = File::new(&path, "content");
        assert!(!file.exists());

        fs::write(&path, "content").unwrap();
        assert!(file.exists());
    }
}
