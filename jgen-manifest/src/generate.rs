//! Writing lowered compilation units as `.java` files.

use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};
use jgen_core::{File, FileRules, GeneratedFile, Overwrite, WriteResult, package_to_path};
use jgen_dom::{CompilationUnit, builder::Indent};

use crate::Manifest;

/// A compilation unit paired with the settings it is written with.
#[derive(Debug, Clone)]
pub struct JavaSource<'a> {
    unit: &'a CompilationUnit,
    indent: Indent,
    overwrite: Overwrite,
}

impl<'a> JavaSource<'a> {
    pub fn new(unit: &'a CompilationUnit) -> Self {
        Self {
            unit,
            indent: Indent::JAVA,
            overwrite: Overwrite::Always,
        }
    }

    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_overwrite(mut self, overwrite: Overwrite) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn unit(&self) -> &'a CompilationUnit {
        self.unit
    }
}

impl GeneratedFile for JavaSource<'_> {
    /// `<base>/<package dirs>/<Type>.java`
    fn path(&self, base: &Path) -> PathBuf {
        let ty = self.unit.ty();
        base.join(package_to_path(ty.package_name()))
            .join(format!("{}.java", ty.base_short_name()))
    }

    fn rules(&self) -> FileRules {
        FileRules::new(self.overwrite)
    }

    fn render(&self) -> String {
        self.unit.render_with_indent(self.indent)
    }
}

/// Outcome of writing one source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub result: WriteResult,
}

impl Manifest {
    /// Sources for every unit, configured from `[output]`.
    pub fn sources(&self) -> Vec<JavaSource<'_>> {
        let indent = self.output.indent.to_indent();
        let overwrite = Overwrite::from(self.output.overwrite);
        self.compilation_units()
            .iter()
            .map(|unit| {
                JavaSource::new(unit)
                    .with_indent(indent)
                    .with_overwrite(overwrite)
            })
            .collect()
    }

    /// Output directory for a manifest located in `root`.
    pub fn output_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.output.directory)
    }

    /// Render every unit without touching the file system.
    pub fn preview(&self, root: &Path) -> Vec<File> {
        let dir = self.output_dir(root);
        self.sources()
            .iter()
            .map(|source| File::new(source.path(&dir), source.render()).with_rules(source.rules()))
            .collect()
    }

    /// Write every unit below the output directory of `root`.
    pub fn generate(&self, root: &Path) -> Result<Vec<WrittenFile>> {
        let dir = self.output_dir(root);
        let mut written = Vec::new();

        for source in self.sources() {
            let path = source.path(&dir);
            let result = source
                .write(&dir)
                .wrap_err_with(|| format!("failed to generate {}", source.unit().ty()))?;
            match result {
                WriteResult::Written => tracing::info!(path = %path.display(), "wrote"),
                WriteResult::Skipped => tracing::info!(path = %path.display(), "kept existing"),
            }
            written.push(WrittenFile { path, result });
        }

        Ok(written)
    }
}
