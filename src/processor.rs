//! Project scaffolding.
//! Turns every bundled template entry into an [`OutputFile`] under the
//! project root, rendering template entries against a [`ScaffoldContext`]
//! and copying the rest byte-for-byte.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Serialize;

use crate::{
    constants::CONVENTION_DIRS,
    error::{Error, Result},
    renderer::TemplateRenderer,
    store::{TemplateEntry, TemplateStore},
};

/// Values available to template entries as `{{ ProjectName }}`,
/// `{{ Author }}` and `{{ Year }}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScaffoldContext {
    pub project_name: String,
    pub author: String,
    pub year: String,
}

impl ScaffoldContext {
    /// Context for `project_name`, stamped with the current local year.
    pub fn new<S: Into<String>>(project_name: S) -> Self {
        Self {
            project_name: project_name.into(),
            author: String::new(),
            year: chrono::Local::now().format("%Y").to_string(),
        }
    }

    pub fn with_author<S: Into<String>>(mut self, author: S) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_year<S: Into<String>>(mut self, year: S) -> Self {
        self.year = year.into();
        self
    }
}

/// A file ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    pub path: PathBuf,
    pub content: Vec<u8>,
}

/// Ensures the output directory is safe to write to.
///
/// # Errors
/// * `Error::ValidationError` if the path is empty
/// * `Error::OutputDirectoryExistsError` if it exists and `force` is false
pub fn ensure_output_dir<P: AsRef<Path>>(output_dir: P, force: bool) -> Result<PathBuf> {
    let output_dir = output_dir.as_ref();
    if output_dir.as_os_str().is_empty() {
        return Err(Error::ValidationError(
            "project name must not be empty".to_string(),
        ));
    }
    if output_dir.exists() && !force {
        return Err(Error::OutputDirectoryExistsError {
            output_dir: output_dir.display().to_string(),
        });
    }
    Ok(output_dir.to_path_buf())
}

/// Joins a slash-separated template path onto `root`.
pub fn resolve_target_path<P: AsRef<Path>>(relative_path: &str, root: P) -> PathBuf {
    relative_path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .fold(root.as_ref().to_path_buf(), |path, segment| path.join(segment))
}

/// Creates the fixed skeleton directories under `root`.
pub fn create_convention_dirs<P: AsRef<Path>>(root: P) -> Result<()> {
    for dir in CONVENTION_DIRS {
        let path = resolve_target_path(dir, root.as_ref());
        debug!("Creating directory: {}", path.display());
        fs::create_dir_all(&path)?;
    }
    Ok(())
}

/// Writes `file`, creating its parent directories first.
pub fn write_output(file: &OutputFile) -> Result<()> {
    if let Some(parent) = file.path.parent() {
        fs::create_dir_all(parent)?;
    }
    debug!("Writing file: {}", file.path.display());
    fs::write(&file.path, &file.content).map_err(Error::IoError)
}

/// Maps template entries onto output files for one project.
pub struct Processor<'a> {
    engine: &'a dyn TemplateRenderer,
    output_root: &'a Path,
    context: serde_json::Value,
}

impl<'a> Processor<'a> {
    pub fn new(
        engine: &'a dyn TemplateRenderer,
        output_root: &'a Path,
        context: &ScaffoldContext,
    ) -> Result<Self> {
        let context = serde_json::to_value(context)
            .map_err(|e| Error::TemplateError(format!("invalid scaffold context: {e}")))?;
        Ok(Self {
            engine,
            output_root,
            context,
        })
    }

    /// Produces the output for a single entry.
    pub fn process(&self, entry: &TemplateEntry) -> Result<OutputFile> {
        debug!("Processing source file: {}", entry.path());
        let path = resolve_target_path(entry.output_path(), self.output_root);

        let content = if entry.is_template() {
            let source = std::str::from_utf8(entry.content()).map_err(|e| {
                Error::TemplateError(format!("'{}' is not valid UTF-8: {e}", entry.path()))
            })?;
            self.engine
                .render(source, &self.context)
                .map_err(|e| match e {
                    Error::TemplateError(msg) => {
                        Error::TemplateError(format!("{}: {msg}", entry.path()))
                    }
                    other => other,
                })?
                .into_bytes()
        } else {
            entry.content().to_vec()
        };

        Ok(OutputFile { path, content })
    }

    /// Produces outputs for every entry in the store, stopping at the
    /// first failure. Nothing touches the disk.
    pub fn plan(&self, store: &TemplateStore) -> Result<Vec<OutputFile>> {
        store.list().map(|entry| self.process(entry)).collect()
    }
}

/// Scaffolds a project into `output_root`.
///
/// All entries are rendered before anything is written, so template errors
/// leave the disk untouched. A failing write stops the run and leaves the
/// files written so far in place.
///
/// # Returns
/// * `Result<Vec<PathBuf>>` - Paths of the written files, in store order
pub fn scaffold<P: AsRef<Path>>(
    engine: &dyn TemplateRenderer,
    store: &TemplateStore,
    output_root: P,
    context: &ScaffoldContext,
    force: bool,
) -> Result<Vec<PathBuf>> {
    let output_root = ensure_output_dir(output_root, force)?;
    let processor = Processor::new(engine, &output_root, context)?;
    let outputs = processor.plan(store)?;

    create_convention_dirs(&output_root)?;
    outputs
        .iter()
        .map(|output| write_output(output).map(|_| output.path.clone()))
        .collect()
}
