//! The bundled template set.
//! Files under `templates/` are compiled into the binary and exposed as a
//! read-only, path-ordered collection of [`TemplateEntry`] records.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::LazyLock;

use log::debug;
use rust_embed::RustEmbed;

use crate::constants::{RENDERED_KINDS, TEMPLATE_SUFFIX};
use crate::error::{Error, Result};

#[derive(RustEmbed)]
#[folder = "templates/"]
struct Assets;

static EMBEDDED: LazyLock<TemplateStore> = LazyLock::new(|| {
    let store = TemplateStore::from_entries(Assets::iter().filter_map(|path| {
        Assets::get(&path).map(|file| (path.into_owned(), file.data))
    }));
    debug!("Loaded {} bundled template entries", store.len());
    store
});

/// One bundled file.
#[derive(Debug, Clone)]
pub struct TemplateEntry {
    path: String,
    is_template: bool,
    content: Cow<'static, [u8]>,
}

impl TemplateEntry {
    pub fn new<P: Into<String>, C: Into<Cow<'static, [u8]>>>(path: P, content: C) -> Self {
        let path = path.into();
        let is_template = is_template_path(&path);
        Self {
            path,
            is_template,
            content: content.into(),
        }
    }

    /// Slash-separated path relative to the template root.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Whether the entry is rendered rather than copied.
    pub fn is_template(&self) -> bool {
        self.is_template
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Path the entry is written to, with the template suffix removed.
    pub fn output_path(&self) -> &str {
        strip_template_suffix(&self.path)
    }
}

/// Immutable, path-ordered collection of template entries.
#[derive(Debug, Clone, Default)]
pub struct TemplateStore {
    entries: BTreeMap<String, TemplateEntry>,
}

impl TemplateStore {
    /// The set compiled into the binary. Loaded once per process.
    pub fn embedded() -> &'static TemplateStore {
        &EMBEDDED
    }

    /// Builds a store from `(path, content)` pairs. Later duplicates win.
    pub fn from_entries<I, P, C>(entries: I) -> Self
    where
        I: IntoIterator<Item = (P, C)>,
        P: Into<String>,
        C: Into<Cow<'static, [u8]>>,
    {
        let entries = entries
            .into_iter()
            .map(|(path, content)| {
                let entry = TemplateEntry::new(path, content);
                (entry.path.clone(), entry)
            })
            .collect();
        Self { entries }
    }

    /// Entries in lexicographic path order.
    pub fn list(&self) -> impl Iterator<Item = &TemplateEntry> {
        self.entries.values()
    }

    /// Raw bytes of the entry at `path`.
    ///
    /// # Errors
    /// * `Error::NotFound` if no entry has that path
    pub fn read(&self, path: &str) -> Result<&[u8]> {
        self.entries
            .get(path)
            .map(TemplateEntry::content)
            .ok_or_else(|| Error::NotFound {
                path: path.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Returns true for `name.<kind>.tmpl` where `<kind>` is a rendered kind.
/// A bare `name.tmpl` is not a template; it is only renamed.
pub fn is_template_path(path: &str) -> bool {
    path.strip_suffix(TEMPLATE_SUFFIX)
        .and_then(|stem| Path::new(stem).extension())
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| RENDERED_KINDS.contains(&ext))
}

pub fn strip_template_suffix(path: &str) -> &str {
    path.strip_suffix(TEMPLATE_SUFFIX).unwrap_or(path)
}
