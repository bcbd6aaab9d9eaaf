//! Route file generation for `add route`.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::{
    constants::{PAGES_DIR, ROUTE_EXTENSION, ROUTE_TEMPLATE},
    error::{Error, Result},
    processor::resolve_target_path,
    renderer::TemplateRenderer,
};

/// A parsed route name such as `blog/[slug]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSpec {
    /// Segments with brackets removed; the last one without the route extension.
    pub segments: Vec<String>,
    /// Templ component name, e.g. `BlogSlug`.
    pub identifier: String,
}

impl RouteSpec {
    /// Parses a slash-separated route name.
    ///
    /// # Errors
    /// * `Error::ValidationError` if the name has no usable segments, a
    ///   segment resolves to nothing or to `.`/`..`, or the derived
    ///   identifier does not start with a letter or underscore
    pub fn parse(name: &str) -> Result<Self> {
        let raw_segments: Vec<&str> = name.split('/').filter(|raw| !raw.is_empty()).collect();
        let last = raw_segments.len().saturating_sub(1);

        let segments = raw_segments
            .iter()
            .enumerate()
            .map(|(index, raw)| {
                let segment = if index == last {
                    clean_segment(raw)
                } else {
                    trim_brackets(raw)
                };
                if segment.is_empty() || segment == "." || segment == ".." {
                    Err(Error::ValidationError(format!(
                        "invalid segment '{raw}' in route '{name}'"
                    )))
                } else {
                    Ok(segment.to_string())
                }
            })
            .collect::<Result<Vec<_>>>()?;

        if segments.is_empty() {
            return Err(Error::ValidationError(format!(
                "route '{name}' has no path segments"
            )));
        }

        let identifier = route_identifier(&segments);
        if !identifier
            .chars()
            .next()
            .is_some_and(|c| c.is_alphabetic() || c == '_')
        {
            return Err(Error::ValidationError(format!(
                "route '{name}' does not yield a valid identifier (got '{identifier}')"
            )));
        }

        Ok(Self {
            segments,
            identifier,
        })
    }

    /// Route file path relative to the pages directory.
    pub fn relative_path(&self) -> String {
        format!("{}{ROUTE_EXTENSION}", self.segments.join("/"))
    }
}

fn trim_brackets(raw: &str) -> &str {
    raw.trim_matches(&['[', ']'][..])
}

/// `[slug].templ` -> `slug`
fn clean_segment(raw: &str) -> &str {
    trim_brackets(raw.strip_suffix(ROUTE_EXTENSION).unwrap_or(raw))
}

/// Uppercases the first letter of each alphanumeric token and joins them.
/// The remaining letters keep their case: `api-v2` -> `ApiV2`, `FAQ` -> `FAQ`.
fn capitalize_tokens(segment: &str) -> String {
    segment
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(|token| {
            let mut chars = token.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// Concatenates the capitalized segments: `["blog", "[slug]"]` -> `BlogSlug`.
pub fn route_identifier<S: AsRef<str>>(segments: &[S]) -> String {
    segments
        .iter()
        .map(|segment| capitalize_tokens(clean_segment(segment.as_ref())))
        .collect()
}

/// Writes a new route file under `<project_root>/app/pages`.
/// An existing file at the same path is overwritten.
///
/// # Returns
/// * `Result<PathBuf>` - Path of the written route file
pub fn add_route<P: AsRef<Path>>(
    engine: &dyn TemplateRenderer,
    name: &str,
    project_root: P,
) -> Result<PathBuf> {
    let route = RouteSpec::parse(name)?;
    let pages_dir = resolve_target_path(PAGES_DIR, project_root);
    let route_path = resolve_target_path(&route.relative_path(), pages_dir);

    if let Some(parent) = route_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let context = serde_json::json!({ "FunctionName": route.identifier });
    let content = engine.render(ROUTE_TEMPLATE, &context)?;

    if route_path.exists() {
        warn!("Overwriting existing route: {}", route_path.display());
    }
    debug!("Writing route {} to {}", route.identifier, route_path.display());
    fs::write(&route_path, content)?;

    Ok(route_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_segment() {
        assert_eq!(clean_segment("[slug]"), "slug");
        assert_eq!(clean_segment("[[...all]]"), "...all");
        assert_eq!(clean_segment("about.templ"), "about");
        assert_eq!(clean_segment("blog"), "blog");
    }

    #[test]
    fn test_route_identifier() {
        assert_eq!(route_identifier(&["blog", "[slug]"]), "BlogSlug");
        assert_eq!(route_identifier(&["about.templ"]), "About");
        assert_eq!(route_identifier(&["blog-post", "[user_id]"]), "BlogPostUserId");
        assert_eq!(route_identifier(&["a.templ", "b"]), "AB");
    }

    #[test]
    fn test_capitalize_tokens() {
        assert_eq!(capitalize_tokens("API"), "API");
        assert_eq!(capitalize_tokens("aboutUS"), "AboutUS");
        assert_eq!(capitalize_tokens("faq-page"), "FaqPage");
        assert_eq!(capitalize_tokens("...all"), "All");
    }
}
