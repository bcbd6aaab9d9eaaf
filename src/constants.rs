//! Common constants used throughout the hummingbird application.

/// Suffix marking a bundled entry as a template source.
pub const TEMPLATE_SUFFIX: &str = ".tmpl";

/// Extensions (before the template suffix) whose entries are rendered
/// rather than copied, e.g. `index.templ.tmpl` or `main.go.tmpl`.
pub const RENDERED_KINDS: [&str; 2] = ["templ", "go"];

/// Directories every scaffolded project gets, whether or not a template
/// entry lives in them.
pub const CONVENTION_DIRS: [&str; 4] = ["app/pages", "app/components", "assets", "public"];

/// Directory, relative to the project root, that holds route files.
pub const PAGES_DIR: &str = "app/pages";

/// Extension of generated route files.
pub const ROUTE_EXTENSION: &str = ".templ";

/// Inline template used by `add route`.
pub const ROUTE_TEMPLATE: &str = r#"templ {{ FunctionName }}() {
  <div>
    <h1>{{ FunctionName }}</h1>
    <p>This is the '{{ FunctionName }}' route.</p>
  </div>
}
"#;
