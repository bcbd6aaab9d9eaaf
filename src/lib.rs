//! Hummingbird is a project scaffolding tool for templ + vite web apps.
//! It materializes a project from a bundled template set, generates route
//! pages, and runs the development toolchain.

/// Command-line interface module for the hummingbird application
pub mod cli;

/// Common constants: template markers, convention directories, route template
pub mod constants;

/// Development environment orchestration
pub mod dev;

/// Error types and handling for the hummingbird application
pub mod error;

/// Logger initialisation
pub mod logger;

/// Project scaffolding from the template store
pub mod processor;

/// Placeholder substitution for template entries
pub mod renderer;

/// Route page generation
pub mod route;

/// Bundled template set
pub mod store;
