//! Dependency discovery core for the ccppc compilation helper.
//!
//! Given a root C++ source file, walks its quoted `#include` directives
//! transitively, maps every reachable header to its implementation-file
//! counterpart and returns the deduplicated set of files the compiler
//! needs alongside the root.

pub mod convention;
pub mod resolve;
pub mod scan;

pub use convention::{header_to_impl, impl_to_header, is_header, is_implementation};
pub use resolve::collect_dependencies;
pub use scan::quoted_include;
