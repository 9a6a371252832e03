//! Path conventions distinguishing header and implementation files.
//!
//! The distinction is purely textual: a header and its implementation
//! share directory and base name and differ only in extension
//! (`.hpp` ↔ `.cpp`). Keeping the mapping in one place makes the
//! convention testable instead of being re-spelled at every call site.

use std::path::{Path, PathBuf};

/// Extensions accepted for a compilable C++ source file.
const IMPL_EXTENSIONS: &[&str] = &["cpp", "cxx", "cc", "C"];

/// True if the path names a header file (`.hpp`).
pub fn is_header(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("hpp")
}

/// True if the path names a compilable implementation file.
///
/// The match is case-sensitive: `.C` is accepted, `.c` is not.
pub fn is_implementation(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| IMPL_EXTENSIONS.contains(&ext))
}

/// Map a header path to its implementation counterpart.
///
/// Expects `is_header(path)`. Replaces the `.hpp` extension with `.cpp`,
/// leaving directory and stem untouched.
pub fn header_to_impl(path: &Path) -> PathBuf {
    path.with_extension("cpp")
}

/// Map an implementation path back to its header counterpart
/// (`.cpp` → `.hpp`), the inverse of [`header_to_impl`].
pub fn impl_to_header(path: &Path) -> PathBuf {
    path.with_extension("hpp")
}
