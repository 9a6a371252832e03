//! Recursive discovery of local include dependencies.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::convention::{header_to_impl, is_header};
use crate::scan::quoted_include;

/// Collect the implementation files the root source file depends on.
///
/// Walks quoted includes depth-first from `root`, mapping each reachable
/// header to its implementation counterpart. Relative include names resolve
/// against the directory of the file that contains them, so nested layouts
/// work regardless of the working directory. The returned set never
/// contains `root` itself.
///
/// A header that cannot be found is reported on stdout and its branch
/// skipped; any other read failure is propagated.
pub fn collect_dependencies(root: &Path) -> io::Result<HashSet<PathBuf>> {
    let mut visited = HashSet::new();
    let mut dependencies = visit(root, &mut visited)?;
    dependencies.remove(root);
    Ok(dependencies)
}

/// One traversal step: scan `path` and return the implementation files of
/// every header it reaches. `visited` holds every path the traversal has
/// entered; a path already seen contributes nothing, which bounds the
/// recursion on cyclic include graphs.
fn visit(path: &Path, visited: &mut HashSet<PathBuf>) -> io::Result<HashSet<PathBuf>> {
    let mut dependencies = HashSet::new();

    if !visited.insert(path.to_path_buf()) {
        return Ok(dependencies);
    }

    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            println!(
                "Warning: Dependency file {} not found. Skipping.",
                path.display()
            );
            return Ok(dependencies);
        }
        Err(e) => return Err(e),
    };

    let base_dir = path.parent().unwrap_or_else(|| Path::new(""));

    for line in source.lines() {
        let Some(name) = quoted_include(line) else {
            continue;
        };
        let include = Path::new(name);
        // Quoted includes of anything but a header (e.g. "config.txt")
        // are not compilable dependencies.
        if !is_header(include) {
            continue;
        }
        let header = if include.is_absolute() {
            include.to_path_buf()
        } else {
            base_dir.join(include)
        };
        // The implementation entry is inserted before the header is opened:
        // a missing header still leaves its counterpart in the set.
        dependencies.insert(header_to_impl(&header));
        dependencies.extend(visit(&header, visited)?);
    }

    Ok(dependencies)
}
