//! Member sheet path resolution.

use std::path::{Path, PathBuf};

/// Environment variable for overriding the member sheet location.
pub const MEMBERS_ENV_VAR: &str = "ATLAS_MEMBERS_CSV";

/// Member sheet location relative to the working directory.
pub const DEFAULT_MEMBERS_PATH: &str = "data/members.csv";

/// Get the member sheet path.
///
/// Resolution order:
/// 1. an explicit path (the `--members` flag)
/// 2. `ATLAS_MEMBERS_CSV` environment variable
/// 3. `data/members.csv` under the current directory
pub fn resolve_members_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    if let Some(path) = std::env::var_os(MEMBERS_ENV_VAR) {
        return PathBuf::from(path);
    }
    PathBuf::from(DEFAULT_MEMBERS_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins() {
        let path = resolve_members_path(Some(Path::new("/tmp/sheet.csv")));
        assert_eq!(path, PathBuf::from("/tmp/sheet.csv"));
    }
}
