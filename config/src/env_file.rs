//! Read a project `.env` into a key-value map. Applying to the environment happens in lib.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// `.env` in `override_dir` if given, else in the current directory; `None` when absent.
fn env_file_path(override_dir: Option<&Path>) -> Option<PathBuf> {
    let dir = match override_dir {
        Some(d) => d.to_path_buf(),
        None => std::env::current_dir().ok()?,
    };
    let path = dir.join(".env");
    path.is_file().then_some(path)
}

/// Parses `.env` with the `dotenv` grammar without touching the process environment.
/// A missing file yields an empty map; the first malformed line is an error.
pub fn load_env_map(override_dir: Option<&Path>) -> Result<HashMap<String, String>, dotenv::Error> {
    let Some(path) = env_file_path(override_dir) else {
        return Ok(HashMap::new());
    };
    dotenv::from_path_iter(&path)?.collect()
}
