use std::path::{Path, PathBuf};

/// Resolve a model artifact by probing an ordered candidate list.
///
/// The first existing path wins; `None` means no candidate exists. Loading
/// and deserialization are the caller's concern — this module only answers
/// "where is the file".
pub fn locate(candidates: &[PathBuf]) -> Option<PathBuf> {
    candidates.iter().find(|p| p.exists()).cloned()
}

/// Default search order for an artifact named `name`:
///
/// 1. The working directory
/// 2. `models/` under the working directory
/// 3. The parent directory (development layouts keep artifacts beside the
///    workspace root)
/// 4. The per-user cache directory (`~/.cache/maskscan/models/` on Linux,
///    platform equivalents elsewhere)
pub fn default_candidates(name: &str) -> Vec<PathBuf> {
    let mut candidates = vec![
        PathBuf::from(name),
        Path::new("models").join(name),
        Path::new("..").join(name),
    ];
    if let Some(dir) = user_cache_dir() {
        candidates.push(dir.join(name));
    }
    candidates
}

fn user_cache_dir() -> Option<PathBuf> {
    dirs::cache_dir().map(|d| d.join("maskscan").join("models"))
}
