//!
//! Benchmark output.
//!

pub mod error;
pub mod format;

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use crate::model::benchmark::Benchmark;

use self::error::Error;

///
/// Writes `content` to `path`, replacing any previous file.
///
/// The content goes to a temporary sibling first, which is then renamed over the target,
/// so the target is either fully written or left untouched.
///
pub fn write_atomically(path: &Path, content: &[u8]) -> Result<(), Error> {
    write_through_temporary(path, |file| file.write_all(content))
}

///
/// Creates the temporary sibling of `path`, fills it with `write` and renames it over
/// `path`. The temporary file is removed if any step fails.
///
fn write_through_temporary<W>(path: &Path, write: W) -> Result<(), Error>
where
    W: FnOnce(&mut File) -> std::io::Result<()>,
{
    let temporary_path = temporary_path(path);
    let result = File::create(temporary_path.as_path())
        .and_then(|mut file| {
            write(&mut file)?;
            file.sync_all()
        })
        .and_then(|()| std::fs::rename(temporary_path.as_path(), path));
    result.map_err(|error| {
        let _ = std::fs::remove_file(temporary_path.as_path());
        Error::Write {
            error,
            path: path.to_path_buf(),
        }
    })
}

///
/// Writes the benchmark as pretty-printed JSON.
///
pub fn write_json(benchmark: &Benchmark, path: &Path) -> Result<(), Error> {
    let content = serde_json::to_vec_pretty(benchmark)?;
    write_atomically(path, content.as_slice())
}

///
/// Returns the temporary sibling of `path`.
///
fn temporary_path(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{file_name}.tmp"))
}
