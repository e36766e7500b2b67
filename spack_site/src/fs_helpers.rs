//! Filesystem helpers built on `cap_std` directory handles.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::{Dir, OpenOptions};
use std::io::Write;

use crate::{SiteError, SiteResult};

/// Opens `path`, creating it and any missing parents first.
pub(crate) fn ensure_dir(path: &Utf8Path) -> SiteResult<Dir> {
    match Dir::open_ambient_dir(path, ambient_authority()) {
        Ok(dir) => Ok(dir),
        Err(open_err) if open_err.kind() == std::io::ErrorKind::NotFound => {
            Dir::create_ambient_dir_all(path, ambient_authority())
                .map_err(|io_err| SiteError::io(path, io_err))?;
            Dir::open_ambient_dir(path, ambient_authority())
                .map_err(|io_err| SiteError::io(path, io_err))
        }
        Err(open_err) => Err(SiteError::io(path, open_err)),
    }
}

/// Writes `contents` to `file_name` inside `dir`, truncating any existing
/// file. `dir_path` is only used to report the written path.
pub(crate) fn write_in_dir(
    dir: &Dir,
    dir_path: &Utf8Path,
    file_name: &str,
    contents: &str,
) -> SiteResult<Utf8PathBuf> {
    let file_path = dir_path.join(file_name);
    let mut file = dir
        .open_with(
            file_name,
            OpenOptions::new().write(true).create(true).truncate(true),
        )
        .map_err(|io_err| SiteError::io(&file_path, io_err))?;
    file.write_all(contents.as_bytes())
        .map_err(|io_err| SiteError::io(&file_path, io_err))?;
    tracing::debug!(path = %file_path, bytes = contents.len(), "wrote configuration file");
    Ok(file_path)
}

/// Writes `contents` to `path` through a handle on its parent directory.
///
/// The parent must already exist; a bare file name is resolved against the
/// current directory.
pub(crate) fn write_file(path: &Utf8Path, contents: &str) -> SiteResult<Utf8PathBuf> {
    let Some(file_name) = path.file_name() else {
        return Err(SiteError::io(
            path,
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "destination has no file name",
            ),
        ));
    };
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let dir = Dir::open_ambient_dir(parent, ambient_authority())
        .map_err(|io_err| SiteError::io(parent, io_err))?;
    write_in_dir(&dir, parent, file_name, contents)?;
    Ok(path.to_path_buf())
}
