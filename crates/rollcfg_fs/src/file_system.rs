use std::{io, path::Path};

/// File access needed while assembling plugins. Only optional config files are ever read.
pub trait FileSystem: Send + Sync {
  fn read_to_string(&self, path: &Path) -> io::Result<String>;

  fn is_file(&self, path: &Path) -> bool;

  /// Reads `path` if it exists. A missing file is `Ok(None)`, any other failure is an error.
  fn read_optional(&self, path: &Path) -> io::Result<Option<String>> {
    if !self.is_file(path) {
      return Ok(None);
    }
    match self.read_to_string(path) {
      Ok(content) => Ok(Some(content)),
      Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
      Err(err) => Err(err),
    }
  }
}
