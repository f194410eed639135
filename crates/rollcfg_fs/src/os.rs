use std::{io, path::Path};

use crate::FileSystem;

#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
  fn read_to_string(&self, path: &Path) -> io::Result<String> {
    std::fs::read_to_string(path)
  }

  fn is_file(&self, path: &Path) -> bool {
    path.is_file()
  }
}

#[test]
fn test_read_optional() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("terser.config.json");

  assert_eq!(OsFileSystem.read_optional(&path).unwrap(), None);

  std::fs::write(&path, "{\"ecma\":2020}").unwrap();
  assert_eq!(OsFileSystem.read_optional(&path).unwrap().as_deref(), Some("{\"ecma\":2020}"));

  // Directories are not config files.
  assert_eq!(OsFileSystem.read_optional(dir.path()).unwrap(), None);
}
