//! 路径校验（在打开文件前执行）
use std::path::Path;

use crate::error::DumpError;

/// 依次检查：路径为空 → 不存在 → 是目录
pub fn validate_path(path: &Path) -> Result<(), DumpError> {
    if path.as_os_str().is_empty() {
        return Err(DumpError::EmptyPath);
    }
    if !path.exists() {
        return Err(DumpError::PathNotFound(path.to_path_buf()));
    }
    if path.is_dir() {
        return Err(DumpError::IsDirectory(path.to_path_buf()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn rejects_empty_path() {
        assert!(matches!(validate_path(Path::new("")), Err(DumpError::EmptyPath)));
    }

    #[test]
    fn rejects_missing_and_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.bin");
        match validate_path(&missing) {
            Err(DumpError::PathNotFound(p)) => assert_eq!(p, missing),
            other => panic!("unexpected: {other:?}"),
        }
        assert!(matches!(validate_path(dir.path()), Err(DumpError::IsDirectory(_))));
    }

    #[test]
    fn accepts_regular_file() {
        let dir = tempfile::tempdir().unwrap();
        let file: PathBuf = dir.path().join("a.txt");
        std::fs::write(&file, b"abc").unwrap();
        assert!(validate_path(&file).is_ok());
    }
}
