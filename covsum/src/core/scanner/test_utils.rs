use anyhow::Result;
use std::fs::{self, File};
use std::io::Write as _;
use std::path::PathBuf;
use tempfile::TempDir;

pub fn create_test_file(dir: &TempDir, name: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.path().join(name);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(&file_path)?;
    file.write_all(content.as_bytes())?;
    Ok(file_path)
}

pub fn setup_test_directory() -> Result<TempDir> {
    let dir = TempDir::new()?;

    create_test_file(
        &dir,
        "coverage/lcov.info",
        "TN:\nSF:src/lib.rs\nFN:3,main\nDA:3,1\nDA:4,0\nDA:5,2\nDA:7\nLF:3\nLH:2\nend_of_record\n",
    )?;
    create_test_file(&dir, "empty/lcov.info", "SF:foo.c\nend_of_record\n")?;
    create_test_file(&dir, "broken/lcov.info", "SF:foo.c\nDA:1,1\nDA:2,many\nDA:3,1\n")?;

    Ok(dir)
}
