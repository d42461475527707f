use crate::infrastructure::error::InfrastructureError;
use std::io::Write;
use std::path::Path;

/// Writes `content` to `path` through a temporary file in the same
/// directory, so readers see either the old or the new document.
pub fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(
    path: P,
    content: C,
) -> Result<(), InfrastructureError> {
    let path = path.as_ref();
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
    temp_file.write_all(content.as_ref())?;
    temp_file
        .persist(path)
        .map_err(|e| InfrastructureError::Io(e.error))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_atomic_write_replaces_document() -> Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("catalog.yaml");

        atomic_write(&file_path, "scheme: mysql+pymysql\n")?;
        atomic_write(&file_path, "hostPort: db:3306\n")?;

        assert_eq!(fs::read_to_string(file_path)?, "hostPort: db:3306\n");
        Ok(())
    }
}
