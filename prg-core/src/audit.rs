use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

/// Append-only human-readable transaction record for one peer.
///
/// Best-effort sink: append failures are logged and swallowed, the record is
/// never read back by the system.
pub struct AuditLog {
    path: PathBuf,
}

impl AuditLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn append(&self, line: impl AsRef<str>) {
        if let Err(e) = self.try_append(line.as_ref()).await {
            tracing::debug!("Failed to append to {}: {}", self.path.display(), e);
        }
    }

    async fn try_append(&self, line: &str) -> std::io::Result<()> {
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.write_all(b"\n").await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_appends_one_line_per_event() {
        let dir = tempdir().unwrap();
        let log = AuditLog::new(dir.path().join("record.txt"));

        log.append("first").await;
        log.append("second").await;

        let contents = tokio::fs::read_to_string(log.path()).await.unwrap();
        assert_eq!(contents, "first\nsecond\n");
    }

    #[tokio::test]
    async fn test_unwritable_path_does_not_panic() {
        let log = AuditLog::new("/nonexistent-dir/record.txt");
        log.append("dropped").await;
    }
}
