use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use serde::Serialize;

/// A generated file destined for the Bazel workspace.
///
/// Artifacts are write-once: the conversion crates construct them and
/// nothing mutates them afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BazelFile {
    dir: String,
    basename: String,
    contents: String,
}

impl BazelFile {
    /// Create a new artifact. `dir` is relative to the workspace root; the
    /// empty string denotes the root itself.
    pub fn new(
        dir: impl Into<String>,
        basename: impl Into<String>,
        contents: impl Into<String>,
    ) -> Self {
        Self {
            dir: dir.into(),
            basename: basename.into(),
            contents: contents.into(),
        }
    }

    /// Directory relative to the workspace root.
    pub fn dir(&self) -> &str {
        &self.dir
    }

    /// File name within [`dir`](Self::dir).
    pub fn basename(&self) -> &str {
        &self.basename
    }

    /// File content, written verbatim.
    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// Path relative to the workspace root (e.g. `pkg/foo/BUILD.bazel`).
    pub fn relative_path(&self) -> PathBuf {
        Path::new(&self.dir).join(&self.basename)
    }

    /// Path of this artifact under `base`.
    pub fn path(&self, base: &Path) -> PathBuf {
        base.join(self.relative_path())
    }

    /// Write the file under `base`, leaving it untouched if the content on
    /// disk is already identical.
    pub fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);

        if let Ok(existing) = std::fs::read_to_string(&path)
            && existing == self.contents
        {
            tracing::trace!(path = %path.display(), "unchanged");
            return Ok(WriteResult::Unchanged);
        }

        write_file(&path, &self.contents)
            .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
        tracing::trace!(path = %path.display(), "written");
        Ok(WriteResult::Written)
    }
}

/// Write every artifact under `base`, in order.
pub fn write_all(files: &[BazelFile], base: &Path) -> Result<Vec<WriteResult>> {
    files.iter().map(|file| file.write(base)).collect()
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File already had the same content
    Unchanged,
}
