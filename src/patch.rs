use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{map_io_err, PatchError, PatchResult};

/// A single literal-text substitution against one file: replace the first
/// occurrence of `anchor_text` with `replacement_text` in the file at
/// `target_path`, or fail without writing when the anchor is absent.
///
/// Both literals are treated as opaque text. The patcher makes no attempt to
/// interpret or normalize them.
#[derive(Debug, Clone)]
pub struct PatchSpec {
    /// File to read and overwrite
    pub target_path: PathBuf,
    /// Exact literal expected to exist verbatim in the file
    pub anchor_text: String,
    /// Literal substituted for the first match of the anchor
    pub replacement_text: String,
}

/// Summary of an applied patch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatchReport {
    /// Byte offset of the replaced occurrence in the original content
    pub anchor_offset: usize,
    /// Size of the file content before the patch, in bytes
    pub bytes_read: usize,
    /// Size of the file content after the patch, in bytes
    pub bytes_written: usize,
}

impl PatchSpec {
    pub fn new(
        target_path: impl Into<PathBuf>,
        anchor_text: impl Into<String>,
        replacement_text: impl Into<String>,
    ) -> Self {
        Self {
            target_path: target_path.into(),
            anchor_text: anchor_text.into(),
            replacement_text: replacement_text.into(),
        }
    }

    /// Apply the substitution to already-loaded content.
    ///
    /// Returns the patched text together with the byte offset of the match.
    /// Only the first occurrence of the anchor is replaced; everything else,
    /// including any later occurrences, is returned byte-for-byte unchanged.
    pub fn patch_content(&self, content: &str) -> PatchResult<(String, usize)> {
        let offset = match content.find(&self.anchor_text) {
            Some(offset) => offset,
            None => {
                return Err(PatchError::anchor_not_found(
                    &self.target_path,
                    &self.anchor_text,
                ))
            }
        };

        let mut patched = String::with_capacity(
            content.len() - self.anchor_text.len() + self.replacement_text.len(),
        );
        patched.push_str(&content[..offset]);
        patched.push_str(&self.replacement_text);
        patched.push_str(&content[offset + self.anchor_text.len()..]);

        Ok((patched, offset))
    }

    /// Run the full sequence: read the target file as UTF-8, verify and
    /// replace the anchor, write the result back with the same encoding.
    ///
    /// The anchor check happens before any write, so a failed run leaves the
    /// file untouched. The read handle is closed before the write begins;
    /// the two are never open at the same time.
    pub fn apply(&self) -> PatchResult<PatchReport> {
        debug!("reading target file: {}", self.target_path.display());
        let content =
            fs::read_to_string(&self.target_path).map_err(map_io_err(&self.target_path))?;

        let (patched, anchor_offset) = self.patch_content(&content)?;

        debug!(
            "anchor found at byte offset {}, writing {} bytes to {}",
            anchor_offset,
            patched.len(),
            self.target_path.display()
        );
        fs::write(&self.target_path, &patched).map_err(map_io_err(&self.target_path))?;

        Ok(PatchReport {
            anchor_offset,
            bytes_read: content.len(),
            bytes_written: patched.len(),
        })
    }

    /// Target path accessor, mostly for callers reporting results
    pub fn target_path(&self) -> &Path {
        &self.target_path
    }
}
