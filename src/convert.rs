use std::fs;
use std::io;
use std::path::Path;

use crate::config::Config;
use crate::error::{Error, Result};

/// Best-effort step run after the destination has been written.
///
/// Failures are logged and otherwise ignored; a conversion never fails
/// because of a hook.
pub trait PostSave {
    fn after_save(&self, path: &Path) -> io::Result<()>;
}

/// Clears the read-only flag on the saved file (mode `0o666` on unix).
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeWritable;

impl PostSave for MakeWritable {
    fn after_save(&self, path: &Path) -> io::Result<()> {
        let mut permissions = fs::metadata(path)?.permissions();

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            permissions.set_mode(0o666);
        }

        #[cfg(not(unix))]
        permissions.set_readonly(false);

        fs::set_permissions(path, permissions)
    }
}

/// One-shot Markdown to `.docx` file converter.
pub struct Converter {
    config: Config,
    post_save: Option<Box<dyn PostSave>>,
}

impl Converter {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            post_save: None,
        }
    }

    pub fn with_post_save(mut self, hook: impl PostSave + 'static) -> Self {
        self.post_save = Some(Box::new(hook));
        self
    }

    /// Convert `source` into a `.docx` at `dest`.
    ///
    /// An unreadable source is returned as an error before `dest` is touched.
    /// A failure to write `dest` is logged and reported as `Ok(false)`.
    pub fn convert(&self, source: &Path, dest: &Path) -> Result<bool> {
        let markdown = fs::read_to_string(source).map_err(|source_err| Error::Read {
            path: source.to_path_buf(),
            source: source_err,
        })?;
        log::debug!("Read {} bytes from {}", markdown.len(), source.display());

        remove_existing(dest);

        let doc = crate::markdown_to_document_with_config(&markdown, &self.config);
        log::debug!("Built document with {} elements", doc.elements().len());

        if let Err(e) = doc.save(dest) {
            log::error!("Error saving document: {e}");
            return Ok(false);
        }

        if let Some(hook) = &self.post_save
            && let Err(e) = hook.after_save(dest)
        {
            log::debug!("Post-save step failed for {}: {e}", dest.display());
        }

        log::info!("Created editable DOCX: {}", dest.display());
        Ok(true)
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(Config::compiled_default()).with_post_save(MakeWritable)
    }
}

/// Convert with the compiled default config and the [`MakeWritable`] hook.
pub fn convert(source: &Path, dest: &Path) -> Result<bool> {
    Converter::default().convert(source, dest)
}

/// Remove a stale destination. A locked file is left for the save to overwrite.
fn remove_existing(dest: &Path) {
    if !dest.exists() {
        return;
    }
    if let Err(e) = fs::remove_file(dest) {
        log::debug!("Could not remove existing {}: {e}", dest.display());
    }
}
