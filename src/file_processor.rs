//! Load, edit and persist a single file
//!
//! The edit pipeline is fixed: every substitute command runs first, then every
//! append command, i.e. `append(substitute(buffer, commands)?, commands)`.
//! Nothing is written unless both phases succeed.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::append::append;
use crate::command::EditOptions;
use crate::config::{EditConfig, WriteConfig};
use crate::error::{EditError, FileOperation, Result};
use crate::substitute::substitute;

/// Run both edit phases over an in-memory buffer
pub fn apply<S: AsRef<str>>(buffer: Vec<u8>, commands: &[S], options: EditOptions) -> Result<Vec<u8>> {
    let buffer = substitute(buffer, commands, options)?;
    append(buffer, commands)
}

/// Before and after contents of one edited file
#[derive(Debug, Clone)]
pub struct FileEdit {
    pub path: PathBuf,
    pub original: Vec<u8>,
    pub edited: Vec<u8>,
}

impl FileEdit {
    pub fn is_changed(&self) -> bool {
        self.original != self.edited
    }
}

pub struct FileProcessor {
    options: EditOptions,
    write: WriteConfig,
}

impl FileProcessor {
    pub fn new(options: EditOptions, write: WriteConfig) -> Self {
        Self { options, write }
    }

    /// Read the target file and compute its edited contents without writing
    pub fn process_file(&self, config: &EditConfig) -> Result<FileEdit> {
        let path = config.path();
        let original = fs::read(path).map_err(|e| EditError::file_access(path, FileOperation::Read, e))?;
        info!(path = %path.display(), bytes = original.len(), "loaded file");

        let edited = apply(original.clone(), config.commands(), self.options)?;

        Ok(FileEdit {
            path: path.to_path_buf(),
            original,
            edited,
        })
    }

    /// Read, edit and overwrite the target file
    pub fn apply_to_file(&self, config: &EditConfig) -> Result<FileEdit> {
        let edit = self.process_file(config)?;
        self.persist(&edit.path, &edit.edited)?;
        info!(path = %edit.path.display(), bytes = edit.edited.len(), "wrote file");
        Ok(edit)
    }

    fn persist(&self, path: &Path, data: &[u8]) -> Result<()> {
        if self.write.atomic {
            self.persist_atomic(path, data)
        } else {
            self.persist_in_place(path, data)
        }
    }

    /// Write to a temp file beside the target, then rename over it
    fn persist_atomic(&self, path: &Path, data: &[u8]) -> Result<()> {
        let write_err = |e| EditError::file_access(path, FileOperation::Write, e);

        let parent_dir = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };

        let mut temp_file = NamedTempFile::new_in(parent_dir).map_err(write_err)?;
        temp_file.write_all(data).map_err(write_err)?;
        temp_file.as_file().sync_all().map_err(write_err)?;

        let permissions = match fs::metadata(path) {
            Ok(meta) => meta.permissions(),
            Err(_) => self.new_file_permissions(temp_file.as_file()).map_err(write_err)?,
        };
        temp_file.as_file().set_permissions(permissions).map_err(write_err)?;

        debug!(temp = %temp_file.path().display(), "renaming temp file over target");
        temp_file.persist(path).map_err(|e| write_err(e.error))?;
        Ok(())
    }

    fn persist_in_place(&self, path: &Path, data: &[u8]) -> Result<()> {
        let write_err = |e| EditError::file_access(path, FileOperation::Write, e);

        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(self.write.file_mode);
        }

        let mut file = options.open(path).map_err(write_err)?;
        file.write_all(data).map_err(write_err)?;
        Ok(())
    }

    #[cfg(unix)]
    fn new_file_permissions(&self, _file: &fs::File) -> std::io::Result<fs::Permissions> {
        use std::os::unix::fs::PermissionsExt;
        Ok(fs::Permissions::from_mode(self.write.file_mode))
    }

    #[cfg(not(unix))]
    fn new_file_permissions(&self, file: &fs::File) -> std::io::Result<fs::Permissions> {
        Ok(file.metadata()?.permissions())
    }
}
