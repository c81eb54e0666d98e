//! File and filesystem abstractions used by the file handler

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

/// Permission bits for newly created log files
pub const DEFAULT_FILE_PERMISSIONS: u32 = 0o644;

/// An open, writable log file
pub trait LogFile: Write + Send {
    /// Write a whole string
    fn write_string(&mut self, s: &str) -> io::Result<()> {
        self.write_all(s.as_bytes())
    }

    /// Flush and release the file
    fn close(&mut self) -> io::Result<()>;
}

/// How a file should be opened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenFlags {
    pub create: bool,
    pub write: bool,
    pub append: bool,
}

impl OpenFlags {
    /// Create if missing, write only, append
    pub const APPEND_CREATE: OpenFlags = OpenFlags {
        create: true,
        write: true,
        append: true,
    };
}

pub trait Filesystem: Send + Sync {
    fn open_file(&self, path: &Path, flags: OpenFlags, permissions: u32) -> io::Result<Box<dyn LogFile>>;
}

impl<F: Filesystem + ?Sized> Filesystem for std::sync::Arc<F> {
    fn open_file(&self, path: &Path, flags: OpenFlags, permissions: u32) -> io::Result<Box<dyn LogFile>> {
        (**self).open_file(path, flags, permissions)
    }
}

impl LogFile for std::fs::File {
    fn close(&mut self) -> io::Result<()> {
        self.flush()?;
        self.sync_all()
    }
}

/// Host filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFilesystem;

impl Filesystem for OsFilesystem {
    fn open_file(&self, path: &Path, flags: OpenFlags, permissions: u32) -> io::Result<Box<dyn LogFile>> {
        let mut options = OpenOptions::new();
        options
            .create(flags.create)
            .write(flags.write)
            .append(flags.append);

        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(permissions);
        }
        #[cfg(not(unix))]
        let _ = permissions;

        Ok(Box::new(options.open(path)?))
    }
}
