//! # Packaging
//!
//! Turns a [`GeneratedFileSet`] into a single downloadable archive.
//!
//! The contract every [`Packager`] honours:
//! - every path is preserved exactly, subdirectories included
//! - file contents are preserved byte for byte (UTF-8)
//! - the output opens with common archive tools, no extra metadata needed
//!
//! [`PackagingGate`] is the busy indicator that keeps repeated requests from
//! starting a second packaging run while one is in flight.

use std::io::{Cursor, Write};
use std::path::{Component, Path};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::PackageError;
use crate::generator::GeneratedFileSet;
use crate::workflow::Brief;

/// Archive name used when the widget has no name
pub const DEFAULT_ARCHIVE_STEM: &str = "widget";

/// Converts a rendered file set into archive bytes
pub trait Packager {
    /// File extension of the produced archive, without the dot
    fn extension(&self) -> &'static str;

    fn package(&self, files: &GeneratedFileSet) -> Result<Vec<u8>, PackageError>;
}

/// Deflate-compressed zip archive
#[derive(Debug, Clone, Copy, Default)]
pub struct ZipPackager;

impl Packager for ZipPackager {
    fn extension(&self) -> &'static str {
        "zip"
    }

    fn package(&self, files: &GeneratedFileSet) -> Result<Vec<u8>, PackageError> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .unix_permissions(0o644);

        for file in files {
            writer.start_file(file.path.as_str(), options)?;
            writer.write_all(file.contents.as_bytes())?;
            debug!(path = %file.path, bytes = file.size(), "added archive entry");
        }

        let bytes = writer.finish()?.into_inner();
        info!(entries = files.len(), bytes = bytes.len(), "built zip archive");
        Ok(bytes)
    }
}

/// Folder and archive stem for the widget, `widget` when the name is blank.
///
/// The name must be exactly one ordinary path component, so joining it onto
/// an output directory can never leave that directory.
pub fn bundle_stem(brief: &Brief) -> Result<&str, PackageError> {
    let name = brief.name.as_str();
    if name.is_empty() {
        return Ok(DEFAULT_ARCHIVE_STEM);
    }
    let mut components = Path::new(name).components();
    let single = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(part)), None) if part == name
    );
    if !single || name.contains(['/', '\\']) {
        return Err(PackageError::InvalidName(name.to_string()));
    }
    Ok(name)
}

/// `<name>.<extension>`, falling back to `widget` when the name is blank
pub fn archive_file_name(brief: &Brief, extension: &str) -> Result<String, PackageError> {
    Ok(format!("{}.{extension}", bundle_stem(brief)?))
}

/// Busy indicator allowing at most one packaging run at a time
#[derive(Debug, Default)]
pub struct PackagingGate {
    busy: AtomicBool,
}

impl PackagingGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Claim the gate. Returns `None` while another ticket is alive.
    pub fn try_begin(&self) -> Option<PackagingTicket<'_>> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| PackagingTicket { gate: self })
    }
}

/// Held for the duration of one packaging run; releases the gate on drop
#[derive(Debug)]
pub struct PackagingTicket<'a> {
    gate: &'a PackagingGate,
}

impl Drop for PackagingTicket<'_> {
    fn drop(&mut self) {
        self.gate.busy.store(false, Ordering::Release);
    }
}
