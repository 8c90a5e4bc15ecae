//! ZIP archive → namespace tree loader.
//!
//! Each entry becomes either a directory (names ending in `/`) or a
//! file. File payloads get a best-effort base64 decode: archives may
//! ship text-encoded binaries, and a payload that does not decode is
//! kept verbatim. That fallback is the only error this module ever
//! swallows.

use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use tracing::debug;
use zip::ZipArchive;

use super::tree::Vfs;
use crate::error::ArchiveError;

/// Materialize a [`Vfs`] from a ZIP archive on disk.
pub fn load_archive(path: &Path) -> Result<Vfs, ArchiveError> {
    let file = File::open(path)?;
    load_archive_reader(file)
}

/// Materialize a [`Vfs`] from any seekable ZIP source.
pub fn load_archive_reader<R: Read + Seek>(reader: R) -> Result<Vfs, ArchiveError> {
    let mut archive = ZipArchive::new(reader)?;
    let mut vfs = Vfs::new();
    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;
        let name = entry.name().to_string();
        if name.ends_with('/') {
            debug!(entry = %name, "adding directory");
            vfs.add_dir(name.trim_end_matches('/'))?;
        } else {
            let mut raw = Vec::new();
            entry.read_to_end(&mut raw)?;
            let data = decode_payload(raw);
            debug!(entry = %name, bytes = data.len(), "adding file");
            vfs.add_file(&name, data)?;
        }
    }
    Ok(vfs)
}

/// Best-effort base64 decode; undecodable payloads are kept as-is.
fn decode_payload(raw: Vec<u8>) -> Vec<u8> {
    match BASE64.decode(&raw) {
        Ok(decoded) => decoded,
        Err(_) => raw,
    }
}
