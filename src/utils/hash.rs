//! Content fingerprints for cache-busting asset names.
//!
//! ```ignore
//! use crate::utils::hash;
//!
//! let fp = hash::fingerprint(b"body { color: red }"); // -> "a1b2c3d4"
//! let name = hash::fingerprinted_name(Path::new("all.css"), &fp); // -> "all-a1b2c3d4.css"
//! ```

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// Hex characters kept from the full digest.
pub const FINGERPRINT_LEN: usize = 8;

/// A 256-bit content hash (blake3 output).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentHash([u8; 32]);

impl ContentHash {
    /// Short form used in file names.
    pub fn fingerprint(self) -> String {
        hex::encode(&self.0[..FINGERPRINT_LEN / 2])
    }
}

/// Hash in-memory content.
#[inline]
pub fn compute<T: AsRef<[u8]> + ?Sized>(data: &T) -> ContentHash {
    ContentHash(*blake3::hash(data.as_ref()).as_bytes())
}

/// Hash a reader in fixed-size chunks.
pub fn compute_reader(reader: impl Read) -> io::Result<ContentHash> {
    let mut reader = BufReader::with_capacity(64 * 1024, reader);
    let mut hasher = blake3::Hasher::new();
    let mut buffer = [0u8; 64 * 1024];

    loop {
        match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => {
                hasher.update(&buffer[..n]);
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }

    Ok(ContentHash(*hasher.finalize().as_bytes()))
}

/// Hash a file on disk.
pub fn compute_file(path: &Path) -> Result<ContentHash> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    compute_reader(file).with_context(|| format!("failed to read {}", path.display()))
}

/// 8-char hex fingerprint of `data`.
#[inline]
pub fn fingerprint<T: AsRef<[u8]> + ?Sized>(data: &T) -> String {
    compute(data).fingerprint()
}

/// Insert `fingerprint` before the extension: `all.css` -> `all-<fp>.css`.
///
/// Only the file name is returned; the caller keeps the parent directory.
pub fn fingerprinted_name(path: &Path, fingerprint: &str) -> String {
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{stem}-{fingerprint}.{ext}"),
        None => format!("{stem}-{fingerprint}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_fingerprint_is_stable_and_short() {
        let a = fingerprint("body { color: red }");
        assert_eq!(a.len(), FINGERPRINT_LEN);
        assert_eq!(a, fingerprint("body { color: red }"));
        assert_ne!(a, fingerprint("body { color: blue }"));
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_fingerprint_is_digest_prefix() {
        let full = blake3::hash(b"x").to_hex();
        assert!(full.starts_with(&compute("x").fingerprint()));
    }

    #[test]
    fn test_file_and_memory_agree() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.js");
        fs::write(&path, "console.log(1)").unwrap();

        assert_eq!(compute_file(&path).unwrap(), compute("console.log(1)"));
        assert!(compute_file(&dir.path().join("missing.js")).is_err());
    }

    #[test]
    fn test_fingerprinted_name() {
        assert_eq!(
            fingerprinted_name(Path::new("stylesheets/all.css"), "a1b2c3d4"),
            "all-a1b2c3d4.css"
        );
        assert_eq!(
            fingerprinted_name(Path::new("app.min.js"), "a1b2c3d4"),
            "app.min-a1b2c3d4.js"
        );
        assert_eq!(fingerprinted_name(Path::new("LICENSE"), "a1b2c3d4"), "LICENSE-a1b2c3d4");
    }
}
