//! Dataset identity and content.
//!
//! At most one dataset is current at any time; selecting a new file replaces
//! it wholesale. Identity is the content bytes plus the declared name, with a
//! SHA-256 checksum computed up front for logging and deduplication.

use std::borrow::Cow;
use std::sync::Arc;

use sha2::{Digest, Sha256};

/// Monotonically increasing counter marking dataset identity.
///
/// Every dataset replacement advances the generation. In-flight requests
/// capture the generation at trigger time; a completion whose generation no
/// longer matches the current one is discarded without touching any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Generation(u64);

impl Generation {
    /// The generation following this one.
    pub fn next(self) -> Self {
        Generation(self.0 + 1)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

/// The currently selected raw dataset.
///
/// Cheap to clone: the content bytes sit behind an `Arc` and are immutable
/// for the dataset's lifetime, so a pending request can hold its own handle
/// while the session moves on.
#[derive(Debug, Clone)]
pub struct Dataset {
    name: String,
    raw: Arc<[u8]>,
    checksum: String,
    loaded_at: chrono::DateTime<chrono::Utc>,
}

impl Dataset {
    pub fn new(name: impl Into<String>, raw: Vec<u8>) -> Self {
        let raw: Arc<[u8]> = raw.into();
        let checksum = calculate_checksum(&raw);
        Self {
            name: name.into(),
            raw,
            checksum,
            loaded_at: chrono::Utc::now(),
        }
    }

    /// Declared file name, as supplied by the upload widget.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw content bytes.
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    /// SHA-256 checksum of the content bytes, hex-encoded.
    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    pub fn loaded_at(&self) -> chrono::DateTime<chrono::Utc> {
        self.loaded_at
    }

    /// Content as text for local preview parsing. Invalid UTF-8 is replaced
    /// rather than rejected; the preview parser drops rows it cannot read.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.raw)
    }
}

/// Calculate the SHA-256 checksum of dataset content.
pub fn calculate_checksum(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_consistency() {
        let content = b"time,flux\n1,2\n";
        assert_eq!(calculate_checksum(content), calculate_checksum(content));
    }

    #[test]
    fn test_different_content_different_checksum() {
        assert_ne!(
            calculate_checksum(b"time,flux\n1,2\n"),
            calculate_checksum(b"time,flux\n1,3\n")
        );
    }

    #[test]
    fn test_generation_advances() {
        let g = Generation::default();
        assert_eq!(g.value(), 0);
        assert_eq!(g.next().value(), 1);
        assert_ne!(g, g.next());
    }

    #[test]
    fn test_lossy_text() {
        let ds = Dataset::new("curve.csv", vec![0xff, b'a', b'b']);
        assert!(ds.text().contains("ab"));
    }
}
