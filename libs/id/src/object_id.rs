//! The typed ObjectId value.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::LazyLock;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::codec;
use crate::InvalidObjectId;

/// Process-unique bytes embedded in every generated id.
static PROCESS_UNIQUE: LazyLock<[u8; 5]> = LazyLock::new(|| rand::random());

/// Per-process counter, seeded randomly. Only the low 24 bits are used.
static COUNTER: LazyLock<AtomicU32> = LazyLock::new(|| AtomicU32::new(rand::random()));

/// A 12-byte database object identifier.
///
/// Layout of generated ids:
///
/// | bytes  | content                                  |
/// |--------|------------------------------------------|
/// | 0..4   | seconds since the Unix epoch, big-endian |
/// | 4..9   | process-unique random value              |
/// | 9..12  | counter, big-endian                      |
///
/// The canonical text form is 24 lowercase hex characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectId([u8; ObjectId::LEN]);

impl ObjectId {
    /// Length of the binary form in bytes.
    pub const LEN: usize = 12;

    /// Length of the canonical hex form in characters.
    pub const HEX_LEN: usize = 24;

    /// Generates a fresh id from the current time.
    #[must_use]
    pub fn new() -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as u32)
            .unwrap_or(0);
        let count = COUNTER.fetch_add(1, Ordering::Relaxed) & 0x00ff_ffff;

        let mut bytes = [0u8; Self::LEN];
        bytes[0..4].copy_from_slice(&secs.to_be_bytes());
        bytes[4..9].copy_from_slice(&*PROCESS_UNIQUE);
        bytes[9..12].copy_from_slice(&count.to_be_bytes()[1..]);
        Self(bytes)
    }

    /// Creates an id from its raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; Self::LEN]) -> Self {
        Self(bytes)
    }

    /// Returns the raw bytes.
    #[must_use]
    pub const fn bytes(&self) -> [u8; Self::LEN] {
        self.0
    }

    /// Returns the embedded creation time in seconds since the Unix epoch.
    #[must_use]
    pub fn timestamp(&self) -> u32 {
        u32::from_be_bytes([self.0[0], self.0[1], self.0[2], self.0[3]])
    }

    /// Parses an id from its hex form. See [`codec::parse`].
    pub fn parse(s: &str) -> Result<Self, InvalidObjectId> {
        codec::parse(s)
    }

    /// Formats the id as 24 lowercase hex characters.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl Default for ObjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl std::str::FromStr for ObjectId {
    type Err = InvalidObjectId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<[u8; ObjectId::LEN]> for ObjectId {
    fn from(bytes: [u8; ObjectId::LEN]) -> Self {
        Self(bytes)
    }
}

impl From<ObjectId> for [u8; ObjectId::LEN] {
    fn from(id: ObjectId) -> Self {
        id.0
    }
}

impl TryFrom<&[u8]> for ObjectId {
    type Error = InvalidObjectId;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; Self::LEN] = bytes
            .try_into()
            .map_err(|_| InvalidObjectId::new(hex::encode(bytes)))?;
        Ok(Self(bytes))
    }
}

impl serde::Serialize for ObjectId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> serde::Deserialize<'de> for ObjectId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
