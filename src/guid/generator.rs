//! Encoding and decoding of the time-based GUID layout.

use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use rand::RngCore;
use rand::rngs::OsRng;
use thiserror::Error;
use uuid::Uuid;

use super::version::GuidVersion;

/// Errors from time-based GUID generation.
///
/// These are programmer errors (wrong-sized byte buffers), not data
/// errors — validators elsewhere in this crate never produce them.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GuidError {
    /// The clock sequence must be exactly 2 bytes.
    #[error("clock sequence must be 2 bytes, got {0}")]
    ClockSequenceSize(usize),

    /// The node identifier must be exactly 6 bytes.
    #[error("node must be 6 bytes, got {0}")]
    NodeSize(usize),
}

// indexes within the 16-byte array for the multiplexed fields
const VERSION_BYTE: usize = 7;
const VERSION_BYTE_MASK: u8 = 0x0f;
const VERSION_BYTE_SHIFT: u8 = 4;
const VARIANT_BYTE: usize = 8;
const VARIANT_BYTE_MASK: u8 = 0x3f;
const VARIANT_BITS: u8 = 0x80;
const CLOCK_SEQUENCE_BYTE: usize = 8;
const NODE_BYTE: usize = 10;

const TICKS_PER_SECOND: i64 = 10_000_000;

// 100 ns ticks from the Gregorian reform (1582-10-15T00:00:00Z) to the
// Unix epoch
const GREGORIAN_EPOCH_TICKS: i64 = 122_192_928_000_000_000;

static DEFAULT_CLOCK_SEQUENCE: OnceLock<[u8; 2]> = OnceLock::new();
static DEFAULT_NODE: OnceLock<[u8; 6]> = OnceLock::new();

/// The process-wide default clock sequence.
///
/// Two random bytes, drawn once on first use and fixed for the lifetime
/// of the process. Callers needing a specific clock sequence pass it to
/// [`generate_time_based_with`] instead.
pub fn default_clock_sequence() -> [u8; 2] {
    *DEFAULT_CLOCK_SEQUENCE.get_or_init(|| {
        let mut bytes = [0u8; 2];
        OsRng.fill_bytes(&mut bytes);
        bytes
    })
}

/// The process-wide default node identifier.
///
/// Six random bytes, drawn once on first use and fixed for the lifetime
/// of the process.
pub fn default_node() -> [u8; 6] {
    *DEFAULT_NODE.get_or_init(|| {
        let mut bytes = [0u8; 6];
        OsRng.fill_bytes(&mut bytes);
        bytes
    })
}

/// Derive a 6-byte node identifier from a node name.
///
/// The hash is process-local and not stable across runs or Rust
/// versions; collisions between names are possible and accepted. This is
/// a convenience for telling generators apart, not a fingerprint.
pub fn node_from_name(name: &str) -> [u8; 6] {
    let mut hasher = DefaultHasher::new();
    name.hash(&mut hasher);
    let hash = hasher.finish().to_le_bytes();
    let mut node = [0u8; 6];
    node.copy_from_slice(&hash[..6]);
    node
}

/// Generate a time-based GUID for the current UTC time with the process
/// default clock sequence and node.
pub fn generate_time_based() -> Uuid {
    encode(Utc::now(), default_clock_sequence(), default_node())
}

/// Generate a time-based GUID for a supplied instant with the process
/// default clock sequence and node.
pub fn generate_time_based_at(timestamp: DateTime<Utc>) -> Uuid {
    encode(timestamp, default_clock_sequence(), default_node())
}

/// Generate a time-based GUID for the current UTC time with a node
/// identifier derived from `node_name` (see [`node_from_name`]).
pub fn generate_time_based_for_node(node_name: &str) -> Uuid {
    encode(Utc::now(), default_clock_sequence(), node_from_name(node_name))
}

/// Generate a time-based GUID from an instant, a 2-byte clock sequence
/// and a 6-byte node identifier.
///
/// Deterministic: identical inputs always produce identical output. An
/// instant before the Gregorian reform yields a negative tick count and
/// is encoded as-is.
pub fn generate_time_based_with(
    timestamp: DateTime<Utc>,
    clock_sequence: &[u8],
    node: &[u8],
) -> Result<Uuid, GuidError> {
    let clock_sequence: [u8; 2] = clock_sequence
        .try_into()
        .map_err(|_| GuidError::ClockSequenceSize(clock_sequence.len()))?;
    let node: [u8; 6] = node.try_into().map_err(|_| GuidError::NodeSize(node.len()))?;
    Ok(encode(timestamp, clock_sequence, node))
}

/// Extract the version nibble from byte 7.
///
/// Returns `None` for nibbles that do not map to a known [`GuidVersion`].
pub fn version(guid: &Uuid) -> Option<GuidVersion> {
    GuidVersion::from_nibble(guid.as_bytes()[VERSION_BYTE] >> VERSION_BYTE_SHIFT)
}

/// Recover the creation instant of a time-based GUID.
///
/// The version nibble of byte 7 is masked back to zero (the tick count's
/// high bits are assumed clear, which holds for everything
/// [`generate_time_based_with`] produces) and the little-endian tick
/// count is reassembled. Decoding an identifier that is not time-based
/// yields a nonsensical but valid instant — it never panics.
pub fn timestamp(guid: &Uuid) -> DateTime<Utc> {
    let mut bytes = *guid.as_bytes();
    bytes[VERSION_BYTE] &= VERSION_BYTE_MASK;

    let mut tick_bytes = [0u8; 8];
    tick_bytes.copy_from_slice(&bytes[..8]);
    let unix_ticks = i64::from_le_bytes(tick_bytes) - GREGORIAN_EPOCH_TICKS;

    let secs = unix_ticks.div_euclid(TICKS_PER_SECOND);
    let nanos = (unix_ticks.rem_euclid(TICKS_PER_SECOND) * 100) as u32;
    DateTime::from_timestamp(secs, nanos).unwrap_or_default()
}

fn encode(timestamp: DateTime<Utc>, clock_sequence: [u8; 2], node: [u8; 6]) -> Uuid {
    let unix_ticks =
        timestamp.timestamp() * TICKS_PER_SECOND + i64::from(timestamp.timestamp_subsec_nanos() / 100);
    let ticks = unix_ticks + GREGORIAN_EPOCH_TICKS;

    let mut bytes = [0u8; 16];
    bytes[..8].copy_from_slice(&ticks.to_le_bytes());
    bytes[CLOCK_SEQUENCE_BYTE..CLOCK_SEQUENCE_BYTE + 2].copy_from_slice(&clock_sequence);
    bytes[NODE_BYTE..NODE_BYTE + 6].copy_from_slice(&node);

    // variant bits `10` in the top of byte 8
    bytes[VARIANT_BYTE] &= VARIANT_BYTE_MASK;
    bytes[VARIANT_BYTE] |= VARIANT_BITS;

    // version nibble in the top of byte 7
    bytes[VERSION_BYTE] &= VERSION_BYTE_MASK;
    bytes[VERSION_BYTE] |= (GuidVersion::TimeBased as u8) << VERSION_BYTE_SHIFT;

    Uuid::from_bytes(bytes)
}
