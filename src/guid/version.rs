use serde::{Deserialize, Serialize};

/// GUID version tag, stored in the high nibble of byte 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum GuidVersion {
    /// Time-based (the only version this crate generates).
    TimeBased = 1,
    /// DCE security, reserved.
    Reserved = 2,
    /// Name-based.
    NameBased = 3,
    /// Randomly generated.
    Random = 4,
}

impl GuidVersion {
    /// Map a version nibble to a known version, if any.
    pub(super) fn from_nibble(nibble: u8) -> Option<Self> {
        match nibble {
            1 => Some(Self::TimeBased),
            2 => Some(Self::Reserved),
            3 => Some(Self::NameBased),
            4 => Some(Self::Random),
            _ => None,
        }
    }
}
