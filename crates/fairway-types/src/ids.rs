//! Type-safe identifier for tracked contacts.
//!
//! Contact IDs are small stable integers assigned once at generation time
//! and never reused within a session. Each contact category numbers from
//! its own base, so an ID alone tells you what kind of track produced it.

use serde::{Deserialize, Serialize};

/// First ID assigned to surface vessels.
pub const SURFACE_ID_BASE: u32 = 1;

/// First ID assigned to submarines.
pub const SUBMARINE_ID_BASE: u32 = 1001;

/// First ID assigned to drones.
pub const DRONE_ID_BASE: u32 = 2001;

/// Unique identifier for a contact in the simulated traffic picture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ContactId(pub u32);

impl ContactId {
    /// Create an identifier from a raw value.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Identifier for the `index`-th contact of a category, counting from
    /// the category's base. Saturates rather than wrapping on overflow.
    pub const fn from_base(base: u32, index: u32) -> Self {
        Self(base.saturating_add(index))
    }

    /// Return the inner integer value.
    pub const fn into_inner(self) -> u32 {
        self.0
    }
}

impl core::fmt::Display for ContactId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ContactId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl From<ContactId> for u32 {
    fn from(id: ContactId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_bases_do_not_collide() {
        // 300 surface slots end well short of the submarine base, and the
        // seven submarine slots end well short of the drone base.
        assert!(SURFACE_ID_BASE.saturating_add(300) < SUBMARINE_ID_BASE);
        assert!(SUBMARINE_ID_BASE.saturating_add(7) < DRONE_ID_BASE);
    }

    #[test]
    fn from_base_counts_from_base() {
        assert_eq!(ContactId::from_base(SUBMARINE_ID_BASE, 0).into_inner(), 1001);
        assert_eq!(ContactId::from_base(DRONE_ID_BASE, 7).into_inner(), 2008);
    }

    #[test]
    fn display_matches_inner() {
        let id = ContactId::new(42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn id_round_trips_through_serde() {
        let original = ContactId::new(1001);
        let json = serde_json::to_string(&original).ok();
        // Newtype wrapper serializes as the bare number.
        assert_eq!(json.as_deref(), Some("1001"));
        let restored: Result<ContactId, _> = serde_json::from_str(json.as_deref().unwrap_or(""));
        assert_eq!(restored.ok(), Some(original));
    }
}
