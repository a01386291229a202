//! # Access Events
//!
//! One event per logical memory access, consumed in arrival order.

// ============================================================================
// ACCESS EVENT
// ============================================================================

/// A single memory access tagged with the group it is accounted to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AccessEvent {
    /// Opaque 64-bit address key
    pub address: u64,
    /// Caller-defined partition key (memory object, call site, ...)
    pub group: u64,
}

impl AccessEvent {
    /// Create a new access event
    #[inline(always)]
    pub const fn new(address: u64, group: u64) -> Self {
        Self { address, group }
    }
}

impl From<(u64, u64)> for AccessEvent {
    /// Build from an `(address, group)` pair
    #[inline]
    fn from((address, group): (u64, u64)) -> Self {
        Self { address, group }
    }
}

static_assertions::assert_impl_all!(AccessEvent: Send, Sync, Copy);
static_assertions::const_assert_eq!(core::mem::size_of::<AccessEvent>(), 16);

// ============================================================================
// TESTS
// ============================================================================
