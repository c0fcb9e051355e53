//! Offset pagination window shared by every listing.

/// Page size when the client sends none
pub const DEFAULT_LIMIT: u64 = 20;
/// Largest offset the database driver can bind (Postgres OFFSET is a signed
/// 64-bit value)
pub const MAX_SKIP: u64 = i64::MAX as u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub skip: u64,
    pub limit: u64,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}
