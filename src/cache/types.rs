pub const ALEMBIC_STATUS_HEADER: &str = "X-Alembic-Status";
pub const ALEMBIC_STATUS_HEALTHY: &str = "healthy";
pub const ALEMBIC_STATUS_READY: &str = "ready";
pub const ALEMBIC_STATUS_NOT_READY: &str = "not_ready";
pub const ALEMBIC_STATUS_ERROR: &str = "error";

/// How a resolution was served.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolveStatus {
    /// Served from the hot tier or the store.
    Hit,
    /// Generated, accepted and stored.
    Miss,
    /// Generated and rejected; nothing stored.
    Rejected,
}

impl ResolveStatus {
    #[inline]
    pub fn as_header_value(&self) -> &'static str {
        match self {
            ResolveStatus::Hit => "HIT",
            ResolveStatus::Miss => "MISS",
            ResolveStatus::Rejected => "REJECTED",
        }
    }

    #[inline]
    pub fn is_hit(&self) -> bool {
        matches!(self, ResolveStatus::Hit)
    }
}

impl std::fmt::Display for ResolveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_header_value())
    }
}
