//! Domain Value Objects

use std::fmt;

/// Numeric campaign identifier (the on-chain campaign index)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CampaignId(i64);

impl CampaignId {
    /// Campaign indices start at zero
    pub fn new(id: i64) -> Option<Self> {
        (id >= 0).then_some(Self(id))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for CampaignId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<CampaignId> for i64 {
    fn from(id: CampaignId) -> Self {
        id.0
    }
}
