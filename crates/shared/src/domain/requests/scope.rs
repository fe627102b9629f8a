use std::fmt;

/// Which dashboard surface a request originates from. Both surfaces share
/// one reconciliation core; the scope only drives route mounting and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardScope {
    Merchant,
    FashionCreator,
}

impl DashboardScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Merchant => "merchant",
            Self::FashionCreator => "fashion-creator",
        }
    }
}

impl fmt::Display for DashboardScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
