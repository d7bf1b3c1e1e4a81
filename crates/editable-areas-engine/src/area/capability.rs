use std::collections::BTreeSet;

use super::AreaCapability;

/// Enables every area type except an explicit deny list.
#[derive(Debug, Default, Clone)]
pub struct ConfiguredAreaCapability {
    disabled: BTreeSet<String>,
}

impl ConfiguredAreaCapability {
    pub fn new<I, S>(disabled: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            disabled: disabled.into_iter().map(Into::into).collect(),
        }
    }

    pub fn all_enabled() -> Self {
        Self::default()
    }
}

impl AreaCapability for ConfiguredAreaCapability {
    fn is_area_enabled(&self, kind: &str) -> bool {
        !self.disabled.contains(kind)
    }
}
