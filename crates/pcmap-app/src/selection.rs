//! The current navigation filter.

use pcmap_core::{Region, REGIONS};

/// The active (region, sub-region) filter.
///
/// The region is always a taxonomy entry — the only way to obtain a
/// `&'static Region` is through [`pcmap_core::REGIONS`] or
/// [`pcmap_core::find_region`], so an out-of-taxonomy region is impossible
/// by construction. The sub-region is free-form: an inconsistent value
/// filters to an empty listing rather than being rejected.
#[derive(Debug, Clone)]
pub struct Selection {
    region: &'static Region,
    sub_region: Option<String>,
}

impl Selection {
    /// A selection for `region` with no sub-region filter ("all").
    #[must_use]
    pub fn new(region: &'static Region) -> Self {
        Self {
            region,
            sub_region: None,
        }
    }

    #[must_use]
    pub fn region(&self) -> &'static Region {
        self.region
    }

    /// The sub-region filter, `None` meaning "all".
    #[must_use]
    pub fn sub_region(&self) -> Option<&str> {
        self.sub_region.as_deref()
    }

    /// Switches region. Always resets the sub-region filter to "all".
    pub(crate) fn set_region(&mut self, region: &'static Region) {
        self.region = region;
        self.sub_region = None;
    }

    /// Sets the sub-region filter verbatim, without validating it against the
    /// current region's list.
    pub(crate) fn set_sub_region(&mut self, sub_region: Option<String>) {
        self.sub_region = sub_region;
    }
}

impl Default for Selection {
    /// First taxonomy region, no sub-region filter.
    fn default() -> Self {
        Self::new(&REGIONS[0])
    }
}
