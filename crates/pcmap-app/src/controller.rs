//! The directory controller and its presentation boundary.

use rand::rngs::StdRng;
use rand::SeedableRng;

use pcmap_core::{legal_doc, seed_stores, LegalDoc, LegalKey, Region, StoreRecord, REGIONS};

use crate::pipeline::visible_stores;
use crate::selection::Selection;

/// The presentation collaborator.
///
/// The controller pushes state through these calls and never reads anything
/// back. An empty `stores` slice in [`Presenter::render_listing`] is the
/// empty-state signal, not an error.
pub trait Presenter {
    /// Re-render the navigation chips for `regions`, highlighting `selection`.
    fn render_navigation(&mut self, regions: &[Region], selection: &Selection);
    /// Re-render the listing with the pipeline's ordered output.
    fn render_listing(&mut self, stores: &[StoreRecord]);
    /// Open the legal modal with `doc`.
    fn show_legal(&mut self, doc: &LegalDoc);
}

/// Owns the repository, the navigation selection, and the presenter.
///
/// All state lives here — selection changes mutate it synchronously and push
/// a re-render; the startup loader replaces the repository wholesale at most
/// once. Nothing is persisted across process restarts.
pub struct Directory<P: Presenter> {
    stores: Vec<StoreRecord>,
    selection: Selection,
    rng: StdRng,
    presenter: P,
}

impl<P: Presenter> Directory<P> {
    /// A directory seeded with the built-in dataset, default selection, and
    /// an OS-seeded shuffle RNG.
    pub fn new(presenter: P) -> Self {
        Self::with_rng(presenter, StdRng::from_os_rng())
    }

    /// Like [`Directory::new`] but with a caller-supplied RNG, for
    /// reproducible listing order.
    pub fn with_rng(presenter: P, rng: StdRng) -> Self {
        Self {
            stores: seed_stores(),
            selection: Selection::default(),
            rng,
            presenter,
        }
    }

    /// The active record set.
    #[must_use]
    pub fn stores(&self) -> &[StoreRecord] {
        &self.stores
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Switches the region filter. Resets the sub-region filter to "all" and
    /// re-renders navigation and listing.
    pub fn select_region(&mut self, region: &'static Region) {
        self.selection.set_region(region);
        self.render();
    }

    /// Sets the sub-region filter verbatim and re-renders navigation and
    /// listing. `None` means "all". Not validated against the current
    /// region's list: an inconsistent pair renders the empty state.
    pub fn select_sub_region(&mut self, sub_region: Option<String>) {
        self.selection.set_sub_region(sub_region);
        self.render();
    }

    /// Looks up a legal document and asks the presenter to show it.
    pub fn open_legal(&mut self, key: LegalKey) {
        self.presenter.show_legal(legal_doc(key));
    }

    /// Re-renders navigation and listing from the current state.
    pub fn render(&mut self) {
        self.presenter.render_navigation(REGIONS, &self.selection);
        self.render_listing();
    }

    pub(crate) fn render_listing(&mut self) {
        let visible = visible_stores(&self.stores, &self.selection, &mut self.rng);
        self.presenter.render_listing(&visible);
    }

    /// Wholesale repository replacement; no partial merge, no per-record
    /// update. Used by the startup loader.
    pub(crate) fn replace_stores(&mut self, stores: Vec<StoreRecord>) {
        self.stores = stores;
    }
}

#[cfg(test)]
mod tests {
    use pcmap_core::find_region;

    use super::*;

    /// Presenter that records every call for assertion.
    #[derive(Default)]
    struct RecordingPresenter {
        navigation_renders: usize,
        listings: Vec<Vec<StoreRecord>>,
        legal_titles: Vec<&'static str>,
    }

    impl Presenter for RecordingPresenter {
        fn render_navigation(&mut self, regions: &[Region], _selection: &Selection) {
            assert_eq!(regions.len(), 17);
            self.navigation_renders += 1;
        }

        fn render_listing(&mut self, stores: &[StoreRecord]) {
            self.listings.push(stores.to_vec());
        }

        fn show_legal(&mut self, doc: &LegalDoc) {
            self.legal_titles.push(doc.title);
        }
    }

    fn test_directory() -> Directory<RecordingPresenter> {
        Directory::with_rng(RecordingPresenter::default(), StdRng::seed_from_u64(0))
    }

    #[test]
    fn starts_on_seed_data_with_default_selection() {
        let directory = test_directory();
        assert_eq!(directory.stores(), seed_stores());
        assert_eq!(directory.selection().region().name, "서울");
        assert!(directory.selection().sub_region().is_none());
    }

    #[test]
    fn region_change_resets_sub_region_and_rerenders() {
        let mut directory = test_directory();
        directory.select_sub_region(Some("강남구".to_string()));
        assert_eq!(directory.selection().sub_region(), Some("강남구"));

        directory.select_region(find_region("경기").unwrap());
        assert!(directory.selection().sub_region().is_none());
        assert_eq!(directory.selection().region().name, "경기");
        assert_eq!(directory.presenter().navigation_renders, 2);
        assert_eq!(directory.presenter().listings.len(), 2);
    }

    #[test]
    fn listing_follows_the_selection() {
        let mut directory = test_directory();
        directory.select_region(find_region("경기").unwrap());
        directory.select_sub_region(Some("수원시".to_string()));

        let last = directory.presenter().listings.last().unwrap();
        assert_eq!(last.len(), 1);
        assert_eq!(last[0].name, "구사컴퓨터");
    }

    #[test]
    fn inconsistent_sub_region_renders_empty_state() {
        let mut directory = test_directory();
        // 수원시 belongs to 경기, not to the selected 서울.
        directory.select_sub_region(Some("수원시".to_string()));
        assert!(directory.presenter().listings.last().unwrap().is_empty());
    }

    #[test]
    fn open_legal_shows_the_named_document() {
        let mut directory = test_directory();
        directory.open_legal(LegalKey::Terms);
        directory.open_legal(LegalKey::Privacy);
        assert_eq!(
            directory.presenter().legal_titles,
            vec!["이용약관", "개인정보처리방침"]
        );
    }
}
