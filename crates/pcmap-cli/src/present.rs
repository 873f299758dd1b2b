//! Terminal rendering of navigation chips and store cards.

use std::fmt::Write as _;

use pcmap_app::{Presenter, Selection};
use pcmap_core::{LegalDoc, Region, StoreRecord};

/// Presenter that keeps the latest rendered navigation and listing and
/// prints them once the startup sequence settles. Intermediate renders
/// overwrite earlier ones, the way a screen repaint would.
pub struct TerminalPresenter {
    json: bool,
    navigation: String,
    listing: String,
}

impl TerminalPresenter {
    #[must_use]
    pub fn new(json: bool) -> Self {
        Self {
            json,
            navigation: String::new(),
            listing: String::new(),
        }
    }

    /// Prints the latest rendered state to stdout.
    pub fn print(&self) {
        if self.json {
            print!("{}", self.listing);
        } else {
            print!("{}", self.navigation);
            print!("{}", self.listing);
        }
    }
}

impl Presenter for TerminalPresenter {
    fn render_navigation(&mut self, regions: &[Region], selection: &Selection) {
        let mut out = String::new();

        let chips: Vec<String> = regions
            .iter()
            .map(|r| {
                if r.name == selection.region().name {
                    format!("[{}]", r.name)
                } else {
                    r.name.to_string()
                }
            })
            .collect();
        let _ = writeln!(out, "{}", chips.join(" "));

        let mut subs = Vec::with_capacity(selection.region().sub_regions.len() + 1);
        subs.push(if selection.sub_region().is_none() {
            "[전체]".to_string()
        } else {
            "전체".to_string()
        });
        for sub in selection.region().sub_regions {
            if Some(*sub) == selection.sub_region() {
                subs.push(format!("[{sub}]"));
            } else {
                subs.push((*sub).to_string());
            }
        }
        let _ = writeln!(out, "{}", subs.join(" "));
        let _ = writeln!(out);

        self.navigation = out;
    }

    fn render_listing(&mut self, stores: &[StoreRecord]) {
        if self.json {
            let mut body =
                serde_json::to_string_pretty(stores).unwrap_or_else(|_| "[]".to_string());
            body.push('\n');
            self.listing = body;
            return;
        }

        if stores.is_empty() {
            self.listing = "등록된 매장이 없습니다.\n".to_string();
            return;
        }

        let mut out = String::new();
        for store in stores {
            let marker = if store.is_premium { "★" } else { "·" };
            let _ = writeln!(out, "{marker} {}", store.name);
            let _ = writeln!(
                out,
                "  {} {} | {}",
                store.region, store.sub_region, store.address
            );
            if !store.description.is_empty() {
                let _ = writeln!(out, "  {}", store.description);
            }
            if !store.tags.is_empty() {
                let tags: Vec<String> = store.tags.iter().map(|t| format!("#{t}")).collect();
                let _ = writeln!(out, "  {}", tags.join(" "));
            }
            let _ = writeln!(out, "  {}", store.external_link());
            let _ = writeln!(out, "  사진: {}", store.thumbnail());
            let _ = writeln!(out);
        }
        self.listing = out;
    }

    fn show_legal(&mut self, doc: &LegalDoc) {
        println!("{}\n\n{}", doc.title, doc.body);
    }
}

#[cfg(test)]
mod tests {
    use pcmap_core::{find_region, seed_stores, REGIONS};

    use super::*;

    #[test]
    fn navigation_highlights_the_selection() {
        let mut presenter = TerminalPresenter::new(false);
        let mut selection = Selection::new(find_region("경기").unwrap());
        presenter.render_navigation(REGIONS, &selection);
        assert!(presenter.navigation.contains("[경기]"));
        assert!(presenter.navigation.contains("[전체]"));

        selection = Selection::new(find_region("서울").unwrap());
        presenter.render_navigation(REGIONS, &selection);
        assert!(presenter.navigation.contains("[서울]"));
        assert!(!presenter.navigation.contains("[경기]"));
    }

    #[test]
    fn empty_listing_renders_the_empty_state() {
        let mut presenter = TerminalPresenter::new(false);
        presenter.render_listing(&[]);
        assert!(presenter.listing.contains("등록된 매장이 없습니다"));
    }

    #[test]
    fn premium_stores_carry_the_star_marker() {
        let mut presenter = TerminalPresenter::new(false);
        presenter.render_listing(&seed_stores());
        assert!(presenter.listing.contains("★ 구사컴퓨터"));
        assert!(presenter.listing.contains("· 강남 마스터 PC 수리"));
    }

    #[test]
    fn json_listing_is_valid_json() {
        let mut presenter = TerminalPresenter::new(true);
        presenter.render_listing(&seed_stores());
        let parsed: serde_json::Value = serde_json::from_str(&presenter.listing).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 2);
    }
}
