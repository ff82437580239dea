// Host-side tests for scroll-spy section tracking against a fake layout.

use portfolio_core::*;
use std::cell::RefCell;
use std::collections::HashMap;

#[derive(Default)]
struct FakeViewport {
    bounds: HashMap<&'static str, SectionBounds>,
    scrolled_to: RefCell<Vec<String>>,
}

impl FakeViewport {
    fn with(sections: &[(&'static str, f64, f64)]) -> Self {
        let mut vp = Self::default();
        for (id, top, height) in sections {
            vp.bounds.insert(*id, SectionBounds::new(*top, *height));
        }
        vp
    }
}

impl Viewport for FakeViewport {
    fn section_bounds(&self, id: &str) -> Option<SectionBounds> {
        self.bounds.get(id).copied()
    }

    fn scroll_to_section(&self, id: &str) -> bool {
        if !self.bounds.contains_key(id) {
            return false;
        }
        self.scrolled_to.borrow_mut().push(id.to_string());
        true
    }
}

// Stacked page: each section 800px tall.
fn stacked_page() -> FakeViewport {
    let mut entries = Vec::new();
    for (i, id) in SECTION_IDS.iter().enumerate() {
        entries.push((*id, i as f64 * 800.0, 800.0));
    }
    FakeViewport::with(&entries)
}

fn tracker() -> SectionTracker {
    SectionTracker::new(&SECTION_IDS, HEADER_OFFSET_PX).unwrap()
}

#[test]
fn starts_on_first_declared_section() {
    let t = tracker();
    assert_eq!(t.active(), "hero");
    assert!(t.is_active("hero"));
}

#[test]
fn empty_section_list_is_rejected() {
    assert_eq!(
        SectionTracker::new(&[], 100.0).err(),
        Some(ConfigError::NoSections)
    );
    assert!(matches!(
        SectionTracker::new(&["a"], -1.0),
        Err(ConfigError::InvalidHeaderOffset(_))
    ));
}

#[test]
fn header_offset_is_added_to_scroll_position() {
    let vp = stacked_page();
    let mut t = tracker();
    // 650 + 100 = 750 -> still hero
    assert_eq!(t.on_scroll(650.0, &vp), None);
    assert_eq!(t.active(), "hero");
    // 700 + 100 = 800 -> about (half-open lower bound)
    assert_eq!(t.on_scroll(700.0, &vp), Some("about"));
    assert_eq!(t.active(), "about");
}

#[test]
fn selects_containing_section_for_each_offset() {
    let vp = stacked_page();
    let mut t = tracker();
    for (i, id) in SECTION_IDS.iter().enumerate() {
        let offset = i as f64 * 800.0 + 250.0 - HEADER_OFFSET_PX;
        t.on_scroll(offset, &vp);
        assert_eq!(t.active(), *id, "offset {offset}");
    }
}

#[test]
fn unchanged_active_section_reports_no_change() {
    let vp = stacked_page();
    let mut t = tracker();
    assert_eq!(t.on_scroll(2500.0, &vp), Some("projects"));
    assert_eq!(t.on_scroll(2600.0, &vp), None);
    assert_eq!(t.active(), "projects");
}

#[test]
fn no_qualifying_section_keeps_previous_state() {
    let vp = stacked_page();
    let mut t = tracker();
    t.on_scroll(1000.0, &vp);
    assert_eq!(t.active(), "about");
    // Past the end of the last section
    assert_eq!(t.on_scroll(10_000.0, &vp), None);
    assert_eq!(t.active(), "about");
}

#[test]
fn overlapping_boundaries_favor_earlier_declared_section() {
    // "about" extends into "skills"; both contain y = 900.
    let vp = FakeViewport::with(&[
        ("hero", 0.0, 500.0),
        ("about", 500.0, 600.0),
        ("skills", 800.0, 400.0),
    ]);
    let mut t = SectionTracker::new(&["hero", "about", "skills"], 100.0).unwrap();
    assert_eq!(t.on_scroll(800.0, &vp), Some("about"));
    assert_eq!(t.locate(800.0, &vp), Some(1));
}

#[test]
fn shared_boundary_value_goes_to_the_section_that_starts_there() {
    let vp = FakeViewport::with(&[("a", 0.0, 500.0), ("b", 500.0, 500.0)]);
    let mut t = SectionTracker::new(&["a", "b"], 0.0).unwrap();
    assert_eq!(t.on_scroll(500.0, &vp), Some("b"));
    assert_eq!(t.on_scroll(499.5, &vp), Some("a"));
}

#[test]
fn missing_sections_are_skipped() {
    // "about" is not rendered; skills follows hero directly.
    let vp = FakeViewport::with(&[("hero", 0.0, 800.0), ("skills", 800.0, 800.0)]);
    let mut t = tracker();
    assert_eq!(t.on_scroll(900.0, &vp), Some("skills"));
    assert_eq!(t.locate(900.0, &vp), Some(2));
}

#[test]
fn navigate_scrolls_to_known_sections_only() {
    let vp = stacked_page();
    let t = tracker();
    assert!(t.navigate_to_section("contact", &vp));
    assert!(!t.navigate_to_section("blog", &vp));
    assert_eq!(*vp.scrolled_to.borrow(), vec!["contact".to_string()]);
}

#[test]
fn navigate_to_declared_but_unrendered_section_is_noop() {
    let vp = FakeViewport::with(&[("hero", 0.0, 800.0)]);
    let t = tracker();
    assert!(!t.navigate_to_section("education", &vp));
    assert!(vp.scrolled_to.borrow().is_empty());
}

#[test]
fn nav_labels_target_declared_sections() {
    let t = tracker();
    for label in NAV_LABELS {
        let target = nav_target(label);
        assert!(t.sections().iter().any(|s| *s == target), "{label}");
    }
}
