//! Scroll-spy state: which page section is currently "in view".
//!
//! The tracker owns the active-section state and nothing else. Layout
//! geometry is read through [`Viewport`] on every evaluation so the tracker
//! never caches DOM positions that may have moved.

use crate::config::ConfigError;
use smallvec::SmallVec;

/// Vertical extent of a section in document coordinates (CSS pixels).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Half-open containment: `top <= y < top + height`.
    #[inline]
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Read access to the rendered layout plus the single navigation command.
pub trait Viewport {
    /// Bounds of the section with `id`, or `None` if it is not rendered.
    fn section_bounds(&self, id: &str) -> Option<SectionBounds>;
    /// Smooth-scroll so the section's top meets the viewport top.
    /// Returns false when the section cannot be found.
    fn scroll_to_section(&self, id: &str) -> bool;
}

pub struct SectionTracker {
    sections: SmallVec<[&'static str; 8]>,
    header_offset: f64,
    active: usize,
}

impl SectionTracker {
    pub fn new(sections: &[&'static str], header_offset: f64) -> Result<Self, ConfigError> {
        if sections.is_empty() {
            return Err(ConfigError::NoSections);
        }
        if !header_offset.is_finite() || header_offset < 0.0 {
            return Err(ConfigError::InvalidHeaderOffset(header_offset));
        }
        Ok(Self {
            sections: sections.iter().copied().collect(),
            header_offset,
            active: 0,
        })
    }

    pub fn sections(&self) -> &[&'static str] {
        &self.sections
    }

    pub fn header_offset(&self) -> f64 {
        self.header_offset
    }

    /// Currently active section id. Always one of [`Self::sections`].
    pub fn active(&self) -> &'static str {
        self.sections[self.active]
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active() == id
    }

    /// Index of the first declared section containing `scroll_offset + header_offset`.
    /// Sections the viewport cannot locate are skipped.
    pub fn locate(&self, scroll_offset: f64, viewport: &impl Viewport) -> Option<usize> {
        let probe = scroll_offset + self.header_offset;
        self.sections.iter().position(|id| match viewport.section_bounds(id) {
            Some(bounds) => bounds.contains(probe),
            None => {
                log::debug!("[sections] #{id} not rendered; skipped");
                false
            }
        })
    }

    /// Re-evaluate on scroll (and once at mount). Returns the new active id
    /// when it changed; leaves the state untouched when no section qualifies.
    pub fn on_scroll(
        &mut self,
        scroll_offset: f64,
        viewport: &impl Viewport,
    ) -> Option<&'static str> {
        let idx = self.locate(scroll_offset, viewport)?;
        if idx == self.active {
            return None;
        }
        self.active = idx;
        log::debug!("[sections] active -> {}", self.sections[idx]);
        Some(self.sections[idx])
    }

    /// Smooth-scroll to a declared section. No-op for unknown ids.
    pub fn navigate_to_section(&self, id: &str, viewport: &impl Viewport) -> bool {
        if !self.sections.iter().any(|s| *s == id) {
            log::debug!("[sections] navigate to unknown section {id:?} ignored");
            return false;
        }
        viewport.scroll_to_section(id)
    }
}

/// Section id a nav label points at (`"About"` -> `"about"`).
#[inline]
pub fn nav_target(label: &str) -> String {
    label.to_lowercase()
}
