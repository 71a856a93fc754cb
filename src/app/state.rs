//! Application state definitions

use crate::content::SiteData;

/// A top-level portfolio section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    About,
    Skills,
    Projects,
    Career,
    Education,
    Contact,
}

impl Section {
    /// Panel title for the section
    pub fn title(self) -> &'static str {
        match self {
            Section::Hero => "Hello",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Career => "Career",
            Section::Education => "Education",
            Section::Contact => "Contact",
        }
    }

    /// Sections present for this content, in display order.
    ///
    /// Collections that are empty in the content file simply have no
    /// section; hero, about and contact are always shown.
    pub fn available(data: &SiteData) -> Vec<Section> {
        let mut sections = vec![Section::Hero, Section::About];
        if !data.profile.skills.is_empty() {
            sections.push(Section::Skills);
        }
        if !data.projects.is_empty() {
            sections.push(Section::Projects);
        }
        if !data.experience.is_empty() {
            sections.push(Section::Career);
        }
        if !data.education.is_empty() || !data.certifications.is_empty() {
            sections.push(Section::Education);
        }
        sections.push(Section::Contact);
        sections
    }
}

/// Scroll state for the content panel
#[derive(Debug, Clone, Default)]
pub struct ContentState {
    /// Current scroll position (lines from top)
    pub scroll_offset: usize,
    /// Total rendered lines (updated on render)
    pub total_lines: usize,
    /// Visible height in lines (updated on render)
    pub visible_height: usize,
}

impl ContentState {
    /// Get the maximum allowed scroll offset
    pub fn max_scroll(&self) -> usize {
        self.total_lines.saturating_sub(self.visible_height / 2)
    }

    /// Clamp scroll offset to valid range
    pub fn clamp_scroll(&mut self) {
        let max = self.max_scroll();
        if self.scroll_offset > max {
            self.scroll_offset = max;
        }
    }

    /// Scroll down by `lines` (clamped on the next render)
    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_add(lines);
    }

    /// Scroll up by `lines`
    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }
}

/// Full application state
#[derive(Debug)]
pub struct AppState {
    /// Sections available for the loaded content
    pub sections: Vec<Section>,
    /// Index of the selected section
    pub selected: usize,
    /// Content panel scroll state
    pub content: ContentState,
}

impl AppState {
    pub fn new(data: &SiteData) -> Self {
        Self { sections: Section::available(data), selected: 0, content: ContentState::default() }
    }

    /// The currently selected section
    pub fn selected_section(&self) -> Section {
        self.sections[self.selected]
    }

    /// Select the next section, resetting scroll
    pub fn select_next(&mut self) {
        if self.selected + 1 < self.sections.len() {
            self.selected += 1;
            self.content.scroll_offset = 0;
        }
    }

    /// Select the previous section, resetting scroll
    pub fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.content.scroll_offset = 0;
        }
    }
}
