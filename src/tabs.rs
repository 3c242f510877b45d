//! The tabbed view: About / Skills / Work sections plus a Resume tab that
//! opens the resume instead of becoming active.

use crate::content::{document_page, RESUME_BLOCKS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    About,
    Skills,
    Work,
    Resume,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::About,
        Section::Skills,
        Section::Work,
        Section::Resume,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Work => "Work",
            Section::Resume => "Resume ↗",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Section::About => 0,
            Section::Skills => 1,
            Section::Work => 2,
            Section::Resume => 3,
        }
    }

    /// Next content section. Resume is never reached by cycling.
    pub fn next(&self) -> Section {
        match self {
            Section::About => Section::Skills,
            Section::Skills => Section::Work,
            Section::Work | Section::Resume => Section::About,
        }
    }

    pub fn prev(&self) -> Section {
        match self {
            Section::About | Section::Resume => Section::Work,
            Section::Skills => Section::About,
            Section::Work => Section::Skills,
        }
    }

    /// Document lines shown for a content section.
    pub fn body(&self) -> &'static [&'static str] {
        let page = match self {
            Section::About => "about",
            Section::Skills => "skills",
            Section::Work | Section::Resume => return &[],
        };
        document_page(page).map(|d| d.body).unwrap_or(&[])
    }
}

/// What the caller must do after a tabs key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabAction {
    None,
    OpenResume,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabsState {
    pub active: Section,
    pub selected_block: usize,
    pub expanded: Vec<bool>,
}

impl Default for TabsState {
    fn default() -> Self {
        Self {
            active: Section::default(),
            selected_block: 0,
            expanded: vec![false; RESUME_BLOCKS.len()],
        }
    }
}

impl TabsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, section: Section) -> TabAction {
        if section == Section::Resume {
            return TabAction::OpenResume;
        }
        self.active = section;
        TabAction::None
    }

    pub fn next_section(&mut self) {
        self.active = self.active.next();
    }

    pub fn prev_section(&mut self) {
        self.active = self.active.prev();
    }

    pub fn select_next_block(&mut self) {
        if !self.expanded.is_empty() {
            self.selected_block = (self.selected_block + 1) % self.expanded.len();
        }
    }

    pub fn select_prev_block(&mut self) {
        if !self.expanded.is_empty() {
            self.selected_block = self
                .selected_block
                .checked_sub(1)
                .unwrap_or(self.expanded.len() - 1);
        }
    }

    pub fn toggle_selected(&mut self) {
        if let Some(open) = self.expanded.get_mut(self.selected_block) {
            *open = !*open;
        }
    }

    pub fn is_expanded(&self, block: usize) -> bool {
        self.expanded.get(block).copied().unwrap_or(false)
    }
}
