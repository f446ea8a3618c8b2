use ratatui::widgets::ListState;

use poehali_studio::landing::Section;
use poehali_studio::{ContactForm, GenerationController, GeneratorClient, ToastQueue};

/// Toasts visible at once
const MAX_TOASTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusPane {
    Navigation,
    Content,
}

pub struct App {
    // Core state
    pub should_quit: bool,
    pub input_mode: InputMode,
    pub focus: FocusPane,

    // Landing navigation
    pub sections: Vec<Section>,
    pub section_state: ListState,
    pub content_scroll: u16,

    // Contact form (Contact section only)
    pub contact: ContactForm,

    // Generator dialog
    pub generator: GenerationController,
    pub client: GeneratorClient,

    // Notifications
    pub toasts: ToastQueue,

    // Animation state
    pub animation_frame: u8, // 0-2 for ellipsis animation
}

impl App {
    pub fn new(client: GeneratorClient) -> Self {
        let mut section_state = ListState::default();
        section_state.select(Some(0));

        Self {
            should_quit: false,
            input_mode: InputMode::Normal,
            focus: FocusPane::Navigation,

            sections: Section::all(),
            section_state,
            content_scroll: 0,

            contact: ContactForm::new(),

            generator: GenerationController::new(),
            client,

            toasts: ToastQueue::new(MAX_TOASTS),

            animation_frame: 0,
        }
    }

    pub fn selected_section(&self) -> Section {
        self.section_state
            .selected()
            .and_then(|i| self.sections.get(i).copied())
            .unwrap_or(Section::Home)
    }

    // Navigation actions
    pub fn nav_down(&mut self) {
        let len = self.sections.len();
        if len > 0 {
            let i = self.section_state.selected().unwrap_or(0);
            self.select_section((i + 1).min(len - 1));
        }
    }

    pub fn nav_up(&mut self) {
        let i = self.section_state.selected().unwrap_or(0);
        self.select_section(i.saturating_sub(1));
    }

    pub fn nav_first(&mut self) {
        self.select_section(0);
    }

    pub fn nav_last(&mut self) {
        let len = self.sections.len();
        if len > 0 {
            self.select_section(len - 1);
        }
    }

    pub fn jump_to(&mut self, section: Section) {
        if let Some(i) = self.sections.iter().position(|s| *s == section) {
            self.select_section(i);
        }
    }

    fn select_section(&mut self, i: usize) {
        if self.section_state.selected() != Some(i) {
            self.content_scroll = 0;
        }
        self.section_state.select(Some(i));
    }

    // Content scrolling
    pub fn scroll_down(&mut self) {
        self.content_scroll = self.content_scroll.saturating_add(1);
    }

    pub fn scroll_up(&mut self) {
        self.content_scroll = self.content_scroll.saturating_sub(1);
    }

    /// Enter the contact form for editing
    pub fn focus_contact_form(&mut self) {
        self.jump_to(Section::Contact);
        self.focus = FocusPane::Content;
        self.input_mode = InputMode::Editing;
    }

    pub fn open_generator(&mut self) {
        self.generator.open();
        self.input_mode = InputMode::Editing;
    }

    pub fn close_generator(&mut self) {
        self.generator.dismiss();
        self.input_mode = InputMode::Normal;
    }

    /// Tick animation frame and age toasts (called by Tick event)
    pub fn tick(&mut self) {
        if self.generator.is_in_flight() {
            self.animation_frame = (self.animation_frame + 1) % 3;
        }
        self.toasts.tick();
    }
}
