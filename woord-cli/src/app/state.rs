use tracing::warn;
use woord_core::{
    BrowseInput, BrowseMode, Browser, FetchMessage, FetchProgress, Frame, WordList,
};

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Waiting for the retrieval pipeline
    Loading,
    /// Choosing a word list
    Selecting,
    /// Looking at one list
    Viewing,
}

/// Application state
pub struct AppState {
    /// Selection/detail view-model
    pub browser: Browser,
    /// Whether lists are still being retrieved
    pub loading: bool,
    /// Current loading stage description
    pub status: String,
    /// Current retrieval progress
    pub progress: FetchProgress,
    /// Short description of where the lists came from
    pub source_label: String,
    /// First visible row of the selection list
    pub list_scroll: usize,
    /// First visible row of the word table
    pub word_scroll: usize,
    /// Visible body height (set by UI)
    pub visible_height: usize,
    /// Whether app should quit
    pub should_quit: bool,
    /// Spinner frame for animation
    pub spinner_frame: usize,
    /// Unrecoverable error that ended the session
    pub fatal_error: Option<String>,
}

impl AppState {
    pub fn new(source_label: impl Into<String>) -> Self {
        Self {
            browser: Browser::new(Vec::new()),
            loading: true,
            status: "Starting...".to_string(),
            progress: FetchProgress::default(),
            source_label: source_label.into(),
            list_scroll: 0,
            word_scroll: 0,
            visible_height: 20,
            should_quit: false,
            spinner_frame: 0,
            fatal_error: None,
        }
    }

    /// State for lists that are already in memory
    pub fn with_lists(source_label: impl Into<String>, lists: Vec<WordList>) -> Self {
        let mut state = Self::new(source_label);
        state.set_lists(lists);
        state
    }

    /// Install retrieved lists and start selecting
    pub fn set_lists(&mut self, lists: Vec<WordList>) {
        self.browser = Browser::new(lists);
        self.loading = false;
        self.list_scroll = 0;
        self.word_scroll = 0;
    }

    pub fn mode(&self) -> AppMode {
        if self.loading {
            return AppMode::Loading;
        }
        match self.browser.mode() {
            BrowseMode::Selecting => AppMode::Selecting,
            BrowseMode::Viewing => AppMode::Viewing,
        }
    }

    pub fn frame(&self) -> Frame {
        self.browser.frame()
    }

    /// Update loading status from a retrieval message
    pub fn handle_fetch_message(&mut self, msg: &FetchMessage) {
        match msg {
            FetchMessage::Authenticating => self.status = "Signing in...".to_string(),
            FetchMessage::Searching(term) => {
                self.status = format!("Searching official lists for \"{term}\"...")
            }
            FetchMessage::Found(count) => {
                self.status = format!("Found {count} lists");
                self.progress.total = *count;
            }
            FetchMessage::Progress(progress) => {
                self.status = "Downloading lists...".to_string();
                self.progress = progress.clone();
            }
            FetchMessage::ListFailed { id, error } => {
                warn!(id = %id, error = %error, "list unavailable");
            }
            FetchMessage::Completed => self.status = "Done".to_string(),
            FetchMessage::Cancelled => self.status = "Cancelled".to_string(),
            FetchMessage::Fatal(error) => self.fail(error.clone()),
        }
    }

    /// Advance spinner animation
    pub fn tick_spinner(&mut self) {
        self.spinner_frame = (self.spinner_frame + 1) % 10;
    }

    /// Ensure the given index is visible within the scroll viewport
    fn ensure_visible_for(selected: usize, scroll: &mut usize, visible_height: usize) {
        if selected < *scroll {
            *scroll = selected;
        } else if selected >= *scroll + visible_height {
            *scroll = selected + 1 - visible_height;
        }
    }

    fn word_rows(&self) -> usize {
        self.browser.selected().map(WordList::pair_count).unwrap_or(0)
    }

    fn max_word_scroll(&self) -> usize {
        self.word_rows().saturating_sub(self.visible_height)
    }

    fn browse(&mut self, input: BrowseInput) {
        if self.browser.apply(input) {
            self.word_scroll = 0;
        }
        let vh = self.visible_height.max(1);
        Self::ensure_visible_for(self.browser.cursor(), &mut self.list_scroll, vh);
    }

    /// Move selection up
    pub fn move_up(&mut self) {
        self.browse(BrowseInput::MoveUp);
    }

    /// Move selection down
    pub fn move_down(&mut self) {
        self.browse(BrowseInput::MoveDown);
    }

    /// Open the selected list
    pub fn confirm(&mut self) {
        self.browse(BrowseInput::Confirm);
    }

    pub fn toggle_swap(&mut self) {
        self.browse(BrowseInput::ToggleSwap);
    }

    /// Back to selection
    pub fn back(&mut self) {
        self.browse(BrowseInput::Back);
    }

    /// Re-layout after a terminal resize
    pub fn resize(&mut self, visible_height: usize) {
        self.visible_height = visible_height;
        self.browse(BrowseInput::Resize);
        self.word_scroll = self.word_scroll.min(self.max_word_scroll());
    }

    pub fn scroll_up(&mut self) {
        self.word_scroll = self.word_scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.word_scroll = (self.word_scroll + 1).min(self.max_word_scroll());
    }

    pub fn page_up(&mut self) {
        let page = self.visible_height.saturating_sub(2).max(1);
        self.word_scroll = self.word_scroll.saturating_sub(page);
    }

    pub fn page_down(&mut self) {
        let page = self.visible_height.saturating_sub(2).max(1);
        self.word_scroll = (self.word_scroll + page).min(self.max_word_scroll());
    }

    /// Request quit
    pub fn quit(&mut self) {
        self.browser.apply(BrowseInput::Quit);
        self.should_quit = true;
    }

    /// End the session with an unrecoverable error
    pub fn fail(&mut self, message: String) {
        self.fatal_error = Some(message);
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use woord_core::{Languages, WordPairs};

    fn lists(count: usize, words: usize) -> Vec<WordList> {
        (0..count)
            .map(|i| {
                let flat = (0..words * 2).map(|w| format!("w{w}")).collect();
                let (pairs, _) = WordPairs::from_flat(flat);
                WordList::new(i.to_string(), format!("List {i}"), Languages::new("a", "b"), pairs)
            })
            .collect()
    }

    #[test]
    fn test_loading_until_lists_arrive() {
        let mut state = AppState::new("wrts");
        assert_eq!(state.mode(), AppMode::Loading);

        state.set_lists(lists(2, 1));
        assert_eq!(state.mode(), AppMode::Selecting);
    }

    #[test]
    fn test_fetch_messages_update_status() {
        let mut state = AppState::new("wrts");
        state.handle_fetch_message(&FetchMessage::Found(4));
        assert_eq!(state.progress.total, 4);

        state.handle_fetch_message(&FetchMessage::Fatal("bad password".to_string()));
        assert!(state.should_quit);
        assert_eq!(state.fatal_error.as_deref(), Some("bad password"));
    }

    #[test]
    fn test_list_scroll_follows_cursor() {
        let mut state = AppState::with_lists("local", lists(10, 1));
        state.visible_height = 3;
        for _ in 0..5 {
            state.move_down();
        }
        assert_eq!(state.browser.cursor(), 5);
        assert_eq!(state.list_scroll, 3);

        for _ in 0..5 {
            state.move_up();
        }
        assert_eq!(state.list_scroll, 0);
    }

    #[test]
    fn test_word_scroll_clamped_and_reset() {
        let mut state = AppState::with_lists("local", lists(1, 10));
        state.visible_height = 4;
        state.confirm();
        assert_eq!(state.mode(), AppMode::Viewing);

        for _ in 0..20 {
            state.scroll_down();
        }
        assert_eq!(state.word_scroll, 6);

        state.toggle_swap();
        assert_eq!(state.word_scroll, 0);

        state.page_down();
        state.back();
        assert_eq!(state.mode(), AppMode::Selecting);
        assert_eq!(state.word_scroll, 0);
    }

    #[test]
    fn test_resize_clamps_scroll() {
        let mut state = AppState::with_lists("local", lists(1, 10));
        state.visible_height = 2;
        state.confirm();
        for _ in 0..20 {
            state.scroll_down();
        }
        assert_eq!(state.word_scroll, 8);

        state.resize(8);
        assert_eq!(state.word_scroll, 2);
        assert_eq!(state.mode(), AppMode::Viewing);
    }
}
