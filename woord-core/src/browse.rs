use crate::format::{format_header, format_words};
use crate::list::WordList;

/// Fixed hint shown on every frame
pub const QUIT_HINT: &str = "q / esc / ctrl+c to quit";

/// Title shown while choosing a list
pub const SELECT_TITLE: &str = "Select a word list";

/// Browse mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrowseMode {
    /// Choosing a list
    #[default]
    Selecting,
    /// Looking at the words of the chosen list
    Viewing,
}

/// Discrete input driving the view-model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseInput {
    MoveUp,
    MoveDown,
    Confirm,
    ToggleSwap,
    Back,
    Quit,
    Resize,
}

/// Per-session browse state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowseState {
    /// Index of the highlighted list
    pub cursor: usize,
    pub mode: BrowseMode,
    /// Display-only column swap
    pub swapped: bool,
    pub quit: bool,
}

/// Text for one rendered frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub title: String,
    pub body: String,
    pub hint: &'static str,
}

/// Selection/detail state machine over an in-memory set of word lists
#[derive(Debug, Clone)]
pub struct Browser {
    lists: Vec<WordList>,
    state: BrowseState,
}

impl Browser {
    pub fn new(lists: Vec<WordList>) -> Self {
        Self {
            lists,
            state: BrowseState::default(),
        }
    }

    pub fn lists(&self) -> &[WordList] {
        &self.lists
    }

    pub fn mode(&self) -> BrowseMode {
        self.state.mode
    }

    pub fn cursor(&self) -> usize {
        self.state.cursor
    }

    pub fn is_swapped(&self) -> bool {
        self.state.swapped
    }

    pub fn should_quit(&self) -> bool {
        self.state.quit
    }

    /// List under the cursor
    pub fn selected(&self) -> Option<&WordList> {
        self.lists.get(self.state.cursor)
    }

    /// Apply one input. Returns true if the state changed.
    pub fn apply(&mut self, input: BrowseInput) -> bool {
        let before = self.state.clone();

        match (self.state.mode, input) {
            (_, BrowseInput::Quit) => self.state.quit = true,
            (_, BrowseInput::Resize) => {}
            (BrowseMode::Selecting, BrowseInput::MoveUp) => self.move_up(),
            (BrowseMode::Selecting, BrowseInput::MoveDown) => self.move_down(),
            (BrowseMode::Selecting, BrowseInput::Confirm) => self.confirm(),
            (BrowseMode::Viewing, BrowseInput::ToggleSwap) => self.toggle_swap(),
            (BrowseMode::Viewing, BrowseInput::Back) => self.back(),
            _ => {}
        }

        self.state != before
    }

    fn move_up(&mut self) {
        self.state.cursor = self.state.cursor.saturating_sub(1);
    }

    fn move_down(&mut self) {
        if self.state.cursor < self.lists.len().saturating_sub(1) {
            self.state.cursor += 1;
        }
    }

    fn confirm(&mut self) {
        if self.selected().is_some() {
            self.state.mode = BrowseMode::Viewing;
        }
    }

    fn toggle_swap(&mut self) {
        self.state.swapped = !self.state.swapped;
    }

    fn back(&mut self) {
        self.state.mode = BrowseMode::Selecting;
        self.state.swapped = false;
    }

    /// Body text of the selection screen, cursor row marked with `>`
    pub fn selection_text(&self) -> String {
        let mut s = String::new();
        for (i, list) in self.lists.iter().enumerate() {
            let marker = if i == self.state.cursor { "> " } else { "  " };
            s.push_str(marker);
            s.push_str(list.name());
            s.push('\n');
        }
        s
    }

    /// Render the current state. Pure: calling it twice yields the same frame.
    pub fn frame(&self) -> Frame {
        match (self.state.mode, self.selected()) {
            (BrowseMode::Viewing, Some(list)) => Frame {
                title: format_header(list, self.state.swapped),
                body: format_words(list, self.state.swapped),
                hint: QUIT_HINT,
            },
            _ => Frame {
                title: SELECT_TITLE.to_string(),
                body: self.selection_text(),
                hint: QUIT_HINT,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::{Languages, WordPair, WordPairs};

    fn browser(count: usize) -> Browser {
        let lists = (0..count)
            .map(|i| {
                WordList::new(
                    i.to_string(),
                    format!("List {i}"),
                    Languages::new("Dutch", "Russian"),
                    WordPairs::new(vec![WordPair::new("hond", "собака")]),
                )
            })
            .collect();
        Browser::new(lists)
    }

    #[test]
    fn test_cursor_floor() {
        let mut b = browser(3);
        assert!(!b.apply(BrowseInput::MoveUp));
        assert_eq!(b.cursor(), 0);
    }

    #[test]
    fn test_cursor_ceiling() {
        let mut b = browser(3);
        for _ in 0..10 {
            b.apply(BrowseInput::MoveDown);
        }
        assert_eq!(b.cursor(), 2);
        assert!(!b.apply(BrowseInput::MoveDown));
        b.apply(BrowseInput::MoveUp);
        assert_eq!(b.cursor(), 1);
    }

    #[test]
    fn test_cursor_empty_collection() {
        let mut b = browser(0);
        b.apply(BrowseInput::MoveDown);
        assert_eq!(b.cursor(), 0);
        assert!(!b.apply(BrowseInput::Confirm));
        assert_eq!(b.mode(), BrowseMode::Selecting);
    }

    #[test]
    fn test_confirm_and_back() {
        let mut b = browser(2);
        b.apply(BrowseInput::MoveDown);
        assert!(b.apply(BrowseInput::Confirm));
        assert_eq!(b.mode(), BrowseMode::Viewing);

        // Confirm in Viewing is a no-op
        assert!(!b.apply(BrowseInput::Confirm));

        b.apply(BrowseInput::ToggleSwap);
        assert!(b.is_swapped());

        assert!(b.apply(BrowseInput::Back));
        assert_eq!(b.mode(), BrowseMode::Selecting);
        assert!(!b.is_swapped());
        assert_eq!(b.cursor(), 1);
    }

    #[test]
    fn test_inputs_ignored_in_wrong_mode() {
        let mut b = browser(2);
        assert!(!b.apply(BrowseInput::ToggleSwap));
        assert!(!b.apply(BrowseInput::Back));

        b.apply(BrowseInput::Confirm);
        assert!(!b.apply(BrowseInput::MoveDown));
        assert_eq!(b.cursor(), 0);
    }

    #[test]
    fn test_quit_from_any_mode() {
        let mut b = browser(1);
        b.apply(BrowseInput::Quit);
        assert!(b.should_quit());

        let mut b = browser(1);
        b.apply(BrowseInput::Confirm);
        b.apply(BrowseInput::Quit);
        assert!(b.should_quit());
    }

    #[test]
    fn test_resize_keeps_frame() {
        let mut b = browser(2);
        b.apply(BrowseInput::Confirm);
        let frame = b.frame();
        assert!(!b.apply(BrowseInput::Resize));
        assert_eq!(b.frame(), frame);
    }

    #[test]
    fn test_frames() {
        let mut b = browser(2);
        let frame = b.frame();
        assert_eq!(frame.title, SELECT_TITLE);
        assert_eq!(frame.body, "> List 0\n  List 1\n");
        assert_eq!(frame.hint, QUIT_HINT);

        b.apply(BrowseInput::Confirm);
        let frame = b.frame();
        assert_eq!(frame.title, "Russian Dutch");
        assert_eq!(frame.body, "собака  hond\n");

        b.apply(BrowseInput::ToggleSwap);
        assert_eq!(b.frame().title, "Dutch Russian");
        b.apply(BrowseInput::ToggleSwap);
        assert_eq!(b.frame(), frame);
    }
}
