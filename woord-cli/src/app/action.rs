/// User actions that can be performed in the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move selection up
    MoveUp,
    /// Move selection down
    MoveDown,
    /// Open the selected list
    Confirm,
    /// Swap the displayed column order
    ToggleSwap,
    /// Return to the list selection
    Back,
    /// Scroll the word table up one line
    ScrollUp,
    /// Scroll the word table down one line
    ScrollDown,
    /// Scroll the word table up by a page
    PageUp,
    /// Scroll the word table down by a page
    PageDown,
    /// Quit the application
    Quit,
    /// No action (for tick events)
    Tick,
}
