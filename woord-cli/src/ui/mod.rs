mod footer;
mod header;
mod layout;
mod list_view;
mod progress;
mod theme;
mod word_view;

pub use footer::Footer;
pub use header::Header;
pub use layout::AppLayout;
pub use list_view::ListView;
pub use progress::ProgressView;
pub use theme::Theme;
pub use word_view::WordView;
