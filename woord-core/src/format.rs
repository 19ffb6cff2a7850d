use unicode_width::UnicodeWidthStr;

use crate::list::{WordList, WordPair};

/// Space between the two columns
const GUTTER: &str = "  ";

/// Column order for one pair. Unswapped shows the target language first.
fn columns(pair: &WordPair, swapped: bool) -> (&str, &str) {
    if swapped {
        (&pair.source, &pair.target)
    } else {
        (&pair.target, &pair.source)
    }
}

/// Right-align `text` to `width` display columns
fn pad_left(out: &mut String, text: &str, width: usize) {
    let pad = width.saturating_sub(text.width());
    out.extend(std::iter::repeat_n(' ', pad));
    out.push_str(text);
}

/// Render the word pairs of a list as a right-aligned two-column table,
/// one row per pair.
pub fn format_words(list: &WordList, swapped: bool) -> String {
    let rows: Vec<(&str, &str)> = list.words().iter().map(|p| columns(p, swapped)).collect();

    let left_width = rows.iter().map(|(l, _)| l.width()).max().unwrap_or(0);
    let right_width = rows.iter().map(|(_, r)| r.width()).max().unwrap_or(0);

    let mut out = String::new();
    for (left, right) in rows {
        pad_left(&mut out, left, left_width);
        out.push_str(GUTTER);
        pad_left(&mut out, right, right_width);
        out.push('\n');
    }
    out
}

/// Language names in the same order as the `format_words` columns
pub fn format_header(list: &WordList, swapped: bool) -> String {
    let langs = list.languages();
    if swapped {
        format!("{} {}", langs.source, langs.target)
    } else {
        format!("{} {}", langs.target, langs.source)
    }
}
