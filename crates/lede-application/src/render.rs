//! Shapes assistant replies for display.

/// An assistant reply broken into displayable parts.
///
/// Key-point replies (and anything the service bullets itself) render as a
/// list; everything else as paragraphs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormattedReply {
    List(Vec<String>),
    Paragraphs(Vec<String>),
}

impl FormattedReply {
    /// Splits a raw reply into list items or paragraphs.
    ///
    /// `as_list` forces list rendering regardless of the text; bullets in the
    /// text opt into it. A reply that yields no parts falls back to one
    /// paragraph of the raw text so nothing is ever swallowed.
    pub fn from_reply(text: &str, as_list: bool) -> Self {
        if as_list || text.contains('•') {
            let items: Vec<String> = text
                .split(['\n', '•'])
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .map(str::to_string)
                .collect();
            if !items.is_empty() {
                return Self::List(items);
            }
        }

        let paragraphs: Vec<String> = text
            .split("\n\n")
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect();

        if paragraphs.is_empty() {
            Self::Paragraphs(vec![text.to_string()])
        } else {
            Self::Paragraphs(paragraphs)
        }
    }
}
