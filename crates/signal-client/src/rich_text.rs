//! Outgoing styled text.

/// A run of text with a single style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Plain(String),
    Bold(String),
}

/// Message builder for styled replies.
///
/// Rendered for signal-cli's `styled` text mode, where `**text**` is bold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RichText {
    spans: Vec<Span>,
}

impl RichText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.spans.push(Span::Plain(text.into()));
        self
    }

    pub fn bold(mut self, text: impl Into<String>) -> Self {
        self.spans.push(Span::Bold(text.into()));
        self
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Text without any styling markers.
    pub fn plain(&self) -> String {
        self.spans
            .iter()
            .map(|span| match span {
                Span::Plain(t) | Span::Bold(t) => t.as_str(),
            })
            .collect()
    }

    /// Text with `**` markers around bold spans.
    pub fn to_styled(&self) -> String {
        let mut out = String::new();
        for span in &self.spans {
            match span {
                Span::Plain(t) => out.push_str(t),
                Span::Bold(t) => {
                    out.push_str("**");
                    out.push_str(t);
                    out.push_str("**");
                }
            }
        }
        out
    }
}
