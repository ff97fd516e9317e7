/// Narrowest bubble drawn, regardless of message length.
pub const MIN_BUBBLE_WIDTH: usize = 10;

/// Speech-bubble frame placed above a cat.
///
/// Width is counted in `char`s, not terminal columns, so wide glyphs in the
/// message can push the right border out of line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeechBubble {
    min_width: usize,
}

impl SpeechBubble {
    pub fn new(min_width: usize) -> Self {
        Self { min_width }
    }

    pub fn min_width(&self) -> usize {
        self.min_width
    }

    pub fn width_for(&self, message: &str) -> usize {
        (message.chars().count() + 2).max(self.min_width)
    }

    /// Border, content line, border and the connector, without the cat.
    pub fn render(&self, message: &str) -> String {
        let width = self.width_for(message);
        let rule = "-".repeat(width);
        format!(".{rule}.\n| {message:<width$}|\n'{rule}'\n  \\")
    }

    pub fn wrap(&self, message: &str, art: &str) -> String {
        format!("{}\n{}", self.render(message), art)
    }
}

impl Default for SpeechBubble {
    fn default() -> Self {
        Self::new(MIN_BUBBLE_WIDTH)
    }
}

pub fn with_speech_bubble(message: &str, art: &str) -> String {
    SpeechBubble::default().wrap(message, art)
}
