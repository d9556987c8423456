//! Program text buffer

/// First `N` number when line numbering is enabled
pub const LINE_NUMBER_START: u32 = 10;

/// Increment between consecutive `N` numbers
pub const LINE_NUMBER_STEP: u32 = 10;

/// Append-only list of program lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgramOutput {
    lines: Vec<String>,
}

impl ProgramOutput {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one line (without terminator)
    pub fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Append a parenthesized comment line
    pub fn push_comment(&mut self, text: impl std::fmt::Display) {
        self.lines.push(format!("({})", text));
    }

    /// Append every line of a block of text verbatim
    ///
    /// A missing final terminator in `text` does not matter; a trailing
    /// terminator does not add an empty line.
    pub fn push_text(&mut self, text: &str) {
        self.lines.extend(text.lines().map(str::to_string));
    }

    /// Lines collected so far
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines collected so far
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether no line has been collected
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Render the program with one `\n` per line
    ///
    /// With `line_numbers` every non-blank line is prefixed `N10 `, `N20 `, ...
    pub fn render(&self, line_numbers: bool) -> String {
        let mut text = String::new();
        let mut number = LINE_NUMBER_START;

        for line in &self.lines {
            if line_numbers && !line.trim().is_empty() {
                text.push_str(&format!("N{} ", number));
                number += LINE_NUMBER_STEP;
            }
            text.push_str(line);
            text.push('\n');
        }

        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_text_terminators() {
        let mut out = ProgramOutput::new();
        out.push_text("G90\nG21");
        out.push_text("M30\n");
        out.push_text("");
        assert_eq!(out.lines(), &["G90", "G21", "M30"]);
        assert_eq!(out.render(false), "G90\nG21\nM30\n");
    }

    #[test]
    fn test_push_text_keeps_blank_lines() {
        let mut out = ProgramOutput::new();
        out.push_text("G90\n\nG21\n");
        assert_eq!(out.len(), 3);
        assert_eq!(out.render(false), "G90\n\nG21\n");
    }

    #[test]
    fn test_comment() {
        let mut out = ProgramOutput::new();
        out.push_comment("begin preamble");
        assert_eq!(out.render(false), "(begin preamble)\n");
    }

    #[test]
    fn test_line_numbers_skip_blank_lines() {
        let mut out = ProgramOutput::new();
        out.push_line("G90");
        out.push_line("");
        out.push_line("G21");
        assert_eq!(out.render(true), "N10 G90\n\nN20 G21\n");
    }

    #[test]
    fn test_empty_render() {
        let out = ProgramOutput::new();
        assert!(out.is_empty());
        assert_eq!(out.render(true), "");
    }
}
