//! Typewriter State
//!
//! Reveals a script one character per tick, line by line.

#[derive(Debug, Clone, PartialEq)]
pub struct Typewriter {
    lines: Vec<String>,
    /// Line currently being typed
    line: usize,
    /// Characters of that line already shown
    chars: usize,
}

impl Typewriter {
    pub fn new(lines: Vec<String>) -> Self {
        let mut tw = Self { lines, line: 0, chars: 0 };
        tw.skip_empty();
        tw
    }

    fn skip_empty(&mut self) {
        while self.line < self.lines.len() && self.lines[self.line].is_empty() {
            self.line += 1;
        }
    }

    pub fn is_done(&self) -> bool {
        self.line >= self.lines.len()
    }

    /// Reveal one more character. Returns false once everything is shown.
    pub fn tick(&mut self) -> bool {
        if self.is_done() {
            return false;
        }
        self.chars += 1;
        if self.chars >= self.lines[self.line].chars().count() {
            self.line += 1;
            self.chars = 0;
            self.skip_empty();
        }
        true
    }

    /// Lines as currently shown; the last one may be partial
    pub fn visible(&self) -> Vec<String> {
        let mut shown: Vec<String> = self.lines.iter().take(self.line).cloned().collect();
        if let Some(current) = self.lines.get(self.line) {
            if self.chars > 0 {
                shown.push(current.chars().take(self.chars).collect());
            }
        }
        shown
    }

    /// Show everything immediately
    pub fn finish(&mut self) {
        self.line = self.lines.len();
        self.chars = 0;
    }
}
