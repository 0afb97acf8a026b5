//! Where reports are rendered to.

/// Line sink for reports.
///
/// Reports call the semantic methods; a sink only decides where finished
/// lines go by implementing [`Output::emit_line`].
pub trait Output {
    fn emit_line(&mut self, line: String);

    fn section(&mut self, name: &str) {
        self.emit_line(format!("{name}:"));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.emit_line(format!("{key}: {value}"));
    }

    fn list_item(&mut self, text: &str) {
        self.emit_line(format!("  - {text}"));
    }

    /// A file that was written.
    fn added_item(&mut self, text: &str) {
        self.emit_line(format!("  + {text}"));
    }

    /// A file that already existed and was left alone.
    fn kept_item(&mut self, text: &str) {
        self.emit_line(format!("  = {text}"));
    }

    fn divider(&mut self, label: &str) {
        self.emit_line(format!("── {label} ──"));
    }

    /// Multi-line text, emitted line by line without decoration.
    fn preformatted(&mut self, text: &str) {
        for line in text.lines() {
            self.emit_line(line.to_string());
        }
    }

    fn newline(&mut self) {
        self.emit_line(String::new());
    }
}

/// A report that can render itself to an output.
pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Prints to stdout.
#[derive(Debug, Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Output for TerminalOutput {
    fn emit_line(&mut self, line: String) {
        println!("{line}");
    }
}

#[cfg(test)]
#[derive(Debug, Default)]
pub struct BufferOutput {
    pub lines: Vec<String>,
}

#[cfg(test)]
impl Output for BufferOutput {
    fn emit_line(&mut self, line: String) {
        self.lines.push(line);
    }
}
