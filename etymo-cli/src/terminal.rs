use std::io::Write;

use ansi_term::Colour::{Green, Red};
use etymo_client::view::{ElementId, FormBinding, FormView, MemoryView};
use log::error;

/// Prints the page to a terminal: alerts as they happen, the bound outputs
/// each time the panel is shown.
pub struct TerminalView<W: Write> {
    page: MemoryView,
    binding: FormBinding,
    out: W,
    colours: bool,
}

impl<W: Write> TerminalView<W> {
    pub fn new(binding: FormBinding, out: W, colours: bool) -> Self {
        TerminalView {
            page: MemoryView::new(),
            binding,
            out,
            colours,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn print(&mut self, line: String) {
        if let Err(err) = writeln!(self.out, "{}", line) {
            error!("failed.writing.terminal: {}", err);
        }
    }
}

impl<W: Write> FormView for TerminalView<W> {
    fn input_value(&self, input: &ElementId) -> String {
        self.page.input_value(input)
    }

    fn set_input_value(&mut self, input: &ElementId, value: String) {
        self.page.set_input_value(input, value)
    }

    fn set_text(&mut self, element: &ElementId, text: String) {
        self.page.set_text(element, text)
    }

    fn show(&mut self, element: &ElementId) {
        self.page.show(element);
        if *element != self.binding.panel {
            return;
        }
        let lines: Vec<String> = self
            .binding
            .outputs
            .iter()
            .map(|id| self.page.text(id).unwrap_or_default().to_string())
            .collect();
        for line in lines {
            let line = if self.colours { Green.paint(line).to_string() } else { line };
            self.print(line);
        }
        self.print(String::new());
    }

    fn alert(&mut self, message: String) {
        let line = format!("! {}", message);
        let line = if self.colours { Red.bold().paint(line).to_string() } else { line };
        self.print(line);
        self.page.alert(message);
    }
}
