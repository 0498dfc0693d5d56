//! Report rendering
//!
//! Purely presentation: every report line, then a blank separator line.

use crate::dispatch::FileReport;
use std::io::{self, Write};

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Render a report as text
    pub fn render(&self, report: &FileReport) -> String {
        let mut output = String::new();
        for line in &report.lines {
            output.push_str(line);
            output.push('\n');
        }
        output.push('\n');
        output
    }

    /// Write a rendered report to `out`
    pub fn write_to<W: Write>(&self, out: &mut W, report: &FileReport) -> io::Result<()> {
        out.write_all(self.render(report).as_bytes())
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_lines_then_blank_separator() {
        let report = FileReport {
            path: PathBuf::from("report.txt"),
            lines: vec!["report.txt".to_string(), "TXT file".to_string()],
        };

        assert_eq!(Renderer::new().render(&report), "report.txt\nTXT file\n\n");
    }

    #[test]
    fn test_empty_report_is_just_the_separator() {
        let report = FileReport {
            path: PathBuf::from("x"),
            lines: Vec::new(),
        };

        assert_eq!(Renderer::new().render(&report), "\n");
    }
}
