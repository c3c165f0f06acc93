// Wed Oct 14 2026 - Alex

use colored::Colorize;

pub struct ErrorDisplay {
    show_cause_chain: bool,
}

impl ErrorDisplay {
    pub fn new() -> Self {
        Self {
            show_cause_chain: true,
        }
    }

    pub fn without_causes(mut self) -> Self {
        self.show_cause_chain = false;
        self
    }

    pub fn format(&self, error: &anyhow::Error) -> String {
        let mut output = format!("{} {}", "Error:".red().bold(), error);

        if self.show_cause_chain {
            for cause in error.chain().skip(1) {
                output.push_str(&format!("\n  {} Caused by: {}", "->".yellow(), cause));
            }
        }

        output
    }

    pub fn print(&self, error: &anyhow::Error) {
        eprintln!("{}", self.format(error));
    }
}

impl Default for ErrorDisplay {
    fn default() -> Self {
        Self::new()
    }
}
