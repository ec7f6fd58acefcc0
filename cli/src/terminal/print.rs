//! Decorated terminal output.
//!
//! Everything here is emitted under [`PRINT_TARGET`], which the log formatter
//! writes out verbatim without a status symbol.

use colored::*;
use scopr_common::log::PRINT_TARGET;
use tracing::info;
use unicode_width::UnicodeWidthStr;

use crate::terminal::colors;

pub const TOTAL_WIDTH: usize = 64;

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

/// Left and right runs of `fill` that center `label` in a full-width line.
fn ruled(label: &str, fill: &str) -> (String, String) {
    let free = TOTAL_WIDTH.saturating_sub(UnicodeWidthStr::width(label));
    let left = fill.repeat(free / 2);
    let right = fill.repeat(free - free / 2);
    (left, right)
}

pub fn banner(no_banner: bool, q_level: u8) {
    if no_banner || q_level > 0 {
        return;
    }

    let label = format!("⟦ SCOPR v{} ⟧", env!("CARGO_PKG_VERSION"));
    let (left, right) = ruled(&label, "═");
    print(&format!(
        "{}{}{}",
        left.color(colors::SEPARATOR),
        label.bright_green().bold(),
        right.color(colors::SEPARATOR)
    ));
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let label = format!("⟦ {} ⟧", msg.to_uppercase());
    let (left, right) = ruled(&label, "─");
    print(&format!(
        "{}{}{}",
        left.color(colors::SEPARATOR),
        label.bright_green(),
        right.color(colors::SEPARATOR)
    ));
}

/// A titled block of key/value rows framed by double rules.
///
/// Keys are padded with dotted leaders to the longest key of the panel.
pub struct Panel<'a> {
    title: &'a str,
    rows: Vec<(&'a str, ColoredString)>,
}

impl<'a> Panel<'a> {
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            rows: Vec::new(),
        }
    }

    pub fn row(mut self, key: &'a str, value: ColoredString) -> Self {
        self.rows.push((key, value));
        self
    }

    /// The rendered lines, without colour codes when colouring is disabled.
    pub fn lines(&self) -> Vec<String> {
        let rule = "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR).to_string();
        let key_width = self.rows.iter().map(|(key, _)| key.len()).max().unwrap_or(0);

        let pad = TOTAL_WIDTH.saturating_sub(console::measure_text_width(self.title)) / 2;
        let mut lines = vec![
            rule.clone(),
            format!("{}{}", " ".repeat(pad), self.title.bright_green().bold()),
        ];
        for (key, value) in &self.rows {
            let leader = ".".repeat(key_width + 1 - key.len());
            lines.push(format!(
                "{} {}{}{} {}",
                ">".color(colors::SEPARATOR),
                key.color(colors::PRIMARY),
                leader.color(colors::SEPARATOR),
                ":".color(colors::SEPARATOR),
                value
            ));
        }
        lines.push(rule);
        lines
    }

    pub fn print(&self) {
        for line in self.lines() {
            print(&line);
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
