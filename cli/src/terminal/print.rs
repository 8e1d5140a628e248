use colored::*;
use tracing::{error, info, warn};
use unicode_width::UnicodeWidthStr;

use crate::terminal::{colors, logging::PRINT_TARGET};

pub const TOTAL_WIDTH: usize = 64;

#[macro_export]
macro_rules! nprint {
    () => {
        $crate::terminal::print::print("");
    };
}

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

pub fn success(msg: &str) {
    info!(target: PRINT_TARGET, "{msg}");
}

pub fn warning(msg: &str) {
    warn!(target: PRINT_TARGET, "{msg}");
}

pub fn failure(msg: &str) {
    error!(target: PRINT_TARGET, "{msg}");
}

pub fn banner(no_banner: bool, q_level: u8) {
    if no_banner || q_level > 0 {
        return;
    }

    let title = format!("⟦ NETAUDIT v{} ⟧ ", env!("CARGO_PKG_VERSION"));
    let side = "═"
        .repeat(TOTAL_WIDTH.saturating_sub(title.width()) / 2)
        .bright_black();

    print(&format!("{side}{}{side}", title.bright_green().bold()));
    centerln(&"network configuration audit".color(colors::TEXT_DEFAULT).to_string());
}

/// A dashed rule with `msg` centered in it. Suppressed in quiet mode.
pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let title = format!("⟦ {} ⟧", msg.to_uppercase());
    let dashes = TOTAL_WIDTH.saturating_sub(title.width());
    let left = dashes / 2;

    print(&format!(
        "{}{}{}",
        "─".repeat(left).bright_black(),
        title.bright_green(),
        "─".repeat(dashes - left).bright_black()
    ));
}

pub fn fat_separator() {
    print(&"═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR).to_string());
}

/// `key....: value` lines with the colons lined up.
pub fn key_values(pairs: &[(&str, ColoredString)]) {
    for line in key_value_lines(pairs) {
        print_status(line);
    }
}

fn key_value_lines(pairs: &[(&str, ColoredString)]) -> Vec<String> {
    let width = pairs.iter().map(|(key, _)| key.width()).max().unwrap_or(0);

    pairs
        .iter()
        .map(|(key, value)| {
            let dots = ".".repeat(width + 1 - key.width());
            format!(
                "{}{}{} {}",
                key.color(colors::PRIMARY),
                dots.color(colors::SEPARATOR),
                ":".color(colors::SEPARATOR),
                value
            )
        })
        .collect()
}

pub fn print_status<T: AsRef<str>>(msg: T) {
    print(&format!(
        "{} {}",
        ">".color(colors::SEPARATOR),
        msg.as_ref().color(colors::TEXT_DEFAULT)
    ));
}

pub fn centerln(msg: &str) {
    print(&centered(msg));
}

fn centered(msg: &str) -> String {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    format!("{space}{msg}{space}")
}

pub fn end_of_program() {
    fat_separator();
}
