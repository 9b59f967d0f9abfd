// Terminal UI utilities
// User-facing text goes to a caller-supplied writer so it can be captured in tests.

use colored::Colorize;
use std::io::{self, Write};

pub fn write_title(out: &mut impl Write, title: &str) -> io::Result<()> {
    writeln!(out, "{}", title.bright_blue().bold())?;
    writeln!(out)
}

pub fn write_step(out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out, "{}", message.bright_cyan())
}

pub fn write_success(out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out, "{}", message.bright_green().bold())
}

pub fn write_lines(out: &mut impl Write, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

pub fn print_error(message: &str) {
    eprintln!("{}", format!("❌ {}", message).bright_red().bold());
}
