//
//  twitter-rest
//  output/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Output Module
//!
//! Formatting for everything `tw` prints:
//!
//! - **Table format**: Human-readable rows and detail views for a terminal
//! - **JSON format**: Pretty-printed JSON for scripting
//! - **Markdown format**: Pipe tables for pasting into documents
//!
//! ## Core Components
//!
//! - [`OutputFormat`]: The available formats
//! - [`OutputWriter`]: Writes values and status messages in one format
//! - [`TableOutput`]: Implemented by every display type the CLI prints
//!
//! ## Example
//!
//! ```rust,ignore
//! use twitter_rest::output::{OutputFormat, OutputWriter};
//!
//! let writer = OutputWriter::new(OutputFormat::Json);
//! writer.write_list(&statuses)?;
//! writer.write_success("Posted");
//! ```

mod json;
mod table;

pub use json::*;
pub use table::*;

use serde::Serialize;

/// Output formats.
///
/// [`OutputFormat::Table`] is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Rows and detail views with optional color.
    #[default]
    Table,
    /// Pretty-printed JSON.
    Json,
    /// Markdown tables.
    Markdown,
}

impl OutputFormat {
    /// Picks the format from the global `--json` / `--markdown` flags.
    pub fn from_flags(json: bool, markdown: bool) -> Self {
        if json {
            Self::Json
        } else if markdown {
            Self::Markdown
        } else {
            Self::Table
        }
    }
}

/// Writes values in one [`OutputFormat`].
///
/// Color follows `console::colors_enabled()`, which honours `NO_COLOR` and
/// `CLICOLOR_FORCE`.
pub struct OutputWriter {
    format: OutputFormat,
    color: bool,
}

impl OutputWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: console::colors_enabled(),
        }
    }

    pub fn json() -> Self {
        Self::new(OutputFormat::Json)
    }

    pub fn table() -> Self {
        Self::new(OutputFormat::Table)
    }

    pub fn color_enabled(&self) -> bool {
        self.color
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Writes a single value.
    pub fn write<T: Serialize + TableOutput>(&self, value: &T) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => write_json(value)?,
            OutputFormat::Table => value.print_table(self.color),
            OutputFormat::Markdown => value.print_markdown(),
        }
        Ok(())
    }

    /// Writes a list of values.
    ///
    /// JSON output is a single array. Markdown output gets the type's header
    /// row once, before the first item.
    pub fn write_list<T: Serialize + TableOutput>(&self, values: &[T]) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => write_json(&values)?,
            OutputFormat::Table => {
                for value in values {
                    value.print_table(self.color);
                }
            }
            OutputFormat::Markdown => {
                if let Some(header) = T::markdown_header() {
                    println!("{}", header);
                    println!("{}", markdown_rule(&header));
                }
                for value in values {
                    value.print_markdown();
                }
            }
        }
        Ok(())
    }

    pub fn write_error(&self, msg: &str) {
        use console::style;
        if self.color {
            eprintln!("{} {}", style("error:").red().bold(), msg);
        } else {
            eprintln!("error: {}", msg);
        }
    }

    pub fn write_warning(&self, msg: &str) {
        use console::style;
        if self.color {
            eprintln!("{} {}", style("warning:").yellow().bold(), msg);
        } else {
            eprintln!("warning: {}", msg);
        }
    }

    /// Prints an informational line, suppressed in JSON mode so that stdout
    /// stays parseable.
    pub fn write_info(&self, msg: &str) {
        if !self.is_json() {
            println!("{}", msg);
        }
    }

    pub fn write_success(&self, msg: &str) {
        use console::style;
        if self.is_json() {
            return;
        }
        if self.color {
            println!("{} {}", style("✓").green().bold(), msg);
        } else {
            println!("✓ {}", msg);
        }
    }
}

/// Rendering for human-readable formats.
pub trait TableOutput {
    /// Prints this value for a terminal.
    fn print_table(&self, color: bool);

    /// Prints this value as Markdown; list items print one table row.
    fn print_markdown(&self);

    /// Header row printed once before a Markdown list, e.g. `| ID | Text |`.
    fn markdown_header() -> Option<String>
    where
        Self: Sized,
    {
        None
    }
}

/// Separator row matching a Markdown header's column count.
pub fn markdown_rule(header: &str) -> String {
    let columns = header.matches('|').count().saturating_sub(1).max(1);
    format!("|{}", "---|".repeat(columns))
}

/// Escapes pipes and line breaks so text fits in one Markdown cell.
pub fn markdown_cell(text: &str) -> String {
    crate::util::single_line(text).replace('|', "\\|")
}

/// Prints a bold section header underlined with dashes.
pub fn print_header(text: &str) {
    use console::style;
    println!("{}", style(text).bold());
    println!("{}", "-".repeat(text.chars().count()));
}

/// Prints a `key: value` line with a dimmed key when color is on.
pub fn print_field(key: &str, value: &str, color: bool) {
    use console::style;
    if color {
        println!("{}: {}", style(key).dim(), value);
    } else {
        println!("{}: {}", key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_flags() {
        assert_eq!(OutputFormat::from_flags(false, false), OutputFormat::Table);
        assert_eq!(OutputFormat::from_flags(true, true), OutputFormat::Json);
        assert_eq!(OutputFormat::from_flags(false, true), OutputFormat::Markdown);
        assert_eq!(OutputFormat::default(), OutputFormat::Table);
    }

    #[test]
    fn test_markdown_rule() {
        assert_eq!(markdown_rule("| ID | User | Text |"), "|---|---|---|");
        assert_eq!(markdown_rule("plain"), "|---|");
    }

    #[test]
    fn test_markdown_cell() {
        assert_eq!(markdown_cell("a|b\nc"), "a\\|b c");
    }
}
