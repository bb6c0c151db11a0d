//! Colored output helpers for CLI
//!
//! Provides consistent, colored terminal output for the AgroVision CLI.

use agrovision_core::{ChatMessage, HistoryEntry, Role};
use owo_colors::OwoColorize;
use std::io::{self, Write};

/// Output style configuration
pub struct Output {
    /// Whether to use colored output
    pub colored: bool,
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

impl Output {
    /// Create a new output helper with colors enabled
    pub fn new() -> Self {
        Self { colored: true }
    }

    /// Create a new output helper with colors disabled
    pub fn no_color() -> Self {
        Self { colored: false }
    }

    /// Print the AgroVision banner
    pub fn banner(&self) {
        if self.colored {
            println!(
                "\n   {} {}",
                "AgroVision AI 🌱".bright_green().bold(),
                format!("v{}", env!("CARGO_PKG_VERSION")).dimmed()
            );
            println!(
                "   {}\n",
                "Empowering farmers with AI for a sustainable future.".dimmed()
            );
        } else {
            println!("\n   AgroVision AI v{}", env!("CARGO_PKG_VERSION"));
            println!("   Empowering farmers with AI for a sustainable future.\n");
        }
    }

    /// Print a success message with a checkmark
    pub fn success(&self, message: &str) {
        if self.colored {
            println!("  {} {}", "✓".green().bold(), message.green());
        } else {
            println!("  [OK] {}", message);
        }
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        if self.colored {
            println!("  {} {}", "•".blue(), message);
        } else {
            println!("  [INFO] {}", message);
        }
    }

    /// Print a warning message
    pub fn warning(&self, message: &str) {
        if self.colored {
            println!("  {} {}", "⚠".yellow().bold(), message.yellow());
        } else {
            println!("  [WARN] {}", message);
        }
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        if self.colored {
            eprintln!("  {} {}", "✗".red().bold(), message.red());
        } else {
            eprintln!("  [ERROR] {}", message);
        }
    }

    /// Print a header for a section
    pub fn header(&self, title: &str) {
        if self.colored {
            println!("\n  {}", title.bright_white().bold().underline());
        } else {
            println!("\n  === {} ===", title);
        }
    }

    /// Print a key-value pair
    pub fn kv(&self, key: &str, value: &str) {
        if self.colored {
            println!("    {}: {}", key.dimmed(), value.bright_white());
        } else {
            println!("    {}: {}", key, value);
        }
    }

    /// Print a numbered list item
    pub fn ranked(&self, rank: usize, item: &str) {
        if self.colored {
            println!("    {} {}", format!("{}.", rank).bright_green().bold(), item);
        } else {
            println!("    {}. {}", rank, item);
        }
    }

    /// Print a hint/tip message
    pub fn hint(&self, message: &str) {
        if self.colored {
            println!("\n  {} {}", "💡".dimmed(), message.dimmed().italic());
        } else {
            println!("\n  [TIP] {}", message);
        }
    }

    /// Print a chat message
    pub fn message(&self, message: &ChatMessage) {
        if !self.colored {
            println!("{}", plain_message(message));
            return;
        }
        match message.role {
            Role::System => println!("  {} {}", "🤖".dimmed(), message.content.dimmed()),
            Role::User => println!("  {} {}", "👤".bright_white(), message.content.bright_white()),
            Role::Assistant => println!("  {} {}", "🤖".green(), message.content),
        }
    }

    /// Print the chat history list, numbered from 1
    pub fn history(&self, entries: &[HistoryEntry]) {
        if entries.is_empty() {
            self.info("No recent history");
            return;
        }
        for (i, entry) in entries.iter().enumerate() {
            let date = entry.date.format("%Y-%m-%d").to_string();
            if self.colored {
                println!(
                    "    {} {} {}",
                    format!("{}.", i + 1).bright_green().bold(),
                    entry.title,
                    format!("({})", date).dimmed()
                );
            } else {
                println!("    {}. {} ({})", i + 1, entry.title, date);
            }
        }
    }

    /// Print the interactive prompt without a newline
    pub fn prompt(&self) {
        if self.colored {
            print!("{} ", "›".bright_green().bold());
        } else {
            print!("> ");
        }
        io::stdout().flush().ok();
    }

    /// Print newline
    pub fn newline(&self) {
        println!();
    }
}

/// Uncolored single-line rendering of a chat message.
pub fn plain_message(message: &ChatMessage) -> String {
    let who = match message.role {
        Role::System => "system",
        Role::User => "you",
        Role::Assistant => "assistant",
    };
    format!("  [{}] {}", who, message.content)
}
