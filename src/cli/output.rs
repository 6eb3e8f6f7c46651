//! Colored output helpers for the operator CLI

use crate::feed::{relative_label, GroundingSource, SocialPost};
use chrono::{DateTime, Utc};
use owo_colors::OwoColorize;

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
    pub fn new() -> Self {
        Self { colored: true }
    }

    pub fn no_color() -> Self {
        Self { colored: false }
    }

    pub fn banner(&self) {
        if self.colored {
            println!(
                "\n   {} {}\n   {}\n",
                "Rejuvana Living".bright_green().bold(),
                format!("v{}", env!("CARGO_PKG_VERSION")).dimmed(),
                "Science-backed longevity, delivered daily.".dimmed().italic(),
            );
        } else {
            println!(
                "\n   Rejuvana Living v{}\n   Science-backed longevity, delivered daily.\n",
                env!("CARGO_PKG_VERSION")
            );
        }
    }

    pub fn success(&self, message: &str) {
        if self.colored {
            println!("  {} {}", "✓".green().bold(), message.green());
        } else {
            println!("  [OK] {}", message);
        }
    }

    pub fn info(&self, message: &str) {
        if self.colored {
            println!("  {} {}", "•".blue(), message);
        } else {
            println!("  [INFO] {}", message);
        }
    }

    pub fn warning(&self, message: &str) {
        if self.colored {
            println!("  {} {}", "⚠".yellow().bold(), message.yellow());
        } else {
            println!("  [WARN] {}", message);
        }
    }

    /// Errors go to stderr
    pub fn error(&self, message: &str) {
        if self.colored {
            eprintln!("  {} {}", "✗".red().bold(), message.red());
        } else {
            eprintln!("  [ERROR] {}", message);
        }
    }

    /// Print a step message (for multi-step operations)
    pub fn step(&self, step_num: u32, total: u32, message: &str) {
        if self.colored {
            println!(
                "  {} {}",
                format!("[{}/{}]", step_num, total).dimmed(),
                message.bright_white()
            );
        } else {
            println!("  [{}/{}] {}", step_num, total, message);
        }
    }

    pub fn header(&self, title: &str) {
        if self.colored {
            println!("\n  {}", title.bright_white().bold().underline());
        } else {
            println!("\n  === {} ===", title);
        }
    }

    pub fn kv(&self, key: &str, value: &str) {
        if self.colored {
            println!("    {}: {}", key.dimmed(), value.bright_white());
        } else {
            println!("    {}: {}", key, value);
        }
    }

    pub fn list_item(&self, item: &str) {
        if self.colored {
            println!("    {} {}", "•".blue(), item);
        } else {
            println!("    - {}", item);
        }
    }

    pub fn hint(&self, message: &str) {
        if self.colored {
            println!("\n  {} {}", "›".dimmed(), message.dimmed().italic());
        } else {
            println!("\n  [TIP] {}", message);
        }
    }

    /// Print a command suggestion
    pub fn command(&self, cmd: &str) {
        if self.colored {
            println!("     {}", format!("$ {}", cmd).bright_cyan());
        } else {
            println!("     $ {}", cmd);
        }
    }

    /// One directory card: handle, age, engagement and caption
    pub fn post(&self, post: &SocialPost, now: DateTime<Utc>) {
        let age = relative_label(post.timestamp, now);
        let engagement = format!(
            "{} likes · {} comments",
            post.like_count_display, post.comment_count
        );
        if self.colored {
            println!(
                "\n    {} {} {}",
                format!("@{}", post.author_handle).bright_green().bold(),
                "·".dimmed(),
                age.dimmed()
            );
            println!("    {}", post.caption);
            println!("    {}  {}", engagement.cyan(), post.permalink.dimmed());
        } else {
            println!("\n    @{} · {}", post.author_handle, age);
            println!("    {}", post.caption);
            println!("    {}  {}", engagement, post.permalink);
        }
    }

    pub fn source(&self, source: &GroundingSource) {
        if self.colored {
            println!("    {} {} {}", "↗".blue(), source.label(), source.uri.dimmed());
        } else {
            println!("    - {} ({})", source.label(), source.uri);
        }
    }

    pub fn table_header(&self, columns: &[&str]) {
        let header: String = columns
            .iter()
            .map(|c| format!("{:<15}", c))
            .collect::<Vec<_>>()
            .join(" ");
        if self.colored {
            println!("    {}", header.bright_white().bold());
            println!("    {}", "─".repeat(columns.len() * 16).dimmed());
        } else {
            println!("    {}", header);
            println!("    {}", "-".repeat(columns.len() * 16));
        }
    }

    pub fn table_row(&self, values: &[&str]) {
        let row: String = values
            .iter()
            .map(|v| format!("{:<15}", v))
            .collect::<Vec<_>>()
            .join(" ");
        println!("    {}", row);
    }

    pub fn newline(&self) {
        println!();
    }
}
