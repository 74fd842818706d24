use crate::scenario::Severity;
use console::style;
use std::fmt::Display;

/// White bold — section headers, titles
pub fn header<D: Display>(text: D) -> String {
    style(text).white().bold().to_string()
}

/// Dim — subtitles, secondary text, decorative lines
pub fn dim<D: Display>(text: D) -> String {
    style(text).dim().to_string()
}

/// Cyan bold — the assistant's voice
pub fn assistant<D: Display>(text: D) -> String {
    style(text).cyan().bold().to_string()
}

/// Green — resolved results, confirmations
pub fn done<D: Display>(text: D) -> String {
    style(text).green().to_string()
}

/// Yellow — work still in progress
pub fn pending<D: Display>(text: D) -> String {
    style(text).yellow().to_string()
}

/// Severity glyph plus colored title for an insight card.
pub fn severity<D: Display>(severity: Severity, title: D) -> String {
    match severity {
        Severity::Critical => style(format!("● {title}")).red().bold().to_string(),
        Severity::Warning => style(format!("▲ {title}")).yellow().to_string(),
        Severity::Info => style(format!("◆ {title}")).cyan().to_string(),
        Severity::Positive => style(format!("✔ {title}")).green().to_string(),
    }
}
