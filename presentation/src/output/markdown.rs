//! Minimal markdown rendering for the terminal
//!
//! Covers what the stylist writes: headings, bullet and numbered lists,
//! `**bold**` spans and horizontal rules. Everything else passes through.

use colored::Colorize;

/// Render markdown text with terminal styling
pub fn render(markdown: &str) -> String {
    markdown
        .lines()
        .map(render_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_line(line: &str) -> String {
    let trimmed = line.trim_start();
    let indent = &line[..line.len() - trimmed.len()];

    if let Some((level, heading)) = heading(trimmed) {
        let text = strip_bold_markers(heading);
        return if level <= 2 {
            text.cyan().bold().underline().to_string()
        } else {
            text.cyan().bold().to_string()
        };
    }

    if is_rule(trimmed) {
        return "─".repeat(40).dimmed().to_string();
    }

    if let Some(item) = trimmed
        .strip_prefix("- ")
        .or_else(|| trimmed.strip_prefix("* "))
    {
        return format!("{}  {} {}", indent, "•".cyan(), render_inline(item));
    }

    if let Some((number, item)) = numbered(trimmed) {
        return format!("{}  {}. {}", indent, number.cyan(), render_inline(item));
    }

    render_inline(line)
}

/// `#`..`######` followed by a space
fn heading(line: &str) -> Option<(usize, &str)> {
    let level = line.chars().take_while(|c| *c == '#').count();
    if !(1..=6).contains(&level) {
        return None;
    }
    line[level..].strip_prefix(' ').map(|text| (level, text.trim()))
}

fn is_rule(line: &str) -> bool {
    let line = line.trim();
    line.len() >= 3 && (line.chars().all(|c| c == '-') || line.chars().all(|c| c == '*'))
}

/// `12. item`
fn numbered(line: &str) -> Option<(&str, &str)> {
    let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    line[digits..]
        .strip_prefix(". ")
        .map(|rest| (&line[..digits], rest))
}

/// Bold every `**span**`; unbalanced markers are left alone
fn render_inline(text: &str) -> String {
    let parts: Vec<&str> = text.split("**").collect();
    if parts.len() < 3 || parts.len() % 2 == 0 {
        return text.to_string();
    }

    parts
        .iter()
        .enumerate()
        .map(|(i, part)| {
            if i % 2 == 1 {
                part.bold().to_string()
            } else {
                part.to_string()
            }
        })
        .collect()
}

fn strip_bold_markers(text: &str) -> String {
    text.replace("**", "")
}
