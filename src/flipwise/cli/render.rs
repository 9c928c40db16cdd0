//! # Rendering Module
//!
//! Turns read models and command results into terminal text. Layout (wrapping,
//! padding) is measured in display columns so wide characters keep the card
//! frame aligned.

use colored::*;
use flipwise::api::{CmdMessage, CmdResult, MessageLevel};
use flipwise::config::FlipwiseConfig;
use flipwise::controller::ReadModel;
use flipwise::model::Face;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Text columns inside the card frame.
pub const CARD_WIDTH: usize = 40;
const CARD_PADDING: usize = 2;

/// Renders everything a command produced: notices, listings, then the card.
pub fn render_result(result: &CmdResult) -> String {
    let mut output = render_messages(&result.messages);
    if !result.categories.is_empty() {
        let active = result.model.as_ref().map(|m| m.filter.as_str());
        output.push_str(&render_categories(&result.categories, active));
    }
    if let Some(config) = &result.config {
        output.push_str(&render_config(config));
    }
    if let Some(model) = &result.model {
        output.push_str(&render_card(model));
    }
    output
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut output = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        output.push_str(&format!("{}\n", line));
    }
    output
}

pub fn render_card(model: &ReadModel) -> String {
    let inner = CARD_WIDTH + 2 * CARD_PADDING;
    let margin = " ".repeat(CARD_PADDING);
    let mut output = String::new();

    output.push_str(&format!("╭{}╮\n", "─".repeat(inner)));
    output.push_str(&format!("│{}│\n", " ".repeat(inner)));
    for line in wrap(&model.displayed_text, CARD_WIDTH) {
        let padding = " ".repeat(CARD_WIDTH.saturating_sub(line.width()));
        let text = match (model.has_cards, model.face) {
            (false, _) => line.dimmed(),
            (true, Face::Front) => line.bold(),
            (true, Face::Back) => line.cyan(),
        };
        output.push_str(&format!("│{}{}{}{}│\n", margin, text, padding, margin));
    }
    output.push_str(&format!("│{}│\n", " ".repeat(inner)));
    output.push_str(&format!("╰{}╯\n", "─".repeat(inner)));
    output.push_str(&format!("{}\n", render_status(model).dimmed()));
    output
}

/// One-line summary under the card: category, position, face, filter, shuffle.
pub fn render_status(model: &ReadModel) -> String {
    let mut parts = Vec::new();
    if let Some(category) = &model.displayed_category {
        parts.push(category.clone());
    }
    match model.position {
        Some((index, len)) => {
            parts.push(format!("{}/{}", index, len));
            parts.push(model.face.to_string());
        }
        None => parts.push("0 cards".to_string()),
    }
    parts.push(format!("showing {}", model.filter));
    if model.shuffled {
        parts.push("shuffled".to_string());
    }
    format!("  {}", parts.join(" · "))
}

pub fn render_categories(categories: &[(String, usize)], active: Option<&str>) -> String {
    let mut output = String::new();
    for (name, count) in categories {
        let marker = if Some(name.as_str()) == active { "*" } else { " " };
        output.push_str(&format!("{} {} ({})\n", marker, name, count));
    }
    output
}

pub fn render_config(config: &FlipwiseConfig) -> String {
    let mut output = String::new();
    for key in FlipwiseConfig::KEYS {
        let value = config.get(key).unwrap_or_default();
        output.push_str(&format!("{} = {}\n", key, value));
    }
    output
}

/// Word-wraps `text` to `width` display columns.
///
/// Explicit line breaks are kept; words wider than a line are split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut line = String::new();
        let mut line_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = word.width();
            if line_width > 0 && line_width + 1 + word_width > width {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
            }
            if word_width > width {
                for c in word.chars() {
                    let char_width = c.width().unwrap_or(0);
                    if line_width + char_width > width {
                        lines.push(std::mem::take(&mut line));
                        line_width = 0;
                    }
                    line.push(c);
                    line_width += char_width;
                }
                continue;
            }
            if line_width > 0 {
                line.push(' ');
                line_width += 1;
            }
            line.push_str(word);
            line_width += word_width;
        }
        lines.push(line);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
