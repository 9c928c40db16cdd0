//! Line-based prompts over any reader/writer pair.
//!
//! End of input while a prompt is waiting counts as cancelling it.

use flipwise::model::{CardDraft, DEFAULT_CATEGORY};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

pub trait Prompter {
    /// Shows `prompt` and reads one line without its line ending.
    /// Returns `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    fn write(&mut self, text: &str) -> io::Result<()>;

    /// Asks for one field. Blank answers fall back to `default` when there is one.
    fn ask_field(&mut self, label: &str, default: Option<&str>) -> io::Result<Option<String>> {
        let prompt = match default {
            Some(d) => format!("{} [{}]: ", label, d),
            None => format!("{}: ", label),
        };
        let Some(answer) = self.read_line(&prompt)? else {
            return Ok(None);
        };
        match default {
            Some(d) if answer.trim().is_empty() => Ok(Some(d.to_string())),
            _ => Ok(Some(answer)),
        }
    }

    /// Collects front, back and category. `initial` pre-fills an edit.
    fn ask_card(&mut self, initial: Option<&CardDraft>) -> io::Result<Option<CardDraft>> {
        let Some(front) = self.ask_field("Front", initial.map(|d| d.front.as_str()))? else {
            return Ok(None);
        };
        let Some(back) = self.ask_field("Back", initial.map(|d| d.back.as_str()))? else {
            return Ok(None);
        };
        let category_default = initial.map_or(DEFAULT_CATEGORY, |d| d.category.as_str());
        let Some(category) = self.ask_field("Category", Some(category_default))? else {
            return Ok(None);
        };
        Ok(Some(CardDraft::new(front, back, category)))
    }

    fn confirm(&mut self, question: &str) -> io::Result<bool> {
        let answer = self.read_line(&format!("{} [y/N]: ", question))?;
        Ok(matches!(
            answer.as_deref().map(|a| a.trim().to_lowercase()).as_deref(),
            Some("y") | Some("yes")
        ))
    }

    fn ask_path(&mut self, label: &str, default: &str) -> io::Result<Option<PathBuf>> {
        Ok(self.ask_field(label, Some(default))?.map(PathBuf::from))
    }
}

pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Prompter for Terminal<R, W> {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let len = line.trim_end_matches(&['\n', '\r'][..]).len();
        line.truncate(len);
        Ok(Some(line))
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()
    }
}
