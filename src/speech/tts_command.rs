use std::process::{Command, Stdio};

/// Placeholder replaced with the text to speak
const TEXT_PLACEHOLDER: &str = "{text}";

/// Programs tried in order when no command is configured
const CANDIDATES: &[&str] = &[
    "espeak-ng -v cmn {text}",
    "espeak -v zh {text}",
    "say -v Ting-Ting {text}",
    "spd-say -w -l zh {text}",
];

/// A text-to-speech program with its argument template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TtsCommand {
    program: String,
    args: Vec<String>,
}

impl TtsCommand {
    /// Parse a whitespace-separated template such as `espeak-ng -v cmn {text}`
    ///
    /// The text is appended as the last argument when the template has no
    /// `{text}` placeholder.
    pub fn parse(template: &str) -> Option<Self> {
        let mut parts = template.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        let mut args: Vec<String> = parts.collect();

        if !args.iter().any(|a| a.contains(TEXT_PLACEHOLDER)) {
            args.push(TEXT_PLACEHOLDER.to_string());
        }

        Some(Self { program, args })
    }

    /// First candidate program found in PATH
    pub fn detect() -> Option<Self> {
        CANDIDATES
            .iter()
            .filter_map(|template| Self::parse(template))
            .find(|cmd| which::which(&cmd.program).is_ok())
    }

    /// Configured template, or the first detected program
    pub fn resolve(template: Option<&str>) -> Option<Self> {
        match template.map(str::trim).filter(|t| !t.is_empty()) {
            Some(t) => Self::parse(t),
            None => Self::detect(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments with the placeholder substituted
    pub fn args_for(&self, text: &str) -> Vec<String> {
        self.args
            .iter()
            .map(|a| a.replace(TEXT_PLACEHOLDER, text))
            .collect()
    }

    /// Build a silent process invocation for `text`
    pub fn command_for(&self, text: &str) -> Command {
        let mut command = Command::new(&self.program);
        command
            .args(self.args_for(text))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        command
    }
}

#[cfg(test)]
#[path = "tts_command_tests.rs"]
mod tts_command_tests;
