// Configuration type definitions

use std::path::PathBuf;

use serde::Deserialize;

/// Clipboard backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardBackend {
    #[default]
    Auto,
    System,
    Osc52,
}

/// Clipboard configuration section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClipboardConfig {
    #[serde(default)]
    pub backend: ClipboardBackend,
}

/// Chat-completion provider preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AiProviderType {
    #[default]
    DeepSeek,
    OpenAi,
}

impl AiProviderType {
    /// Name shown in the status bar and error prefixes
    pub fn display_name(&self) -> &'static str {
        match self {
            AiProviderType::DeepSeek => "DeepSeek",
            AiProviderType::OpenAi => "OpenAI",
        }
    }

    pub fn default_url(&self) -> &'static str {
        match self {
            AiProviderType::DeepSeek => "https://api.deepseek.com/v1/chat/completions",
            AiProviderType::OpenAi => "https://api.openai.com/v1/chat/completions",
        }
    }

    pub fn default_model(&self) -> &'static str {
        match self {
            AiProviderType::DeepSeek => "deepseek-chat",
            AiProviderType::OpenAi => "gpt-4o-mini",
        }
    }

    /// Environment variable consulted when the config has no API key
    pub fn api_key_env(&self) -> &'static str {
        match self {
            AiProviderType::DeepSeek => "DEEPSEEK_API_KEY",
            AiProviderType::OpenAi => "OPENAI_API_KEY",
        }
    }
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_tokens() -> u32 {
    1000
}

fn default_timeout_secs() -> u64 {
    60
}

/// `[ai]` section
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    #[serde(default)]
    pub provider: AiProviderType,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default)]
    pub stream: bool,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            provider: AiProviderType::default(),
            api_key: None,
            model: None,
            base_url: None,
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            stream: false,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl AiConfig {
    /// Configured model, or the provider's default when unset or blank
    pub fn model_name(&self) -> String {
        self.model
            .as_ref()
            .filter(|m| !m.trim().is_empty())
            .cloned()
            .unwrap_or_else(|| self.provider.default_model().to_string())
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.as_ref().is_some_and(|k| !k.trim().is_empty())
    }
}

fn default_true() -> bool {
    true
}

/// `[speech]` section
#[derive(Debug, Clone, Deserialize)]
pub struct SpeechConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Command template, `{text}` is replaced with the text to speak
    #[serde(default)]
    pub command: Option<String>,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            command: None,
        }
    }
}

fn default_export_directory() -> PathBuf {
    PathBuf::from(".")
}

fn default_export_file_name() -> String {
    "chinese-names.txt".to_string()
}

/// `[export]` section
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_export_directory")]
    pub directory: PathBuf,
    #[serde(default = "default_export_file_name")]
    pub file_name: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: default_export_directory(),
            file_name: default_export_file_name(),
        }
    }
}

impl ExportConfig {
    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ai: AiConfig,
    #[serde(default)]
    pub speech: SpeechConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub clipboard: ClipboardConfig,
}
