#[cfg(test)]
pub mod test_helpers {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
    use unicode_width::UnicodeWidthStr;

    use crate::ai::suggestion::{Explanation, NameSuggestion};
    use crate::app::App;
    use crate::config::{ClipboardBackend, Config};

    pub fn suggestion(chinese_name: &str, pinyin: &str) -> NameSuggestion {
        NameSuggestion {
            chinese_name: chinese_name.to_string(),
            pinyin: pinyin.to_string(),
            explanation: Explanation {
                individual: chinese_name
                    .chars()
                    .map(|c| format!("{} - meaning of {}", c, c))
                    .collect(),
                overall: format!("Overall meaning of {}", chinese_name),
                cultural: format!("Cultural note for {}", chinese_name),
                personality: "Elegant and refined".to_string(),
            },
        }
    }

    pub fn sample_suggestions() -> Vec<NameSuggestion> {
        vec![
            suggestion("艾琳", "Ài Lín"),
            suggestion("慕影", "Mù Yǐng"),
            suggestion("雅文", "Yǎ Wén"),
        ]
    }

    /// App without a worker thread or TTS
    pub fn test_app() -> App {
        let mut config = Config::default();
        config.speech.enabled = false;
        let mut app = App::new(&config);
        app.clipboard_backend = ClipboardBackend::Osc52;
        app
    }

    /// Model output wrapping the sample suggestions in prose and a code fence
    pub fn sample_response() -> String {
        let json = serde_json::json!({ "suggestions": sample_suggestions() });
        format!(
            "Here are your names:\n```json\n{}\n```\nEnjoy!",
            serde_json::to_string_pretty(&json).unwrap()
        )
    }

    /// App showing the three sample suggestions
    pub fn app_with_suggestions() -> App {
        let mut app = test_app();
        app.ai.suggestions = sample_suggestions();
        app.ai.has_result = true;
        app
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    /// Render the app into a test backend and flatten the buffer to text
    pub fn render_to_string(app: &mut App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    /// Flatten a buffer to text, skipping the cells covered by wide characters
    pub fn buffer_to_string(buffer: &Buffer) -> String {
        let mut output = String::new();
        for y in 0..buffer.area.height {
            let mut skip = 0;
            for x in 0..buffer.area.width {
                if skip > 0 {
                    skip -= 1;
                    continue;
                }
                let symbol = buffer[(x, y)].symbol();
                output.push_str(symbol);
                skip = symbol.width().saturating_sub(1);
            }
            output.push('\n');
        }
        output
    }
}
