//! Pronunciation playback
//!
//! Speaks a name and then its pinyin through an external text-to-speech
//! program with a Mandarin voice.

mod speech_state;
mod tts_command;

pub use speech_state::{SpeechError, SpeechState};
pub use tts_command::TtsCommand;
