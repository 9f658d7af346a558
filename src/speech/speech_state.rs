use std::process::Child;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use thiserror::Error;

use super::TtsCommand;

const POLL_INTERVAL: Duration = Duration::from_millis(20);

#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("Text-to-speech unavailable: disabled in config")]
    Disabled,

    #[error("Text-to-speech unavailable: no TTS program found")]
    Unavailable,
}

/// Playback state shared with the UI
pub struct SpeechState {
    enabled: bool,
    command: Option<TtsCommand>,
    /// Chinese name currently being spoken
    pub speaking: Option<String>,
    /// Incremented for every utterance; a playback thread stops when it is stale
    generation: Arc<AtomicU64>,
    current: Arc<Mutex<Option<Child>>>,
    done_tx: Sender<u64>,
    done_rx: Receiver<u64>,
}

impl SpeechState {
    pub fn new(enabled: bool, command: Option<TtsCommand>) -> Self {
        let (done_tx, done_rx) = mpsc::channel();
        Self {
            enabled,
            command,
            speaking: None,
            generation: Arc::new(AtomicU64::new(0)),
            current: Arc::new(Mutex::new(None)),
            done_tx,
            done_rx,
        }
    }

    /// Build from config, detecting a TTS program when none is configured
    pub fn from_config(config: &crate::config::SpeechConfig) -> Self {
        let command = if config.enabled {
            TtsCommand::resolve(config.command.as_deref())
        } else {
            None
        };
        if config.enabled && command.is_none() {
            log::debug!("No text-to-speech program found");
        }
        Self::new(config.enabled, command)
    }

    pub fn is_available(&self) -> bool {
        self.enabled && self.command.is_some()
    }

    pub fn is_speaking(&self, chinese_name: &str) -> bool {
        self.speaking.as_deref() == Some(chinese_name)
    }

    /// Speak the name, then the pinyin, stopping any current playback
    pub fn speak(&mut self, chinese_name: &str, pinyin: &str) -> Result<(), SpeechError> {
        if !self.enabled {
            return Err(SpeechError::Disabled);
        }
        let command = self.command.clone().ok_or(SpeechError::Unavailable)?;

        self.stop();
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.speaking = Some(chinese_name.to_string());

        let texts = [chinese_name.to_string(), pinyin.to_string()];
        let current = Arc::clone(&self.current);
        let latest = Arc::clone(&self.generation);
        let done_tx = self.done_tx.clone();

        thread::spawn(move || {
            for text in &texts {
                if latest.load(Ordering::SeqCst) != generation {
                    break;
                }
                let is_current = || latest.load(Ordering::SeqCst) == generation;
                if let Err(e) = play(&command, text, &current, is_current) {
                    log::debug!("TTS failed for {:?}: {}", text, e);
                    break;
                }
            }
            let _ = done_tx.send(generation);
        });

        Ok(())
    }

    /// Kill any running utterance and clear the speaking indicator
    pub fn stop(&mut self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut current) = self.current.lock()
            && let Some(mut child) = current.take()
        {
            let _ = child.kill();
            let _ = child.wait();
        }
        self.speaking = None;
    }

    /// Clear the indicator once the latest utterance finished
    ///
    /// Returns true if the state changed.
    pub fn poll(&mut self) -> bool {
        let latest = self.generation.load(Ordering::SeqCst);
        let mut changed = false;
        while let Ok(finished) = self.done_rx.try_recv() {
            if finished == latest && self.speaking.take().is_some() {
                changed = true;
            }
        }
        changed
    }
}

impl Drop for SpeechState {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Run one utterance to completion, keeping the child killable from `stop`
fn play<F>(
    command: &TtsCommand,
    text: &str,
    current: &Mutex<Option<Child>>,
    is_current: F,
) -> std::io::Result<()>
where
    F: Fn() -> bool,
{
    let mut child = command.command_for(text).spawn()?;
    {
        let Ok(mut slot) = current.lock() else {
            let _ = child.kill();
            return Ok(());
        };
        // stop() may have run between spawn and here
        if !is_current() {
            let _ = child.kill();
            let _ = child.wait();
            return Ok(());
        }
        *slot = Some(child);
    }

    loop {
        thread::sleep(POLL_INTERVAL);
        if !is_current() {
            return Ok(());
        }
        let Ok(mut slot) = current.lock() else {
            return Ok(());
        };
        let Some(child) = slot.as_mut() else {
            // Killed by stop()
            return Ok(());
        };
        if child.try_wait()?.is_some() {
            *slot = None;
            return Ok(());
        }
    }
}

#[cfg(test)]
#[path = "speech_state_tests.rs"]
mod speech_state_tests;
