//! Debug-build logging
//!
//! The terminal belongs to the TUI, so log records go to
//! `~/.cache/zhname/zhname.log`. Release builds install no logger and the
//! `log` macros compile to no-ops at runtime.

use std::path::PathBuf;

const LOG_FILE: &str = "zhname.log";

pub fn log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|p| p.join("zhname").join(LOG_FILE))
}

#[cfg(debug_assertions)]
pub fn init() {
    use std::fs::{self, OpenOptions};
    use std::io::Write;

    let Some(path) = log_path() else {
        return;
    };
    if let Some(parent) = path.parent()
        && fs::create_dir_all(parent).is_err()
    {
        return;
    }
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };

    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().filter_or("ZHNAME_LOG", "zhname=debug"),
    )
    .target(env_logger::Target::Pipe(Box::new(file)))
    .format(|buf, record| {
        writeln!(
            buf,
            "{} {:<5} {}: {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        )
    })
    .try_init();
}

#[cfg(not(debug_assertions))]
pub fn init() {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_path_is_under_cache_dir() {
        if let Some(path) = log_path() {
            assert!(path.ends_with("zhname/zhname.log"));
        }
    }
}
