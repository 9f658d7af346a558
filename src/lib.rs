pub mod ai;
pub mod app;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod favorites;
pub mod form;
pub mod headless;
pub mod help;
pub mod logging;
pub mod notification;
pub mod scroll;
pub mod speech;
pub mod widgets;

mod test_utils;
