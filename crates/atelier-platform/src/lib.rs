//! Platform integrations for the lesson frame.

pub mod clipboard;

pub use clipboard::{copy_text_to_clipboard, Clipboard};
