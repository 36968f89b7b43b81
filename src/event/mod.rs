//! Input handling: key events, navigation commands, key bindings.

pub mod binding;
pub mod command;
pub mod input;

pub use binding::KeyBindingRegistry;
pub use command::NavCommand;
pub use input::{key_press, Key, KeyEvent, Modifiers};
