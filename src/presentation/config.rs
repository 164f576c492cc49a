//! UI configuration
//!
//! Keybindings and theme tokens as read from the config file.

pub mod keybindings;
pub mod styles;

// Re-export for convenience
pub use keybindings::KeyBindings;
pub use styles::Styles;
