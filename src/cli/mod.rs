//! Interactive command-line interface
//!
//! The numbered main menu, its two-state loop and the console it talks
//! through, plus the one-shot export command.

pub mod export;
pub mod menu;
pub mod prompt;
pub mod shell;

pub use export::{handle_export_command, ExportFormat};
pub use menu::{format_menu, MenuChoice, MenuState};
pub use prompt::Console;
pub use shell::Shell;
