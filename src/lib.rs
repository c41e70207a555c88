//! Snake Arena - a single-player grid snake game
//!
//! This library provides:
//! - Core game logic (game module)
//! - Keyboard mapping (input module)
//! - TUI rendering (render module)
//! - The interactive terminal loop (modes module)

pub mod config;
pub mod game;
pub mod input;
pub mod logging;
pub mod modes;
pub mod render;
