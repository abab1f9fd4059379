//! # rollcall-bot
//!
//! Telegram transport layer: webhook server, Bot API client, and the
//! chat UI (commands, inline keyboards, inline queries).

pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod sessions;
pub mod state;
pub mod telegram;
pub mod ui;

pub use server::{create_app, create_app_state, run, run_server};
pub use state::AppState;
