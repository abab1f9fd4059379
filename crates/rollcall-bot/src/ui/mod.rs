//! Chat UI: rendered summaries and inline keyboards

mod keyboard;
mod render;

pub use keyboard::{user_select_keyboard, vote_choice_keyboard, vote_keyboard};
pub use render::render_summary;
