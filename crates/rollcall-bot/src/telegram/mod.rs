//! Telegram Bot API integration

pub mod api;
pub mod callback;
pub mod client;
pub mod gate;

pub use api::{
    CallbackQuery, Chat, ChatMember, InlineKeyboardButton, InlineKeyboardMarkup, InlineQuery,
    InlineQueryResultArticle, InputTextMessageContent, Message, Update, User,
};
pub use callback::{AdminAction, CallbackAction, VoteChoice};
pub use client::{TelegramClient, TelegramError};
pub use gate::TelegramAdminGate;
