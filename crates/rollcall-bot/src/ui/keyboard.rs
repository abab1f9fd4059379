//! Inline keyboards

use rollcall_core::value_objects::{EventId, GuestCount};
use rollcall_service::dto::VoteResponse;

use crate::telegram::api::{InlineKeyboardButton, InlineKeyboardMarkup};
use crate::telegram::callback::{
    admin_data, cancel_select_data, select_user_data, set_vote_data, vote_data, AdminAction,
    VoteChoice,
};

fn guest_button(label: &str, guests: i32, event_id: EventId) -> InlineKeyboardButton {
    InlineKeyboardButton::callback(
        label,
        vote_data(event_id, VoteChoice::In(GuestCount::clamped(guests))),
    )
}

/// The keyboard under an event summary.
///
/// Voting rows only while the event is open; admin rows only for users
/// who may manage it.
pub fn vote_keyboard(event_id: EventId, is_admin: bool, is_active: bool) -> InlineKeyboardMarkup {
    let mut rows = Vec::new();

    if is_active {
        rows.push(vec![InlineKeyboardButton::callback(
            "✅ IN",
            vote_data(event_id, VoteChoice::In(GuestCount::NONE)),
        )]);
        rows.push(vec![
            guest_button("👤 +1", 1, event_id),
            guest_button("👥 +2", 2, event_id),
            guest_button("👥👤 +3", 3, event_id),
            guest_button("👥👥👤 +4", 4, event_id),
        ]);
        rows.push(vec![InlineKeyboardButton::callback(
            "❌ OUT",
            vote_data(event_id, VoteChoice::Out),
        )]);
    }

    if is_admin {
        rows.push(vec![InlineKeyboardButton::callback(
            "🧑‍🤝‍🧑 Manage votes",
            admin_data(event_id, AdminAction::Manage),
        )]);
        rows.push(vec![
            InlineKeyboardButton::callback("⚙️ Capacity", admin_data(event_id, AdminAction::Capacity)),
            InlineKeyboardButton::callback("🔒 Close", admin_data(event_id, AdminAction::Close)),
            InlineKeyboardButton::callback("🗑 Delete", admin_data(event_id, AdminAction::Delete)),
        ]);
    }

    InlineKeyboardMarkup {
        inline_keyboard: rows,
    }
}

/// One button per voter, for the manage-votes flow
pub fn user_select_keyboard(event_id: EventId, votes: &[VoteResponse]) -> InlineKeyboardMarkup {
    let mut rows: Vec<Vec<InlineKeyboardButton>> = votes
        .iter()
        .map(|v| {
            vec![InlineKeyboardButton::callback(
                v.user_name.clone(),
                select_user_data(event_id, rollcall_core::value_objects::UserId::new(v.user_id)),
            )]
        })
        .collect();

    rows.push(vec![InlineKeyboardButton::callback(
        "❌ Cancel",
        cancel_select_data(),
    )]);

    InlineKeyboardMarkup {
        inline_keyboard: rows,
    }
}

/// The vote choices an admin can assign to the selected voter
pub fn vote_choice_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup {
        inline_keyboard: vec![
            vec![InlineKeyboardButton::callback(
                "✅ IN",
                set_vote_data(VoteChoice::In(GuestCount::NONE)),
            )],
            vec![
                InlineKeyboardButton::callback("👤 +1", set_vote_data(VoteChoice::In(GuestCount::clamped(1)))),
                InlineKeyboardButton::callback("👥 +2", set_vote_data(VoteChoice::In(GuestCount::clamped(2)))),
            ],
            vec![
                InlineKeyboardButton::callback("👥👤 +3", set_vote_data(VoteChoice::In(GuestCount::clamped(3)))),
                InlineKeyboardButton::callback("👥👥👤 +4", set_vote_data(VoteChoice::In(GuestCount::clamped(4)))),
            ],
            vec![InlineKeyboardButton::callback("❌ OUT", set_vote_data(VoteChoice::Out))],
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_data(markup: &InlineKeyboardMarkup) -> Vec<String> {
        markup
            .inline_keyboard
            .iter()
            .flatten()
            .filter_map(|b| b.callback_data.clone())
            .collect()
    }

    #[test]
    fn test_active_admin_keyboard_has_all_rows() {
        let markup = vote_keyboard(EventId::new(5), true, true);
        assert_eq!(markup.inline_keyboard.len(), 5);

        let data = all_data(&markup);
        assert!(data.contains(&"v:5:0".to_string()));
        assert!(data.contains(&"v:5:4".to_string()));
        assert!(data.contains(&"v:5:out".to_string()));
        assert!(data.contains(&"a:5:manage".to_string()));
        assert!(data.contains(&"a:5:delete".to_string()));
    }

    #[test]
    fn test_closed_event_hides_vote_rows() {
        let markup = vote_keyboard(EventId::new(5), true, false);
        let data = all_data(&markup);
        assert!(data.iter().all(|d| !d.starts_with("v:")));
        assert!(data.contains(&"a:5:close".to_string()));
    }

    #[test]
    fn test_non_admin_keyboard_has_no_admin_rows() {
        let markup = vote_keyboard(EventId::new(5), false, true);
        let data = all_data(&markup);
        assert_eq!(markup.inline_keyboard.len(), 3);
        assert!(data.iter().all(|d| d.starts_with("v:")));
    }

    #[test]
    fn test_user_select_keyboard_ends_with_cancel() {
        let votes = vec![VoteResponse {
            user_id: 42,
            user_name: "Alice".to_string(),
            guests: 0,
            party_size: 1,
            label: "IN".to_string(),
        }];
        let markup = user_select_keyboard(EventId::new(5), &votes);
        let data = all_data(&markup);
        assert_eq!(data, vec!["au:5:42".to_string(), "au:cancel".to_string()]);
    }

    #[test]
    fn test_vote_choice_keyboard_covers_all_choices() {
        let data = all_data(&vote_choice_keyboard());
        assert_eq!(
            data,
            vec!["av:0", "av:1", "av:2", "av:3", "av:4", "av:out"]
        );
    }
}
