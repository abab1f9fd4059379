//! Event summary rendering
//!
//! One Markdown message per event: title, seat counter, the voters in
//! submission order, and the event id so it can be found via inline
//! queries.

use rollcall_service::dto::EventSummary;

/// Render the summary message body
pub fn render_summary(summary: &EventSummary) -> String {
    let mut lines = vec![
        format!("📌 *{}*", summary.event.title),
        format!("👥 {}/{}", summary.total, summary.event.max_people),
    ];
    if !summary.event.active {
        lines.push("🔒 closed".to_string());
    }
    lines.push(String::new());

    for vote in &summary.votes {
        lines.push(format!("• {} ({})", vote.user_name, vote.label));
    }

    lines.push(format!("\n🆔 Event ID: `{}`", summary.event.id));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rollcall_core::entities::{Event, Vote};
    use rollcall_core::value_objects::{ChatId, EventId, GuestCount, UserId};

    fn summary_with_votes(max_people: i32, votes: Vec<Vote>) -> EventSummary {
        let event = Event {
            id: EventId::new(7),
            chat_id: ChatId::new(-100),
            title: "Soccer".to_string(),
            max_people,
            created_by: UserId::new(1),
            active: true,
            created_at: Utc::now(),
            message_id: None,
        };
        EventSummary::new(&event, &votes)
    }

    fn closed_summary(max_people: i32) -> EventSummary {
        let event = Event {
            id: EventId::new(7),
            chat_id: ChatId::new(-100),
            title: "Soccer".to_string(),
            max_people,
            created_by: UserId::new(1),
            active: false,
            created_at: Utc::now(),
            message_id: None,
        };
        EventSummary::new(&event, &[])
    }

    #[test]
    fn test_render_empty_event() {
        let text = render_summary(&summary_with_votes(12, vec![]));
        assert_eq!(text, "📌 *Soccer*\n👥 0/12\n\n\n🆔 Event ID: `7`");
    }

    #[test]
    fn test_render_with_votes() {
        let votes = vec![
            Vote::new(EventId::new(7), UserId::new(1), "Alice".to_string(), GuestCount::NONE),
            Vote::new(EventId::new(7), UserId::new(2), "Bob".to_string(), GuestCount::clamped(2)),
        ];
        let text = render_summary(&summary_with_votes(12, votes));

        assert!(text.contains("👥 4/12"));
        assert!(text.contains("• Alice (IN)"));
        assert!(text.contains("• Bob (+2)"));
        assert!(text.ends_with("🆔 Event ID: `7`"));
    }

    #[test]
    fn test_render_closed_marker() {
        let text = render_summary(&closed_summary(12));
        assert_eq!(text, "📌 *Soccer*\n👥 0/12\n🔒 closed\n\n\n🆔 Event ID: `7`");
    }

    #[test]
    fn test_render_over_capacity_counter() {
        let votes = vec![
            Vote::new(EventId::new(7), UserId::new(1), "Alice".to_string(), GuestCount::clamped(4)),
        ];
        let text = render_summary(&summary_with_votes(2, votes));
        assert!(text.contains("👥 5/2"));
    }
}
