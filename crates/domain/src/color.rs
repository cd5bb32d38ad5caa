use crate::{event::Event, opportunity::Opportunity};

pub const DEFAULT_COLOR: &str = "gray";

const TYPE_COLORS: [(&str, &str); 12] = [
    ("interview", "blue"),
    ("phone screen", "blue"),
    ("deadline", "red"),
    ("followup", "green"),
    ("follow up", "green"),
    ("assessment", "purple"),
    ("technical assessment", "purple"),
    ("networking", "teal"),
    ("offer", "emerald"),
    ("reminder", "amber"),
    ("meeting", "indigo"),
    ("general", DEFAULT_COLOR),
];

const STATUS_COLORS: [(&str, &str); 12] = [
    ("bookmarked", "slate"),
    ("applying", "amber"),
    ("applied", "amber"),
    ("phone screen", "blue"),
    ("initial interview", "blue"),
    ("technical assessment", "purple"),
    ("second interview", "blue"),
    ("final interview", "indigo"),
    ("offer received", "emerald"),
    ("accepted", "green"),
    ("rejected", "red"),
    ("withdrawn", DEFAULT_COLOR),
];

fn normalize(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .replace(['-', '_'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn lookup(table: &[(&str, &'static str)], raw: Option<&str>) -> Option<&'static str> {
    let key = normalize(raw?);
    if key.is_empty() {
        return None;
    }
    table
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, color)| *color)
}

/// Display color token of an `Event`.
///
/// The event type decides first, then the status of the linked
/// `Opportunity` and finally the neutral default.
pub fn color_for(event: &Event, opportunity: Option<&Opportunity>) -> &'static str {
    lookup(&TYPE_COLORS, event.event_type.as_deref())
        .or_else(|| {
            let opportunity = opportunity?;
            // A snapshot of some other opportunity says nothing about this event
            if event.opportunity_id.as_ref() != Some(&opportunity.id) {
                return None;
            }
            lookup(&STATUS_COLORS, Some(&opportunity.status))
        })
        .unwrap_or(DEFAULT_COLOR)
}
