//! Typed requests handed to the skill by the platform adapter.

use indexmap::IndexMap;

/// An incoming request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// The skill was opened without an intent
    Launch,
    /// A spoken intent with its slot values
    Intent(IntentRequest),
    /// The session ended
    SessionEnded,
}

impl Request {
    pub fn intent(name: &str) -> Self {
        Request::Intent(IntentRequest {
            name: name.to_string(),
            slots: Slots::default(),
        })
    }

    pub fn intent_with_slot(name: &str, slot: &str, value: &str) -> Self {
        Request::Intent(IntentRequest {
            name: name.to_string(),
            slots: Slots::default().with(slot, value),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntentRequest {
    pub name: String,
    pub slots: Slots,
}

/// Slot values by slot name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Slots(IndexMap<String, String>);

impl Slots {
    pub fn with(mut self, slot: &str, value: &str) -> Self {
        self.0.insert(slot.to_string(), value.to_string());
        self
    }

    /// Raw slot value
    pub fn value(&self, slot: &str) -> Option<&str> {
        self.0.get(slot).map(String::as_str)
    }

    /// Slot value usable as a search term. Empty values and the `?` the
    /// platform sends for unrecognised speech count as no term.
    pub fn term(&self, slot: &str) -> Option<&str> {
        self.value(slot)
            .map(str::trim)
            .filter(|value| !value.is_empty() && *value != "?")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term() {
        let slots = Slots::default()
            .with("keyword", " whales ")
            .with("unknown", "?")
            .with("blank", "");
        assert_eq!(slots.term("keyword"), Some("whales"));
        assert_eq!(slots.term("unknown"), None);
        assert_eq!(slots.term("blank"), None);
        assert_eq!(slots.term("missing"), None);
        assert_eq!(slots.value("unknown"), Some("?"));
    }

    #[test]
    fn test_intent_constructors() {
        let Request::Intent(intent) = Request::intent_with_slot("StoryItemIntent", "keyword", "coral") else {
            panic!("expected intent");
        };
        assert_eq!(intent.name, "StoryItemIntent");
        assert_eq!(intent.slots.term("keyword"), Some("coral"));
    }
}
