use serde::{Deserialize, Serialize};

use crate::locale::month_name_es;

/// What a day past the end of the message list shows as its base message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissingContentPolicy {
    /// Cycle through the messages: day `n` uses `messages[(n - 1) % len]`
    Wrap,
    /// Use a fixed message for every day past the list
    Fallback(String),
    /// Render the literal text `undefined`, matching pages that index the
    /// list without a bounds check
    Undefined,
}

/// Ordered per-day messages, indexed by `number - 1`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBook {
    pub messages: Vec<String>,
    pub policy: MissingContentPolicy,
}

const UNDEFINED_MESSAGE: &str = "undefined";

impl Default for ContentBook {
    fn default() -> Self {
        Self {
            messages: vec![
                "Fue el comienzo de todo, un mes bello y hermoso.".to_string(),
                "Una nueva aventura surgió, nuevos mensajes que siguen apareciendo día tras día"
                    .to_string(),
            ],
            policy: MissingContentPolicy::Wrap,
        }
    }
}

impl ContentBook {
    pub fn new(messages: Vec<String>, policy: MissingContentPolicy) -> Self {
        Self { messages, policy }
    }

    /// Base message for a 1-based day number, before the unlock suffix.
    ///
    /// `None` only when there is nothing to show at all (day 0, or an empty
    /// list under `Wrap`).
    pub fn base_message(&self, number: u32) -> Option<&str> {
        let index = usize::try_from(number.checked_sub(1)?).ok()?;
        if let Some(message) = self.messages.get(index) {
            return Some(message.as_str());
        }

        match &self.policy {
            MissingContentPolicy::Wrap => {
                if self.messages.is_empty() {
                    None
                } else {
                    Some(self.messages[index % self.messages.len()].as_str())
                }
            }
            MissingContentPolicy::Fallback(text) => Some(text.as_str()),
            MissingContentPolicy::Undefined => Some(UNDEFINED_MESSAGE),
        }
    }

    /// Full text revealed in the modal for a day of the given month
    pub fn content_for(&self, number: u32, month: u32) -> String {
        let suffix = format!(
            "Día {} de {} ha sido desbloqueado con contenido especial para ti.",
            number,
            month_name_es(month)
        );

        match self.base_message(number) {
            Some(base) => format!("{} {}", base, suffix),
            None => suffix,
        }
    }
}
