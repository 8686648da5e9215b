//! Rule-based intent classification.
//!
//! Checks run in a fixed priority order and the first hit wins: greeting,
//! help, pricing, cancel, reschedule, status, then the per-service keyword
//! lists. Only the greeting check respects word boundaries; everything else is
//! plain substring containment, so "fan" also fires inside longer words.

use anyhow::Context;
use regex::Regex;

use crate::models::{Classification, IntentLabel};
use crate::services::keywords::KeywordTable;

pub struct Classifier {
    table: KeywordTable,
    greeting: Regex,
}

impl Classifier {
    pub fn new(table: KeywordTable) -> anyhow::Result<Self> {
        let table = table.validated()?;
        let alternatives: Vec<String> = table.greeting.iter().map(|w| regex::escape(w)).collect();
        // Unicode-aware \b, so Devanagari words ending in a vowel sign still match.
        let pattern = format!(r"\b(?:{})\b", alternatives.join("|"));
        let greeting = Regex::new(&pattern).context("failed to compile greeting pattern")?;
        Ok(Self { table, greeting })
    }

    pub fn classify(&self, text: &str) -> Classification {
        let t = text.trim().to_lowercase();
        if t.is_empty() {
            return Classification::intent(IntentLabel::Other);
        }

        if self.greeting.is_match(&t) {
            return Classification::intent(IntentLabel::Greeting);
        }

        let ordered = [
            (&self.table.help, IntentLabel::Help),
            (&self.table.pricing, IntentLabel::Pricing),
            (&self.table.cancel, IntentLabel::CancelBooking),
            (&self.table.reschedule, IntentLabel::RescheduleBooking),
            (&self.table.status, IntentLabel::StatusCheck),
        ];
        for (keywords, intent) in ordered {
            if contains_any(&t, keywords) {
                return Classification::intent(intent);
            }
        }

        self.table
            .services
            .iter()
            .find(|entry| contains_any(&t, &entry.keywords))
            .map(|entry| Classification::booking(entry.service))
            .unwrap_or_else(|| Classification::intent(IntentLabel::Other))
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(KeywordTable::builtin()).expect("built-in keyword table compiles")
    }
}

fn contains_any(text: &str, keywords: &[String]) -> bool {
    keywords.iter().any(|k| text.contains(k.as_str()))
}
