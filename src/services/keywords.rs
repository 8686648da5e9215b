use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::models::ServiceLabel;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceKeywords {
    pub service: ServiceLabel,
    pub keywords: Vec<String>,
}

/// Trigger words for every intent, scanned by the classifier in a fixed order.
///
/// Services are a list rather than a map so that declaration order survives a
/// JSON round trip: the first service with a hit wins.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KeywordTable {
    pub greeting: Vec<String>,
    pub help: Vec<String>,
    pub pricing: Vec<String>,
    pub cancel: Vec<String>,
    pub reschedule: Vec<String>,
    pub status: Vec<String>,
    pub services: Vec<ServiceKeywords>,
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

impl KeywordTable {
    pub fn builtin() -> Self {
        Self {
            greeting: words(&["hi", "hello", "hey", "नमस्ते", "नमस्कार"]),
            help: words(&["help", "madad", "सहायता"]),
            pricing: words(&["price", "kitna", "rate", "charges", "कितना"]),
            cancel: words(&["cancel", "रद्द"]),
            reschedule: words(&["reschedule", "time change", "समय बदल"]),
            status: words(&["status", "kya hua", "कब आएगा"]),
            services: vec![
                ServiceKeywords {
                    service: ServiceLabel::Plumber,
                    keywords: words(&[
                        "plumber", "plumbing", "nal", "leak", "tap", "geyser", "गीजर", "प्लम्बर",
                    ]),
                },
                ServiceKeywords {
                    service: ServiceLabel::Electrician,
                    keywords: words(&["electric", "fan", "light", "switch", "wiring", "इलेक्ट्रीशियन"]),
                },
                ServiceKeywords {
                    service: ServiceLabel::Carpenter,
                    keywords: words(&["carpenter", "wood", "door", "hinge", "shelf", "कारपेंटर"]),
                },
                ServiceKeywords {
                    service: ServiceLabel::Cleaner,
                    keywords: words(&["clean", "deep clean", "सफाई", "क्लीन", "safaai"]),
                },
                ServiceKeywords {
                    service: ServiceLabel::PestControl,
                    keywords: words(&["pest", "cockroach", "termite", "bed bug", "कीड़े", "मक्खी"]),
                },
                ServiceKeywords {
                    service: ServiceLabel::Guard,
                    keywords: words(&["guard", "security", "सिक्योरिटी"]),
                },
            ],
        }
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let table: KeywordTable =
            serde_json::from_str(json).context("failed to parse keyword table JSON")?;
        table.validated()
    }

    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read keyword table {}", path.display()))?;
        Self::from_json(&raw)
    }

    /// Lowercases and trims every keyword, then rejects tables the classifier
    /// cannot use safely.
    pub(crate) fn validated(mut self) -> anyhow::Result<Self> {
        for list in self.intent_lists_mut() {
            normalize(list);
        }
        for entry in &mut self.services {
            normalize(&mut entry.keywords);
        }

        anyhow::ensure!(!self.greeting.is_empty(), "greeting keyword list is empty");

        let all_keywords = [
            &self.greeting,
            &self.help,
            &self.pricing,
            &self.cancel,
            &self.reschedule,
            &self.status,
        ]
        .into_iter()
        .flatten()
        .chain(self.services.iter().flat_map(|s| s.keywords.iter()));
        for keyword in all_keywords {
            // An empty needle is a substring of every message.
            anyhow::ensure!(!keyword.is_empty(), "keyword table contains an empty keyword");
        }

        if let Some(entry) = self
            .services
            .iter()
            .find(|s| s.service == ServiceLabel::General)
        {
            anyhow::bail!(
                "'{}' is the fallback service and cannot have keywords",
                entry.service.as_str()
            );
        }

        Ok(self)
    }

    fn intent_lists_mut(&mut self) -> [&mut Vec<String>; 6] {
        [
            &mut self.greeting,
            &mut self.help,
            &mut self.pricing,
            &mut self.cancel,
            &mut self.reschedule,
            &mut self.status,
        ]
    }
}

impl Default for KeywordTable {
    fn default() -> Self {
        Self::builtin()
    }
}

fn normalize(list: &mut [String]) {
    for keyword in list.iter_mut() {
        *keyword = keyword.trim().to_lowercase();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_service_order() {
        let table = KeywordTable::builtin();
        let order: Vec<ServiceLabel> = table.services.iter().map(|s| s.service).collect();
        assert_eq!(
            order,
            vec![
                ServiceLabel::Plumber,
                ServiceLabel::Electrician,
                ServiceLabel::Carpenter,
                ServiceLabel::Cleaner,
                ServiceLabel::PestControl,
                ServiceLabel::Guard,
            ]
        );
    }

    #[test]
    fn test_json_round_trip_keeps_order() {
        let table = KeywordTable::builtin();
        let json = serde_json::to_string(&table).unwrap();
        let parsed = KeywordTable::from_json(&json).unwrap();
        assert_eq!(parsed, table);
    }

    #[test]
    fn test_from_json_normalizes_case() {
        let json = r#"{
            "greeting": [" Hi "],
            "help": ["HELP"],
            "pricing": [],
            "cancel": [],
            "reschedule": [],
            "status": [],
            "services": [{"service": "plumber", "keywords": ["Tap"]}]
        }"#;
        let table = KeywordTable::from_json(json).unwrap();
        assert_eq!(table.greeting, vec!["hi"]);
        assert_eq!(table.help, vec!["help"]);
        assert_eq!(table.services[0].keywords, vec!["tap"]);
    }

    #[test]
    fn test_rejects_empty_greeting_list() {
        let mut table = KeywordTable::builtin();
        table.greeting.clear();
        let json = serde_json::to_string(&table).unwrap();
        assert!(KeywordTable::from_json(&json).is_err());
    }

    #[test]
    fn test_rejects_blank_keyword() {
        let mut table = KeywordTable::builtin();
        table.services[1].keywords.push("   ".to_string());
        let json = serde_json::to_string(&table).unwrap();
        let err = KeywordTable::from_json(&json).unwrap_err();
        assert!(err.to_string().contains("empty keyword"));
    }

    #[test]
    fn test_rejects_general_service_entry() {
        let mut table = KeywordTable::builtin();
        table.services.push(ServiceKeywords {
            service: ServiceLabel::General,
            keywords: vec!["anything".to_string()],
        });
        let json = serde_json::to_string(&table).unwrap();
        assert!(KeywordTable::from_json(&json).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = KeywordTable::load("/definitely/not/here.json").unwrap_err();
        assert!(err.to_string().contains("failed to read keyword table"));
    }
}
