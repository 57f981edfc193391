//! The survey answer data model.

use std::fmt;

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// An answer drawn from a fixed list of variants.
///
/// The selection widgets build their option lists from `ALL`, so every value
/// they hand back is a member of the list by construction.
pub trait Choice: Copy + Eq + fmt::Display + 'static {
    /// Every selectable variant, in the order offered to the user.
    const ALL: &'static [Self];
}

/// Primary development focus.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Focus {
    Frontend,
    Backend,
    Fullstack,
}

impl Choice for Focus {
    const ALL: &'static [Self] = &[Self::Frontend, Self::Backend, Self::Fullstack];
}

/// A programming language the respondent can prefer.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    JavaScript,
    TypeScript,
    Java,
    #[display("C#")]
    #[serde(rename = "C#")]
    CSharp,
    Python,
    Ruby,
}

impl Choice for Language {
    const ALL: &'static [Self] = &[
        Self::JavaScript,
        Self::TypeScript,
        Self::Java,
        Self::CSharp,
        Self::Python,
        Self::Ruby,
    ];
}

/// All answers collected during one run.
///
/// Lives only in memory until written; the file on disk is the sole durable
/// copy and is overwritten on every run. The age is stored as the literal
/// typed text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyResponse {
    pub name: String,
    pub age: String,
    pub focus: Focus,
    pub languages: Vec<Language>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SurveyResponse {
        SurveyResponse {
            name: "Ana".to_string(),
            age: "30".to_string(),
            focus: Focus::Backend,
            languages: vec![Language::Python, Language::Ruby],
        }
    }

    #[test]
    fn test_focus_choices_are_complete() {
        assert_eq!(
            Focus::ALL,
            &[Focus::Frontend, Focus::Backend, Focus::Fullstack]
        );
    }

    #[test]
    fn test_language_choices_are_complete() {
        assert_eq!(Language::ALL.len(), 6);
    }

    #[test]
    fn test_choice_labels_are_unique_and_non_empty() {
        let labels: Vec<String> = Language::ALL.iter().map(ToString::to_string).collect();
        for label in &labels {
            assert!(!label.is_empty());
        }
        let mut unique = labels.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(labels.len(), unique.len());
    }

    #[test]
    fn test_csharp_displays_and_serializes_with_hash_sign() {
        assert_eq!(Language::CSharp.to_string(), "C#");
        assert_eq!(
            serde_json::to_string(&Language::CSharp).unwrap(),
            "\"C#\""
        );
    }

    #[test]
    fn test_focus_serializes_as_variant_name() {
        assert_eq!(serde_json::to_string(&Focus::Fullstack).unwrap(), "\"Fullstack\"");
        assert_eq!(Focus::Fullstack.to_string(), "Fullstack");
    }

    #[test]
    fn test_response_serializes_with_all_four_keys() {
        let json = serde_json::to_string_pretty(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 4);
        assert_eq!(object["name"], "Ana");
        assert_eq!(object["age"], "30");
        assert_eq!(object["focus"], "Backend");
        assert_eq!(object["languages"], serde_json::json!(["Python", "Ruby"]));
    }

    #[test]
    fn test_empty_languages_serializes_as_empty_list() {
        let response = SurveyResponse {
            languages: Vec::new(),
            ..sample()
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["languages"], serde_json::json!([]));
    }

    #[test]
    fn test_response_round_trips_through_json() {
        let response = sample();
        let json = serde_json::to_string_pretty(&response).unwrap();
        let parsed: SurveyResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, response);
    }
}
