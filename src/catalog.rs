//! The static question catalog consumed by the prompt runner.
//!
//! Pure configuration data: each question kind has its own descriptor type
//! carrying only the fields relevant to that kind. The catalog is built once
//! at startup and passed explicitly into the runner; there is no module-level
//! state.

use crate::response::{Choice, Focus, Language};

/// A free-text question. Blank input accepts the default.
#[derive(Debug, Clone, Copy)]
pub struct TextQuestion {
    pub prompt: &'static str,
    pub default: &'static str,
}

/// A single-selection question; the offered choices are `C::ALL`.
#[derive(Debug, Clone, Copy)]
pub struct SelectQuestion<C: Choice> {
    pub prompt: &'static str,
    pub default: C,
}

/// A multi-selection question; zero or more of `C::ALL` may be picked.
#[derive(Debug, Clone, Copy)]
pub struct MultiSelectQuestion<C: Choice> {
    pub prompt: &'static str,
    pub defaults: &'static [C],
}

/// The survey's questions, in the order they are asked.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    pub name: TextQuestion,
    pub age: TextQuestion,
    pub focus: SelectQuestion<Focus>,
    pub languages: MultiSelectQuestion<Language>,
}

impl Catalog {
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: TextQuestion {
                prompt: "What is your name?",
                default: "Your name",
            },
            age: TextQuestion {
                prompt: "How old are you?",
                default: "39",
            },
            focus: SelectQuestion {
                prompt: "What is your focus?",
                default: Focus::Frontend,
            },
            languages: MultiSelectQuestion {
                prompt: "Which languages do you prefer?",
                defaults: &[Language::JavaScript],
            },
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_defaults_match_documented_values() {
        let catalog = Catalog::new();
        assert_eq!(catalog.name.default, "Your name");
        assert_eq!(catalog.age.default, "39");
        assert_eq!(catalog.focus.default, Focus::Frontend);
        assert_eq!(catalog.languages.defaults, &[Language::JavaScript]);
    }

    #[test]
    fn test_catalog_prompts_not_empty() {
        let catalog = Catalog::new();
        assert!(!catalog.name.prompt.is_empty());
        assert!(!catalog.age.prompt.is_empty());
        assert!(!catalog.focus.prompt.is_empty());
        assert!(!catalog.languages.prompt.is_empty());
    }

    #[test]
    fn test_select_defaults_are_offered_choices() {
        let catalog = Catalog::new();
        assert!(Focus::ALL.contains(&catalog.focus.default));
        for language in catalog.languages.defaults {
            assert!(Language::ALL.contains(language));
        }
    }
}
