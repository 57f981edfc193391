//! The prompt runner: walks the catalog and collects a complete response.

use std::collections::VecDeque;

use anyhow::{Result, bail};
use log::{debug, info};

use crate::catalog::{Catalog, MultiSelectQuestion, SelectQuestion, TextQuestion};
use crate::error::SurveyError;
use crate::response::{Choice, SurveyResponse};

/// Asks questions on behalf of the runner.
///
/// `Ok(None)` means the user cancelled the prompt (Escape, Ctrl+C inside a
/// widget, or EOF on stdin).
pub trait PromptBackend {
    fn free_text(&mut self, question: &TextQuestion) -> Result<Option<String>>;

    fn single_select<C: Choice>(&mut self, question: &SelectQuestion<C>)
    -> Result<Option<C>>;

    fn multi_select<C: Choice>(
        &mut self,
        question: &MultiSelectQuestion<C>,
    ) -> Result<Option<Vec<C>>>;
}

/// Asks every catalog question in order and returns the populated response.
///
/// A cancelled prompt aborts the whole run with `SurveyError::AbortedInput`;
/// no partially-filled response escapes.
pub fn run<B: PromptBackend>(catalog: &Catalog, backend: &mut B) -> Result<SurveyResponse> {
    let name = backend
        .free_text(&catalog.name)?
        .ok_or(SurveyError::AbortedInput)?;
    let age = backend
        .free_text(&catalog.age)?
        .ok_or(SurveyError::AbortedInput)?;
    let focus = backend
        .single_select(&catalog.focus)?
        .ok_or(SurveyError::AbortedInput)?;
    let languages = backend
        .multi_select(&catalog.languages)?
        .ok_or(SurveyError::AbortedInput)?;

    info!("survey collected: focus={focus}, {} language(s)", languages.len());

    Ok(SurveyResponse {
        name,
        age,
        focus,
        languages,
    })
}

/// A backend that replays canned answers without a terminal.
///
/// Answers are consumed in question order. Selections resolve by label
/// against `Choice::ALL`, mirroring exactly what the interactive widgets
/// offer. An exhausted script behaves like the user backing out, so partial
/// scripts exercise the abort path.
#[derive(Debug, Clone, Default)]
pub struct ScriptedBackend {
    answers: VecDeque<ScriptedAnswer>,
}

#[derive(Debug, Clone)]
enum ScriptedAnswer {
    Text(String),
    Pick(String),
    PickMany(Vec<String>),
    AcceptDefault,
    Cancel,
}

impl ScriptedBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a free-text answer.
    #[must_use]
    pub fn answer(mut self, text: impl Into<String>) -> Self {
        self.answers.push_back(ScriptedAnswer::Text(text.into()));
        self
    }

    /// Queues a single-select answer by its displayed label.
    #[must_use]
    pub fn pick(mut self, label: impl Into<String>) -> Self {
        self.answers.push_back(ScriptedAnswer::Pick(label.into()));
        self
    }

    /// Queues a multi-select answer by displayed labels. Results come back
    /// in list order, as the widget produces them.
    #[must_use]
    pub fn pick_many<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.answers.push_back(ScriptedAnswer::PickMany(
            labels.into_iter().map(Into::into).collect(),
        ));
        self
    }

    /// Queues acceptance of the question's default.
    #[must_use]
    pub fn accept_default(mut self) -> Self {
        self.answers.push_back(ScriptedAnswer::AcceptDefault);
        self
    }

    /// Queues a cancellation, as if the user pressed Escape.
    #[must_use]
    pub fn cancel(mut self) -> Self {
        self.answers.push_back(ScriptedAnswer::Cancel);
        self
    }

    fn next(&mut self) -> ScriptedAnswer {
        debug!("scripted backend serving next answer");
        self.answers.pop_front().unwrap_or(ScriptedAnswer::Cancel)
    }
}

fn resolve_label<C: Choice>(label: &str) -> Result<C> {
    match C::ALL.iter().find(|choice| choice.to_string() == label) {
        Some(choice) => Ok(*choice),
        None => bail!("'{label}' is not one of the offered choices"),
    }
}

impl PromptBackend for ScriptedBackend {
    fn free_text(&mut self, question: &TextQuestion) -> Result<Option<String>> {
        match self.next() {
            ScriptedAnswer::Text(text) => Ok(Some(text)),
            ScriptedAnswer::AcceptDefault => Ok(Some(question.default.to_string())),
            ScriptedAnswer::Cancel => Ok(None),
            other => bail!("scripted answer {other:?} does not fit a free-text question"),
        }
    }

    fn single_select<C: Choice>(
        &mut self,
        question: &SelectQuestion<C>,
    ) -> Result<Option<C>> {
        match self.next() {
            ScriptedAnswer::Pick(label) => resolve_label(&label).map(Some),
            ScriptedAnswer::AcceptDefault => Ok(Some(question.default)),
            ScriptedAnswer::Cancel => Ok(None),
            other => bail!("scripted answer {other:?} does not fit a single-select question"),
        }
    }

    fn multi_select<C: Choice>(
        &mut self,
        question: &MultiSelectQuestion<C>,
    ) -> Result<Option<Vec<C>>> {
        match self.next() {
            ScriptedAnswer::PickMany(labels) => {
                let mut picked: Vec<C> = Vec::with_capacity(labels.len());
                for label in &labels {
                    picked.push(resolve_label(label)?);
                }
                // The widget reports selections in list order regardless of
                // how they were toggled; mirror that here.
                let choices = C::ALL
                    .iter()
                    .copied()
                    .filter(|choice| picked.contains(choice))
                    .collect();
                Ok(Some(choices))
            }
            ScriptedAnswer::AcceptDefault => Ok(Some(question.defaults.to_vec())),
            ScriptedAnswer::Cancel => Ok(None),
            other => bail!("scripted answer {other:?} does not fit a multi-select question"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::{Focus, Language};

    #[test]
    fn test_run_collects_answers_in_catalog_order() {
        let catalog = Catalog::new();
        let mut backend = ScriptedBackend::new()
            .answer("Ana")
            .answer("30")
            .pick("Backend")
            .pick_many(["Python", "Ruby"]);

        let response = run(&catalog, &mut backend).unwrap();

        assert_eq!(response.name, "Ana");
        assert_eq!(response.age, "30");
        assert_eq!(response.focus, Focus::Backend);
        assert_eq!(response.languages, vec![Language::Python, Language::Ruby]);
    }

    #[test]
    fn test_run_with_all_defaults() {
        let catalog = Catalog::new();
        let mut backend = ScriptedBackend::new()
            .accept_default()
            .accept_default()
            .accept_default()
            .accept_default();

        let response = run(&catalog, &mut backend).unwrap();

        assert_eq!(response.name, "Your name");
        assert_eq!(response.age, "39");
        assert_eq!(response.focus, Focus::Frontend);
        assert_eq!(response.languages, vec![Language::JavaScript]);
    }

    #[test]
    fn test_cancel_mid_survey_aborts_the_run() {
        let catalog = Catalog::new();
        let mut backend = ScriptedBackend::new().answer("Ana").answer("30").cancel();

        let error = run(&catalog, &mut backend).unwrap_err();
        assert!(matches!(
            error.downcast_ref::<SurveyError>(),
            Some(SurveyError::AbortedInput)
        ));
    }

    #[test]
    fn test_exhausted_script_behaves_like_cancel() {
        let catalog = Catalog::new();
        let mut backend = ScriptedBackend::new().answer("Ana");

        let error = run(&catalog, &mut backend).unwrap_err();
        assert!(matches!(
            error.downcast_ref::<SurveyError>(),
            Some(SurveyError::AbortedInput)
        ));
    }

    #[test]
    fn test_unknown_label_is_rejected() {
        let catalog = Catalog::new();
        let mut backend = ScriptedBackend::new()
            .answer("Ana")
            .answer("30")
            .pick("Cobol");

        let error = run(&catalog, &mut backend).unwrap_err();
        assert!(error.to_string().contains("Cobol"));
    }

    #[test]
    fn test_pick_many_returns_choices_in_list_order() {
        let catalog = Catalog::new();
        let mut backend = ScriptedBackend::new()
            .accept_default()
            .accept_default()
            .accept_default()
            .pick_many(["Ruby", "Python"]);

        let response = run(&catalog, &mut backend).unwrap();
        assert_eq!(response.languages, vec![Language::Python, Language::Ruby]);
    }

    #[test]
    fn test_empty_multi_select_is_allowed() {
        let catalog = Catalog::new();
        let mut backend = ScriptedBackend::new()
            .accept_default()
            .accept_default()
            .accept_default()
            .pick_many(Vec::<String>::new());

        let response = run(&catalog, &mut backend).unwrap();
        assert!(response.languages.is_empty());
    }
}
