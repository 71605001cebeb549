//! Form and mutation plumbing shared by every details view and list action.
//!
//! A mutation is validated locally, sent once, reported through exactly one
//! message modal, and on success invalidates the cached collections it touched.

use crate::shared::api_utils::ApiError;
use crate::shared::modal::{use_feedback, Feedback};
use crate::shared::query_cache::{use_query_client, QueryClient};
use contracts::domain::common::AggregateRoot;
use contracts::shared::validation::{FieldErrors, Validate};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

/// Texts shown after a mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct OutcomeText {
    pub success: String,
    pub failure: String,
}

impl OutcomeText {
    pub fn new(success: impl Into<String>, failure: impl Into<String>) -> Self {
        Self {
            success: success.into(),
            failure: failure.into(),
        }
    }

    pub fn saved<T: AggregateRoot>(is_new: bool) -> Self {
        let verb = if is_new { "created" } else { "updated" };
        Self::new(
            format!("{} has been {}.", T::element_name(), verb),
            format!("Failed to save {}", T::element_name().to_lowercase()),
        )
    }

    pub fn deleted<T: AggregateRoot>() -> Self {
        Self::new(
            format!("{} has been deleted.", T::element_name()),
            format!("Failed to delete {}", T::element_name().to_lowercase()),
        )
    }
}

/// What the user is told after a mutation finished.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Done(String),
    Failed(String),
}

impl Outcome {
    pub fn from_result<T>(result: &Result<T, ApiError>, text: &OutcomeText) -> Self {
        match result {
            Ok(_) => Outcome::Done(text.success.clone()),
            Err(e) => Outcome::Failed(e.user_message(&text.failure)),
        }
    }
}

/// Decides what a finished mutation reports and calls `invalidate` for each
/// touched collection, only when the request succeeded.
pub fn settle<T>(
    result: &Result<T, ApiError>,
    text: &OutcomeText,
    collections: &[&'static str],
    mut invalidate: impl FnMut(&'static str),
) -> Outcome {
    let outcome = Outcome::from_result(result, text);
    if let Outcome::Done(_) = outcome {
        for &collection in collections {
            invalidate(collection);
        }
    }
    outcome
}

/// Context handles needed to report and publish a mutation.
#[derive(Clone, Copy)]
pub struct Mutator {
    feedback: Feedback,
    client: QueryClient,
}

impl Mutator {
    pub fn new(feedback: Feedback, client: QueryClient) -> Self {
        Self { feedback, client }
    }

    pub fn feedback(&self) -> Feedback {
        self.feedback
    }

    pub fn client(&self) -> QueryClient {
        self.client
    }

    /// Awaits `request`, shows one outcome modal, invalidates `collections` on success
    /// and finally hands the result to `on_done`.
    pub fn run<T, Fut, D>(
        &self,
        request: Fut,
        text: OutcomeText,
        collections: &[&'static str],
        on_done: D,
    ) where
        T: 'static,
        Fut: Future<Output = Result<T, ApiError>> + 'static,
        D: FnOnce(Result<T, ApiError>) + 'static,
    {
        let this = *self;
        let collections = collections.to_vec();
        spawn_local(async move {
            let result = request.await;
            match settle(&result, &text, &collections, |c| this.client.invalidate(&[c])) {
                Outcome::Done(message) => this.feedback.success(message),
                Outcome::Failed(message) => this.feedback.error(message),
            }
            on_done(result);
        });
    }
}

pub fn use_mutator() -> Mutator {
    Mutator::new(use_feedback(), use_query_client())
}

/// Validation errors and the in-flight flag of one form.
#[derive(Clone, Copy)]
pub struct FormState {
    pub errors: RwSignal<FieldErrors>,
    pub saving: RwSignal<bool>,
    mutator: Mutator,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            errors: RwSignal::new(FieldErrors::new()),
            saving: RwSignal::new(false),
            mutator: use_mutator(),
        }
    }

    pub fn errors_signal(&self) -> Signal<FieldErrors> {
        self.errors.into()
    }

    pub fn mutator(&self) -> Mutator {
        self.mutator
    }

    /// Runs the record's rules and publishes the messages; `true` when the
    /// record may be sent.
    pub fn validate<T: Validate>(&self, record: &T) -> bool {
        match record.validate() {
            Ok(()) => {
                self.errors.set(FieldErrors::new());
                true
            }
            Err(errors) => {
                log::debug!("form rejected: {}", errors);
                self.errors.set(errors);
                false
            }
        }
    }

    /// Like [`FormState::validate`] for rules that need data beyond the record.
    pub fn publish(&self, errors: FieldErrors) -> bool {
        let ok = errors.is_empty();
        self.errors.set(errors);
        ok
    }

    /// Sends a validated record. A second click while saving is ignored.
    pub fn submit<T, Fut, D>(
        &self,
        request: Fut,
        text: OutcomeText,
        collections: &[&'static str],
        on_saved: D,
    ) where
        T: 'static,
        Fut: Future<Output = Result<T, ApiError>> + 'static,
        D: FnOnce(T) + 'static,
    {
        if self.saving.get_untracked() {
            return;
        }
        self.saving.set(true);
        let saving = self.saving;
        self.mutator.run(request, text, collections, move |result| {
            saving.set(false);
            if let Ok(value) = result {
                on_saved(value);
            }
        });
    }
}

/// Message for a details form whose record could not be loaded.
pub fn load_failure(error: &ApiError, element: &str) -> String {
    if error.is_not_found() {
        format!("{} not found. It may have been deleted.", element)
    } else {
        error.user_message(&format!("Failed to load {}", element.to_lowercase()))
    }
}

/// Numeric text input -> value; blank or malformed input reads as zero and is
/// then caught by the record's own range rules.
pub fn parse_number(text: &str) -> f64 {
    text.trim().replace(',', ".").parse::<f64>().unwrap_or(0.0)
}

pub fn parse_int(text: &str) -> i32 {
    text.trim().parse::<i32>().unwrap_or(0)
}

pub fn parse_count(text: &str) -> u32 {
    text.trim().parse::<u32>().unwrap_or(0)
}

/// Value shown in a numeric input; trailing zeros are dropped.
pub fn number_text(value: f64) -> String {
    let text = format!("{:.4}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::query_cache::{QueryCache, QueryKey};
    use contracts::domain::a004_bank_account::BankAccount;

    #[test]
    fn test_load_failure() {
        let missing = ApiError::from_response_body(404, "");
        assert_eq!(
            load_failure(&missing, "Customer"),
            "Customer not found. It may have been deleted."
        );
        assert_eq!(
            load_failure(&ApiError::Network("x".into()), "Customer"),
            "Failed to load customer"
        );
    }

    #[test]
    fn test_number_inputs() {
        assert_eq!(parse_number(" 12,5 "), 12.5);
        assert_eq!(parse_number("abc"), 0.0);
        assert_eq!(parse_int("-3"), -3);
        assert_eq!(parse_count("-3"), 0);
        assert_eq!(number_text(1000.0), "1000");
        assert_eq!(number_text(0.125), "0.125");
        assert_eq!(number_text(0.0), "0");
    }

    #[test]
    fn test_outcome_texts() {
        let created = OutcomeText::saved::<BankAccount>(true);
        assert_eq!(created.success, "Bank Account has been created.");
        assert_eq!(created.failure, "Failed to save bank account");
        assert_eq!(
            OutcomeText::deleted::<BankAccount>().success,
            "Bank Account has been deleted."
        );
    }

    #[test]
    fn test_exactly_one_outcome() {
        let text = OutcomeText::new("Saved.", "Failed to save");
        let ok: Result<(), ApiError> = Ok(());
        assert_eq!(Outcome::from_result(&ok, &text), Outcome::Done("Saved.".into()));

        let rejected: Result<(), ApiError> = Err(ApiError::from_response_body(
            400,
            r#"{"message":"The account code already exists"}"#,
        ));
        assert_eq!(
            Outcome::from_result(&rejected, &text),
            Outcome::Failed("The account code already exists".into())
        );

        let offline: Result<(), ApiError> = Err(ApiError::Network("down".into()));
        assert_eq!(
            Outcome::from_result(&offline, &text),
            Outcome::Failed("Failed to save".into())
        );
    }

    #[test]
    fn test_cache_dropped_only_after_success() {
        let text = OutcomeText::new("Saved.", "Failed to save");
        let accounts = QueryKey::new("bank_accounts").with("list").with(false);
        let units = QueryKey::new("item_units").with("list").with(false);
        let mut cache = QueryCache::new();
        cache.insert(accounts.clone(), &vec![1]);
        cache.insert(units.clone(), &vec![2]);

        let failed: Result<(), ApiError> = Err(ApiError::Network("down".into()));
        let outcome = settle(&failed, &text, &["bank_accounts"], |c| {
            cache.invalidate(&[c]);
        });
        assert_eq!(outcome, Outcome::Failed("Failed to save".into()));
        assert!(cache.contains(&accounts));

        let saved: Result<(), ApiError> = Ok(());
        let outcome = settle(&saved, &text, &["bank_accounts"], |c| {
            cache.invalidate(&[c]);
        });
        assert_eq!(outcome, Outcome::Done("Saved.".into()));
        assert!(!cache.contains(&accounts));
        assert!(cache.contains(&units));
    }
}
