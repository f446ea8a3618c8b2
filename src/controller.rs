//! Generator dialog workflow
//!
//! [`GenerationController`] owns the dialog's [`WorkflowState`] and the
//! description input. The outbound call itself is not made here: `submit`
//! hands back a [`PendingGeneration`] that the caller executes (usually on a
//! spawned task) and feeds back through `complete`. Every attempt carries a
//! [`Ticket`]; completions whose ticket no longer matches the in-flight one
//! are dropped, which is how a dismissed or reopened dialog ignores answers
//! that arrive late.

use crate::client::GeneratorClient;
use crate::error::GenerateError;
use crate::input::TextInput;
use crate::payload::{GenerationRequest, GenerationResult};
use crate::preview::{summarize, PreviewLine};
use crate::toast::{Toast, ToastSink};

const VALIDATION_TITLE: &str = "Ошибка";
const FAILURE_TITLE: &str = "Ошибка генерации";
const SUCCESS_TITLE: &str = "Готово!";
const SUCCESS_DESCRIPTION: &str = "Ваш сайт успешно создан";
const SAVED_TITLE: &str = "Сохранено!";
const SAVED_DESCRIPTION: &str = "Проект добавлен в ваш аккаунт";

/// Identifies one outbound call within one dialog session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket {
    session: u64,
    attempt: u64,
}

/// Where the current generation attempt stands
#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowState {
    Idle,
    InFlight(Ticket),
    Succeeded(GenerationResult),
    Failed(String),
}

/// An accepted submission waiting to be sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingGeneration {
    pub ticket: Ticket,
    pub request: GenerationRequest,
}

#[derive(Debug)]
pub struct GenerationController {
    state: WorkflowState,
    input: TextInput,
    open: bool,
    session: u64,
    attempts: u64,
}

impl Default for GenerationController {
    fn default() -> Self {
        Self::new()
    }
}

impl GenerationController {
    pub fn new() -> Self {
        Self {
            state: WorkflowState::Idle,
            input: TextInput::new(),
            open: false,
            session: 0,
            attempts: 0,
        }
    }

    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self.state, WorkflowState::InFlight(_))
    }

    pub fn input(&self) -> &TextInput {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut TextInput {
        &mut self.input
    }

    pub fn set_description(&mut self, description: &str) {
        self.input.set(description);
    }

    /// Last successful result, if the workflow currently holds one
    pub fn result(&self) -> Option<&GenerationResult> {
        match &self.state {
            WorkflowState::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    pub fn preview(&self) -> Option<Vec<PreviewLine>> {
        self.result().map(summarize)
    }

    /// Open the dialog on a fresh session
    pub fn open(&mut self) {
        self.begin_session();
        self.state = WorkflowState::Idle;
        self.input.clear();
        self.open = true;
    }

    /// Close the dialog without accepting.
    ///
    /// A call still in flight keeps running but its completion will be
    /// discarded.
    pub fn dismiss(&mut self) {
        if self.is_in_flight() {
            tracing::info!("dialog dismissed while generating, result will be discarded");
            self.state = WorkflowState::Idle;
        }
        self.begin_session();
        self.open = false;
    }

    /// Validate the input and move to `InFlight`.
    ///
    /// Returns `Ok(None)` when a call is already in flight, in which case
    /// nothing happens at all.
    pub fn submit(
        &mut self,
        toasts: &mut impl ToastSink,
    ) -> Result<Option<PendingGeneration>, GenerateError> {
        if self.is_in_flight() {
            tracing::debug!("submit ignored, generation already in flight");
            return Ok(None);
        }

        let description = self.input.as_str().trim();
        if description.is_empty() {
            let err = GenerateError::EmptyDescription;
            tracing::warn!("rejected empty description");
            toasts.push(Toast::destructive(VALIDATION_TITLE, err.user_message()));
            return Err(err);
        }

        self.attempts += 1;
        let ticket = Ticket {
            session: self.session,
            attempt: self.attempts,
        };
        let request = GenerationRequest::new(description);
        tracing::info!(
            session = ticket.session,
            attempt = ticket.attempt,
            chars = description.chars().count(),
            "generation submitted"
        );
        self.state = WorkflowState::InFlight(ticket);

        Ok(Some(PendingGeneration { ticket, request }))
    }

    /// Apply the outcome of an outbound call.
    ///
    /// Returns `false` when the ticket is stale and the outcome was ignored.
    pub fn complete(
        &mut self,
        ticket: Ticket,
        outcome: Result<GenerationResult, GenerateError>,
        toasts: &mut impl ToastSink,
    ) -> bool {
        if self.state != WorkflowState::InFlight(ticket) {
            tracing::debug!(
                session = ticket.session,
                attempt = ticket.attempt,
                "discarding stale generation result"
            );
            return false;
        }

        match outcome {
            Ok(result) => {
                tracing::info!(title = ?result.title, "generation succeeded");
                self.state = WorkflowState::Succeeded(result);
                toasts.push(Toast::new(SUCCESS_TITLE, SUCCESS_DESCRIPTION));
            }
            Err(err) => {
                let message = err.user_message();
                tracing::warn!(error = ?err, "generation failed");
                toasts.push(Toast::destructive(FAILURE_TITLE, message.clone()));
                self.state = WorkflowState::Failed(message);
            }
        }
        true
    }

    /// Drop the held result and clear the input. Ignored while in flight.
    pub fn reset(&mut self) {
        if self.is_in_flight() {
            tracing::debug!("reset ignored, generation in flight");
            return;
        }
        self.state = WorkflowState::Idle;
        self.input.clear();
    }

    /// Acknowledge a successful result and request the dialog to close.
    ///
    /// Returns `true` when the close signal was raised.
    pub fn accept(&mut self, toasts: &mut impl ToastSink) -> bool {
        if !self.open || self.result().is_none() {
            return false;
        }
        toasts.push(Toast::new(SAVED_TITLE, SAVED_DESCRIPTION));
        self.open = false;
        true
    }

    /// Submit, run the call to completion and apply it, all in one go.
    ///
    /// Used by the headless CLI; the terminal UI splits these steps so the
    /// event loop stays responsive.
    pub async fn generate(
        &mut self,
        client: &GeneratorClient,
        toasts: &mut impl ToastSink,
    ) -> Result<(), GenerateError> {
        let Some(pending) = self.submit(toasts)? else {
            return Ok(());
        };

        let outcome = client.generate(&pending.request).await;
        let failure = outcome.as_ref().err().cloned();
        self.complete(pending.ticket, outcome, toasts);

        match failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn begin_session(&mut self) {
        self.session += 1;
    }
}
