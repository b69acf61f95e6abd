use std::cell::Cell;

use contracts::usecases::common::SubmitFormRequest;
use contracts::usecases::u101_add_box::{
    BoxAnswers, InsertAbbreviationRequest, QuestionStep, VerifyAbbreviationRequest,
};

use crate::shared::config::FormsConfig;
use crate::shared::error::FormError;
use crate::shared::forms_api::FormsApi;
use crate::shared::prompt::Prompter;

/// Scoped handle to the box form the controller drives
pub trait BoxFormView {
    /// Current value of field `q{step}`
    fn answer(&self, step: QuestionStep) -> String;

    fn answers(&self) -> BoxAnswers {
        let mut answers = BoxAnswers::default();
        for step in QuestionStep::all() {
            answers.set(step, self.answer(step));
        }
        answers
    }

    fn show_question(&self, step: QuestionStep);
    fn hide_question(&self, step: QuestionStep);
    fn hide_form(&self);
    fn open_success(&self);
    fn close_success_and_redirect(&self, delay_ms: u32, path: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardState {
    Question(QuestionStep),
    /// Lookup, prompt or insert for this step still pending
    Validating(QuestionStep),
    /// `/submit_form` still pending
    Submitting,
    Submitted,
}

/// Результат попытки перейти к следующему вопросу
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Panels flipped, `step` is now shown
    Advanced(QuestionStep),
    /// Last question passed validation; only submit moves on from here
    Ready,
    /// Validation failed, the step is not the current one, or a previous
    /// trigger is still in flight
    Rejected,
}

/// Контроллер мастера добавления коробки.
///
/// Linear: question 1 through 6, then submitted. No going back, no skipping.
pub struct BoxEntryController<A, P> {
    api: A,
    prompter: P,
    config: FormsConfig,
    state: Cell<WizardState>,
}

impl<A: FormsApi, P: Prompter> BoxEntryController<A, P> {
    pub fn new(api: A, prompter: P, config: FormsConfig) -> Self {
        Self {
            api,
            prompter,
            config,
            state: Cell::new(WizardState::Question(QuestionStep::FIRST)),
        }
    }

    pub fn state(&self) -> WizardState {
        self.state.get()
    }

    /// Validate the answer of `step`.
    ///
    /// Only the abbreviation fields are checked, and an empty one passes
    /// without a lookup. Date and price checks do not exist.
    pub async fn validate(&self, view: &impl BoxFormView, step: QuestionStep) -> bool {
        if !step.is_abbreviation_bearing() {
            return true;
        }
        if view.answer(step).trim().is_empty() {
            log::debug!("Question {} left empty, skipping abbreviation lookup", step);
            return true;
        }
        self.verify_abbreviation(view, step).await
    }

    /// Look the answer of `step` up in the abbreviation table, asking the
    /// user for its full name and inserting it when it is unknown.
    ///
    /// Returns `false` only when the lookup itself failed. A failed insert
    /// is logged and does not block the wizard.
    pub async fn verify_abbreviation(&self, view: &impl BoxFormView, step: QuestionStep) -> bool {
        let user_input = view.answer(step);
        let request = VerifyAbbreviationRequest {
            user_input: user_input.clone(),
            question_number: step.number(),
        };

        let response = match self.api.verify_abbreviation(&request).await {
            Ok(response) => response,
            Err(e) => {
                log::error!("Abbreviation lookup for question {} failed: {}", step, e);
                return false;
            }
        };

        if response.exists {
            log::debug!("User input for question {} exists in the database.", step);
            return true;
        }

        let assx_name = self
            .prompter
            .ask("What name does this abbreviation stand for?")
            .await;
        let insert = InsertAbbreviationRequest {
            input: user_input,
            assx_name,
            q_num: step.number(),
        };
        match self.api.insert_abbreviation(&insert).await {
            Ok(status) => log::info!("Abbreviation {:?} inserted: {}", insert.input, status),
            Err(e) => log::warn!("Abbreviation {:?} was not inserted: {}", insert.input, e),
        }
        true
    }

    /// Validate `step` and, on success, hide its panel and show the next one
    pub async fn advance_if_valid(&self, view: &impl BoxFormView, step: QuestionStep) -> Advance {
        if self.state.get() != WizardState::Question(step) {
            log::warn!("Question {} is not the current one ({:?})", step, self.state.get());
            return Advance::Rejected;
        }

        self.state.set(WizardState::Validating(step));
        if !self.validate(view, step).await {
            self.state.set(WizardState::Question(step));
            return Advance::Rejected;
        }

        match step.next() {
            Some(next) => {
                view.hide_question(step);
                view.show_question(next);
                self.state.set(WizardState::Question(next));
                log::debug!("Showing question {}", next);
                Advance::Advanced(next)
            }
            None => {
                self.state.set(WizardState::Question(step));
                Advance::Ready
            }
        }
    }

    /// Submit all six answers.
    ///
    /// On success the form is hidden, the success dialog shown, and the
    /// listing page opened after a short delay. On failure the error is
    /// logged and the form stays on the last question, ready for another try.
    pub async fn submit_all(&self, view: &impl BoxFormView) -> Result<(), FormError> {
        if self.state.get() != WizardState::Question(QuestionStep::LAST) {
            log::warn!("Submit ignored in state {:?}", self.state.get());
            return Err(FormError::NotReady);
        }

        self.state.set(WizardState::Submitting);
        let request = SubmitFormRequest::Box(view.answers());
        if let Err(e) = self.api.submit_form(&request).await {
            log::error!("Error submitting the form: {}", e);
            self.state.set(WizardState::Question(QuestionStep::LAST));
            return Err(e);
        }

        view.hide_form();
        view.open_success();
        view.close_success_and_redirect(self.config.redirect_delay_ms, &self.config.listing_page);
        self.state.set(WizardState::Submitted);
        Ok(())
    }
}
