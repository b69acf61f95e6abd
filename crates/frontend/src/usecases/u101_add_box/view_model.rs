use super::controller::{Advance, BoxEntryController, BoxFormView};
use contracts::usecases::u101_add_box::{BoxAnswers, QuestionStep, QUESTION_COUNT};
use leptos::prelude::*;
use std::rc::Rc;

use crate::shared::forms_api::HttpFormsApi;
use crate::shared::navigation;
use crate::shared::prompt::DialogPrompter;

pub type AddBoxController = BoxEntryController<HttpFormsApi, DialogPrompter>;

/// ViewModel формы добавления коробки
#[derive(Clone, Copy)]
pub struct AddBoxViewModel {
    pub answers: RwSignal<BoxAnswers>,
    /// Visibility of the `question1`..`question6` panels
    pub panels: RwSignal<[bool; QUESTION_COUNT as usize]>,
    pub form_visible: RwSignal<bool>,
    pub success_open: RwSignal<bool>,
}

impl AddBoxViewModel {
    pub fn new() -> Self {
        let mut panels = [false; QUESTION_COUNT as usize];
        panels[QuestionStep::FIRST.index()] = true;
        Self {
            answers: RwSignal::new(BoxAnswers::default()),
            panels: RwSignal::new(panels),
            form_visible: RwSignal::new(true),
            success_open: RwSignal::new(false),
        }
    }

    pub fn is_panel_visible(&self, step: QuestionStep) -> bool {
        self.panels.with(|p| p[step.index()])
    }

    /// "Next" button of a question panel
    pub fn next_command(&self, controller: Rc<AddBoxController>, step: QuestionStep) {
        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            if controller.advance_if_valid(&vm, step).await == Advance::Rejected {
                log::debug!("Question {} did not pass validation", step);
            }
        });
    }

    /// Form submit
    pub fn submit_command(&self, controller: Rc<AddBoxController>) {
        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            // failures are already logged by the controller
            let _ = controller.submit_all(&vm).await;
        });
    }
}

impl Default for AddBoxViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl BoxFormView for AddBoxViewModel {
    fn answer(&self, step: QuestionStep) -> String {
        self.answers.with_untracked(|a| a.get(step).to_string())
    }

    fn show_question(&self, step: QuestionStep) {
        self.panels.update(|p| p[step.index()] = true);
    }

    fn hide_question(&self, step: QuestionStep) {
        self.panels.update(|p| p[step.index()] = false);
    }

    fn hide_form(&self) {
        self.form_visible.set(false);
    }

    fn open_success(&self) {
        self.success_open.set(true);
    }

    fn close_success_and_redirect(&self, delay_ms: u32, path: &str) {
        let success_open = self.success_open;
        navigation::redirect_after(delay_ms, path.to_string(), move || {
            success_open.set(false)
        });
    }
}
