use super::controller::BoxEntryController;
use super::view_model::{AddBoxController, AddBoxViewModel};
use contracts::usecases::u101_add_box::QuestionStep;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use std::rc::Rc;

use crate::shared::config::FormsConfig;
use crate::shared::forms_api::HttpFormsApi;
use crate::shared::prompt::{DialogPrompter, PromptDialog};

fn question_label(step: QuestionStep) -> &'static str {
    match step.number() {
        1 => "Flavor (abbreviation)",
        2 => "Purchase date",
        3 => "Price",
        4 => "Purchase location (abbreviation)",
        5 => "Start date",
        _ => "Finish date",
    }
}

fn input_type(step: QuestionStep) -> &'static str {
    match step.number() {
        2 | 5 | 6 => "date",
        _ => "text",
    }
}

#[component]
fn QuestionPanel(
    step: QuestionStep,
    vm: AddBoxViewModel,
    controller: Rc<AddBoxController>,
) -> impl IntoView {
    let field_id = step.field_id();

    let action = if step.is_last() {
        view! {
            <button type="submit" class="btn btn-primary">
                "Submit"
            </button>
        }
        .into_any()
    } else {
        view! {
            <button
                type="button"
                class="btn btn-primary"
                on:click=move |_| vm.next_command(controller.clone(), step)
            >
                "Next"
            </button>
        }
        .into_any()
    };

    view! {
        <div
            id=step.panel_id()
            class="question"
            style=move || if vm.is_panel_visible(step) { "display: block;" } else { "display: none;" }
        >
            <label for=field_id.clone()>{question_label(step)}</label>
            <input
                type=input_type(step)
                id=field_id.clone()
                name=field_id
                prop:value=move || vm.answers.with(|a| a.get(step).to_string())
                on:input=move |ev| {
                    vm.answers.update(|a| a.set(step, event_target_value(&ev)));
                }
            />
            <span class="add-data-error-message" style="display: none;">
                "Please check this answer"
            </span>
            {action}
        </div>
    }
}

/// Мастер добавления коробки: шесть вопросов по одному на экран
#[component]
pub fn AddBoxForm(config: FormsConfig) -> impl IntoView {
    let vm = AddBoxViewModel::new();
    let prompter = DialogPrompter::new();
    let controller: Rc<AddBoxController> = Rc::new(BoxEntryController::new(
        HttpFormsApi::new(config.endpoints.clone()),
        prompter,
        config,
    ));

    let on_submit = {
        let controller = controller.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            vm.submit_command(controller.clone());
        }
    };

    let panels = QuestionStep::all()
        .map(|step| {
            view! { <QuestionPanel step=step vm=vm controller=controller.clone() /> }
        })
        .collect_view();

    view! {
        <div class="add-data-container">
            <form
                id="questions-form"
                style=move || if vm.form_visible.get() { "" } else { "display: none;" }
                on:submit=on_submit
            >
                {panels}
            </form>
            <dialog id="success-modal" prop:open=move || vm.success_open.get()>
                <p>"Box saved"</p>
            </dialog>
            <PromptDialog prompter=prompter />
        </div>
    }
}
