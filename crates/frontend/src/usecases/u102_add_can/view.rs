use super::controller::CanEntryController;
use super::view_model::{AddCanController, AddCanViewModel};
use contracts::usecases::u102_add_can::{CAN_COLUMNS, CAN_ROW_COUNT};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use std::rc::Rc;

use crate::shared::config::FormsConfig;
use crate::shared::forms_api::HttpFormsApi;

/// Форма ввода до восьми банок одной коробки
#[component]
pub fn AddCanForm(config: FormsConfig) -> impl IntoView {
    let vm = AddCanViewModel::new();
    let controller: Rc<AddCanController> = Rc::new(CanEntryController::new(
        HttpFormsApi::new(config.endpoints.clone()),
        config,
    ));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit_command(controller.clone());
    };

    let header = CAN_COLUMNS
        .iter()
        .map(|title| view! { <th>{*title}</th> })
        .collect_view();

    let rows = (0..CAN_ROW_COUNT)
        .map(|row| {
            let cells = (0..CAN_COLUMNS.len())
                .map(|column| {
                    view! {
                        <td>
                            <input
                                type="text"
                                prop:value=move || vm.cell(row, column)
                                on:input=move |ev| vm.set_cell(row, column, event_target_value(&ev))
                            />
                        </td>
                    }
                })
                .collect_view();
            view! {
                <tr>
                    <td>{format!("Can {}", row + 1)}</td>
                    {cells}
                </tr>
            }
        })
        .collect_view();

    view! {
        <div class="add-data-container">
            <form
                id="questions-form"
                style=move || if vm.form_visible.get() { "" } else { "display: none;" }
                on:submit=on_submit
            >
                <label for="q1">"Box ID"</label>
                <input
                    type="text"
                    id="q1"
                    name="q1"
                    prop:value=move || vm.box_id.get()
                    on:input=move |ev| vm.box_id.set(event_target_value(&ev))
                />
                <table id="q2">
                    <tr>
                        <th></th>
                        {header}
                    </tr>
                    {rows}
                </table>
                <button type="submit" class="btn btn-primary">
                    "Submit"
                </button>
            </form>
        </div>
    }
}
