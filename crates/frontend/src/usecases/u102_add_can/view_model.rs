use super::controller::{CanEntryController, CanGridView};
use contracts::usecases::u102_add_can::{CanRow, CAN_COLUMNS, CAN_ROW_COUNT};
use leptos::prelude::*;
use std::rc::Rc;

use crate::shared::forms_api::HttpFormsApi;
use crate::shared::navigation;

pub type AddCanController = CanEntryController<HttpFormsApi>;

/// ViewModel формы ввода банок
#[derive(Clone, Copy)]
pub struct AddCanViewModel {
    pub box_id: RwSignal<String>,
    /// Data rows only; table row `n` is `grid[n - 1]`
    pub grid: RwSignal<Vec<CanRow>>,
    pub form_visible: RwSignal<bool>,
}

impl AddCanViewModel {
    pub fn new() -> Self {
        Self {
            box_id: RwSignal::new(String::new()),
            grid: RwSignal::new(vec![vec![String::new(); CAN_COLUMNS.len()]; CAN_ROW_COUNT]),
            form_visible: RwSignal::new(true),
        }
    }

    pub fn cell(&self, row: usize, column: usize) -> String {
        self.grid.with(|g| {
            g.get(row)
                .and_then(|r| r.get(column))
                .cloned()
                .unwrap_or_default()
        })
    }

    pub fn set_cell(&self, row: usize, column: usize, value: String) {
        self.grid.update(|g| {
            if let Some(cell) = g.get_mut(row).and_then(|r| r.get_mut(column)) {
                *cell = value;
            }
        });
    }

    pub fn submit_command(&self, controller: Rc<AddCanController>) {
        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            let _ = controller.on_submit(&vm).await;
        });
    }
}

impl Default for AddCanViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl CanGridView for AddCanViewModel {
    fn box_id(&self) -> String {
        self.box_id.get_untracked()
    }

    fn row_values(&self, row: usize) -> Option<CanRow> {
        let index = row.checked_sub(1)?;
        self.grid.with_untracked(|g| g.get(index).cloned())
    }

    fn hide_form(&self) {
        self.form_visible.set(false);
    }

    fn redirect_after(&self, delay_ms: u32, path: &str) {
        navigation::redirect_after(delay_ms, path.to_string(), || {});
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_rows_map_to_grid() {
        let owner = Owner::new();
        owner.with(|| {
            let vm = AddCanViewModel::new();
            vm.set_cell(0, 0, "first".to_string());
            vm.set_cell(CAN_ROW_COUNT - 1, CAN_COLUMNS.len() - 1, "last".to_string());

            // row 0 is the header
            assert_eq!(vm.row_values(0), None);
            assert_eq!(vm.row_values(1).unwrap()[0], "first");
            let last = vm.row_values(CAN_ROW_COUNT).unwrap();
            assert_eq!(last.len(), CAN_COLUMNS.len());
            assert_eq!(last[CAN_COLUMNS.len() - 1], "last");
            assert_eq!(vm.row_values(CAN_ROW_COUNT + 1), None);
        });
    }

    #[test]
    fn test_set_cell_out_of_bounds_is_ignored() {
        let owner = Owner::new();
        owner.with(|| {
            let vm = AddCanViewModel::new();
            vm.set_cell(CAN_ROW_COUNT, 0, "x".to_string());
            vm.set_cell(0, CAN_COLUMNS.len(), "x".to_string());

            assert_eq!(vm.grid.get_untracked().len(), CAN_ROW_COUNT);
            assert!(vm
                .grid
                .get_untracked()
                .iter()
                .all(|row| row.len() == CAN_COLUMNS.len() && row.iter().all(String::is_empty)));
            assert_eq!(vm.cell(CAN_ROW_COUNT, 0), "");
        });
    }
}
