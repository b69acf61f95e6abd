use std::cell::Cell;

use contracts::usecases::common::SubmitFormRequest;
use contracts::usecases::u102_add_can::{CanBatch, CanRow, CAN_ROW_COUNT};

use crate::shared::config::FormsConfig;
use crate::shared::error::FormError;
use crate::shared::forms_api::FormsApi;

/// Scoped handle to the can form
pub trait CanGridView {
    /// Value of the `q1` box id field
    fn box_id(&self) -> String;

    /// Input values of table row `row`, in DOM order. Row 0 is the header.
    /// `None` if the table has no such row.
    fn row_values(&self, row: usize) -> Option<CanRow>;

    fn hide_form(&self);
    fn redirect_after(&self, delay_ms: u32, path: &str);
}

/// Read the box id and table rows 1..=8 into one batch.
///
/// Always eight rows; a row missing from the table is sent empty.
pub fn collect_grid(view: &impl CanGridView) -> CanBatch {
    let can_data = (1..=CAN_ROW_COUNT)
        .map(|row| {
            view.row_values(row).unwrap_or_else(|| {
                log::warn!("Can table has no row {}", row);
                Vec::new()
            })
        })
        .collect();

    CanBatch {
        box_id: view.box_id(),
        can_data,
    }
}

/// Контроллер пакетного ввода банок
pub struct CanEntryController<A> {
    api: A,
    config: FormsConfig,
    /// Set while a POST is pending and for good once one succeeded
    locked: Cell<bool>,
}

impl<A: FormsApi> CanEntryController<A> {
    pub fn new(api: A, config: FormsConfig) -> Self {
        Self {
            api,
            config,
            locked: Cell::new(false),
        }
    }

    /// Post `batch`; on success hide the form and open the listing page.
    ///
    /// Only one submission runs at a time; a failed one may be retried.
    pub async fn submit(&self, view: &impl CanGridView, batch: CanBatch) -> Result<(), FormError> {
        if self.locked.replace(true) {
            log::warn!("Submit ignored, the batch is already being sent");
            return Err(FormError::NotReady);
        }

        let request = SubmitFormRequest::Can(batch);
        if let Err(e) = self.api.submit_form(&request).await {
            log::error!("Error submitting the form: {}", e);
            self.locked.set(false);
            return Err(e);
        }

        view.hide_form();
        view.redirect_after(self.config.redirect_delay_ms, &self.config.listing_page);
        Ok(())
    }

    /// Form submit: collect, then submit. No validation in between.
    pub async fn on_submit(&self, view: &impl CanGridView) -> Result<(), FormError> {
        let batch = collect_grid(view);
        self.submit(view, batch).await
    }
}
