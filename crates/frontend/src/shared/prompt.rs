//! Запрос текста у пользователя посреди асинхронного сценария.
//!
//! The wizard has to ask for the full name of an unknown abbreviation
//! between two network calls. [`Prompter::ask`] suspends the calling task
//! until the user answers instead of blocking the page.

use async_trait::async_trait;
use futures::channel::oneshot;
use leptos::prelude::*;
use thaw::*;

#[async_trait(?Send)]
pub trait Prompter {
    /// `None` when the user dismissed the prompt
    async fn ask(&self, message: &str) -> Option<String>;
}

/// [`Prompter`] backed by a [`PromptDialog`]
#[derive(Clone, Copy)]
pub struct DialogPrompter {
    pub open: RwSignal<bool>,
    pub message: RwSignal<String>,
    pub answer: RwSignal<String>,
    pending: StoredValue<Option<oneshot::Sender<Option<String>>>>,
}

impl DialogPrompter {
    pub fn new() -> Self {
        Self {
            open: RwSignal::new(false),
            message: RwSignal::new(String::new()),
            answer: RwSignal::new(String::new()),
            pending: StoredValue::new(None),
        }
    }

    /// Close the dialog and wake the waiting task, if any
    pub fn resolve(&self, answer: Option<String>) {
        let mut sender = None;
        self.pending.update_value(|slot| sender = slot.take());
        if self.open.get_untracked() {
            self.open.set(false);
        }
        if let Some(tx) = sender {
            // receiver gone means the asking task was dropped
            let _ = tx.send(answer);
        }
    }
}

impl Default for DialogPrompter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl Prompter for DialogPrompter {
    async fn ask(&self, message: &str) -> Option<String> {
        let (tx, rx) = oneshot::channel();
        // Replacing an unanswered sender cancels the earlier prompt.
        self.pending.set_value(Some(tx));
        self.message.set(message.to_string());
        self.answer.set(String::new());
        self.open.set(true);
        rx.await.ok().flatten()
    }
}

/// Modal text prompt driven by a [`DialogPrompter`]
#[component]
pub fn PromptDialog(prompter: DialogPrompter) -> impl IntoView {
    // Closing by overlay click or Escape counts as cancel
    Effect::new(move |_| {
        if !prompter.open.get() {
            prompter.resolve(None);
        }
    });

    let handle_cancel = move |_| prompter.resolve(None);
    let handle_confirm = move |_| prompter.resolve(Some(prompter.answer.get_untracked()));

    view! {
        <Dialog open=prompter.open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>{move || prompter.message.get()}</DialogTitle>
                    <DialogContent>
                        <Input value=prompter.answer placeholder="Full name" />
                    </DialogContent>
                    <DialogActions>
                        <Button appearance=ButtonAppearance::Secondary on_click=handle_cancel>
                            "Cancel"
                        </Button>
                        <Button appearance=ButtonAppearance::Primary on_click=handle_confirm>
                            "OK"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
