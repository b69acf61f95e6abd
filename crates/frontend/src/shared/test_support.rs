//! In-memory doubles for controller tests

use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use async_trait::async_trait;
use contracts::usecases::common::SubmitFormRequest;
use contracts::usecases::u101_add_box::{
    InsertAbbreviationRequest, VerifyAbbreviationRequest, VerifyAbbreviationResponse,
};

use crate::shared::error::FormError;
use crate::shared::forms_api::FormsApi;
use crate::shared::prompt::Prompter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Verify(VerifyAbbreviationRequest),
    Insert(InsertAbbreviationRequest),
    Submit(SubmitFormRequest),
}

/// Records every request; abbreviations in `known` exist, all others don't
#[derive(Default)]
pub struct FakeApi {
    known: HashSet<String>,
    fail_verify: bool,
    fail_insert: bool,
    submit_error: Option<FormError>,
    yielding: bool,
    calls: RefCell<Vec<Call>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_known<const N: usize>(mut self, known: [&str; N]) -> Self {
        self.known.extend(known.iter().map(|s| s.to_string()));
        self
    }

    pub fn failing_verify(mut self) -> Self {
        self.fail_verify = true;
        self
    }

    pub fn failing_insert(mut self) -> Self {
        self.fail_insert = true;
        self
    }

    pub fn failing_submit(self) -> Self {
        self.failing_submit_with(FormError::Http { status: 500 })
    }

    pub fn failing_submit_with(mut self, error: FormError) -> Self {
        self.submit_error = Some(error);
        self
    }

    /// Every request suspends once before answering, like a real fetch
    pub fn yielding(mut self) -> Self {
        self.yielding = true;
        self
    }

    async fn respond(&self, call: Call) {
        self.calls.borrow_mut().push(call);
        if self.yielding {
            YieldOnce(false).await;
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }
}

#[async_trait(?Send)]
impl FormsApi for FakeApi {
    async fn verify_abbreviation(
        &self,
        request: &VerifyAbbreviationRequest,
    ) -> Result<VerifyAbbreviationResponse, FormError> {
        self.respond(Call::Verify(request.clone())).await;
        if self.fail_verify {
            return Err(FormError::Network("connection refused".to_string()));
        }
        Ok(VerifyAbbreviationResponse {
            exists: self.known.contains(&request.user_input),
        })
    }

    async fn insert_abbreviation(
        &self,
        request: &InsertAbbreviationRequest,
    ) -> Result<serde_json::Value, FormError> {
        self.respond(Call::Insert(request.clone())).await;
        if self.fail_insert {
            return Err(FormError::Http { status: 500 });
        }
        Ok(serde_json::json!({ "status": "inserted" }))
    }

    async fn submit_form(&self, request: &SubmitFormRequest) -> Result<(), FormError> {
        self.respond(Call::Submit(request.clone())).await;
        match &self.submit_error {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

/// Pending on the first poll, ready on the second
struct YieldOnce(bool);

impl Future for YieldOnce {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.0 {
            return Poll::Ready(());
        }
        self.0 = true;
        cx.waker().wake_by_ref();
        Poll::Pending
    }
}

/// Answers every prompt with the same reply
pub struct FakePrompter {
    reply: Option<String>,
    asked: Cell<usize>,
}

impl FakePrompter {
    pub fn answering(reply: Option<&str>) -> Self {
        Self {
            reply: reply.map(str::to_string),
            asked: Cell::new(0),
        }
    }

    pub fn asked(&self) -> usize {
        self.asked.get()
    }
}

#[async_trait(?Send)]
impl Prompter for FakePrompter {
    async fn ask(&self, _message: &str) -> Option<String> {
        self.asked.set(self.asked.get() + 1);
        self.reply.clone()
    }
}
