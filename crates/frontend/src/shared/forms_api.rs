//! HTTP-клиент эндпоинтов форм
//!
//! Controllers talk to the backend only through [`FormsApi`], so they can
//! be driven by an in-memory double in tests.

use async_trait::async_trait;
use contracts::usecases::common::SubmitFormRequest;
use contracts::usecases::u101_add_box::{
    InsertAbbreviationRequest, VerifyAbbreviationRequest, VerifyAbbreviationResponse,
};
use gloo_net::http::{Request, Response};
use serde::Serialize;

use crate::shared::api_utils::api_url;
use crate::shared::config::Endpoints;
use crate::shared::error::FormError;

#[async_trait(?Send)]
pub trait FormsApi {
    /// Проверить, есть ли аббревиатура в справочнике
    async fn verify_abbreviation(
        &self,
        request: &VerifyAbbreviationRequest,
    ) -> Result<VerifyAbbreviationResponse, FormError>;

    /// Добавить аббревиатуру. The status object is backend-defined and
    /// only ever logged.
    async fn insert_abbreviation(
        &self,
        request: &InsertAbbreviationRequest,
    ) -> Result<serde_json::Value, FormError>;

    /// Submit a finished form; only the HTTP status matters
    async fn submit_form(&self, request: &SubmitFormRequest) -> Result<(), FormError>;
}

/// [`FormsApi`] over `fetch`
#[derive(Debug, Clone)]
pub struct HttpFormsApi {
    endpoints: Endpoints,
}

impl HttpFormsApi {
    pub fn new(endpoints: Endpoints) -> Self {
        Self { endpoints }
    }

    async fn post<B: Serialize + ?Sized>(path: &str, body: &B) -> Result<Response, FormError> {
        let response = Request::post(&api_url(path))
            .json(body)
            .map_err(|e| FormError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| FormError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(FormError::Http {
                status: response.status(),
            });
        }

        Ok(response)
    }
}

#[async_trait(?Send)]
impl FormsApi for HttpFormsApi {
    async fn verify_abbreviation(
        &self,
        request: &VerifyAbbreviationRequest,
    ) -> Result<VerifyAbbreviationResponse, FormError> {
        Self::post(&self.endpoints.verify_abbreviation, request)
            .await?
            .json::<VerifyAbbreviationResponse>()
            .await
            .map_err(|e| FormError::Decode(e.to_string()))
    }

    async fn insert_abbreviation(
        &self,
        request: &InsertAbbreviationRequest,
    ) -> Result<serde_json::Value, FormError> {
        Self::post(&self.endpoints.insert_abbreviation, request)
            .await?
            .json::<serde_json::Value>()
            .await
            .map_err(|e| FormError::Decode(e.to_string()))
    }

    async fn submit_form(&self, request: &SubmitFormRequest) -> Result<(), FormError> {
        let response = Self::post(&self.endpoints.submit_form, request).await?;
        log::debug!("{} form accepted: HTTP {}", request.data_type(), response.status());
        Ok(())
    }
}
