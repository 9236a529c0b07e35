//! Blocking HTTP client for `/api/item-cardapios`.

use cardapio_common::config::ClientConfig;
use cardapio_common::error::{CardapioError, Result};
use cardapio_common::types::{ItemCardapio, ItemCardapioId};
use reqwest::StatusCode;
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::ACCEPT;

use crate::api::ItemCardapioApi;

const ENTITY_KIND: &str = "item-cardapio";

/// REST implementation of [`ItemCardapioApi`].
#[derive(Debug, Clone)]
pub struct RestClient {
    http: Client,
    config: ClientConfig,
}

impl RestClient {
    /// Builds a client for the API described by `config`.
    ///
    /// Must be called outside of an async context: the blocking `reqwest`
    /// client owns its own runtime.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be constructed.
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let http = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| CardapioError::Http {
                url: config.base_url.clone(),
                message: e.to_string(),
            })?;
        Ok(Self { http, config })
    }

    /// Returns the configuration this client was built with.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn send(request: RequestBuilder, url: &str) -> Result<Response> {
        request
            .header(ACCEPT, "application/json")
            .send()
            .map_err(|e| CardapioError::Http {
                url: url.to_string(),
                message: e.to_string(),
            })
    }

    fn check_status(response: &Response, url: &str, id: Option<&ItemCardapioId>) -> Result<()> {
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            if let Some(id) = id {
                return Err(CardapioError::NotFound {
                    kind: ENTITY_KIND,
                    id: id.to_string(),
                });
            }
        }
        if !status.is_success() {
            return Err(CardapioError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(())
    }

    fn read_body(response: Response, url: &str) -> Result<Vec<u8>> {
        response
            .bytes()
            .map(|b| b.to_vec())
            .map_err(|e| CardapioError::Http {
                url: url.to_string(),
                message: format!("failed to read response body: {e}"),
            })
    }
}

impl ItemCardapioApi for RestClient {
    fn get_entity(&self, id: &ItemCardapioId) -> Result<ItemCardapio> {
        let url = self.config.entity_url(id);
        tracing::debug!(%url, "GET item-cardapio");
        let response = Self::send(self.http.get(&url), &url)?;
        Self::check_status(&response, &url, Some(id))?;
        let body = Self::read_body(response, &url)?;
        Ok(serde_json::from_slice(&body)?)
    }

    fn get_entities(&self) -> Result<Vec<ItemCardapio>> {
        let url = self.config.resource_url();
        tracing::debug!(%url, "GET item-cardapios");
        let response = Self::send(self.http.get(&url), &url)?;
        Self::check_status(&response, &url, None)?;
        let body = Self::read_body(response, &url)?;
        Ok(serde_json::from_slice(&body)?)
    }

    fn delete_entity(&self, id: &ItemCardapioId) -> Result<()> {
        let url = self.config.entity_url(id);
        tracing::debug!(%url, "DELETE item-cardapio");
        let response = Self::send(self.http.delete(&url), &url)?;
        Self::check_status(&response, &url, Some(id))
    }
}
