//! The request/response seam between a [`Session`][crate::Session] and the
//! service.

use reqwest::blocking::Client;
use serde_json::Value;

use crate::{ClientConfig, TransportError};

/// One JSON request in, one raw reply body out.
///
/// A `Transport` knows nothing about the simulation: it does not decode the
/// body and does not retry.  Both are the session's job.
pub trait Transport {
    fn post(&mut self, body: &Value) -> Result<String, TransportError>;
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn post(&mut self, body: &Value) -> Result<String, TransportError> {
        (**self).post(body)
    }
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn post(&mut self, body: &Value) -> Result<String, TransportError> {
        (**self).post(body)
    }
}

// ── HttpTransport ─────────────────────────────────────────────────────────────

/// Blocking HTTP transport.  Every call is a `POST` of the JSON body to the
/// configured URL.
pub struct HttpTransport {
    client: Client,
    url:    String,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, url: config.api_url.clone() })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Transport for HttpTransport {
    fn post(&mut self, body: &Value) -> Result<String, TransportError> {
        let response = self.client.post(&self.url).json(body).send()?;
        let status = response.status();
        let text = response.text()?;

        // The service reports semantic problems inside a JSON body, so only
        // server-side failures are treated as transport errors here.  Any
        // other status is handed to the decoder, which rejects non-state
        // bodies as protocol errors.
        if status.is_server_error() {
            return Err(TransportError::Status { status: status.as_u16(), body: text });
        }
        Ok(text)
    }
}
