//! Error Types

use thiserror::Error;

/// Failure while talking to the listing API
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Failure while building or delivering the spreadsheet
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("workbook error: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),
    #[error("browser error: {0}")]
    Browser(String),
}

impl From<wasm_bindgen::JsValue> for ExportError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        ExportError::Browser(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
