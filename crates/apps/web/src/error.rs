use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("invalid site configuration: {0}")]
    Config(#[from] serde_json::Error),
    #[error("carousel: {0}")]
    Carousel(#[from] carousel::CarouselError),
    #[error("browser call failed: {0}")]
    Js(String),
}

impl From<JsValue> for SiteError {
    fn from(value: JsValue) -> Self {
        SiteError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<SiteError> for JsValue {
    fn from(err: SiteError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

pub type SiteResult<T> = Result<T, SiteError>;
