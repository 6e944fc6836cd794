use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failure of a controller step.
///
/// Callers never branch on the variant: every failure ends in a single
/// `log::error!` and the page is left as it is.
#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("element not found: {0}")]
    MissingElement(String),

    #[error("no active tab")]
    NoActiveTab,

    #[error("browser call failed: {0}")]
    Js(String),

    #[error("request failed: {0}")]
    Request(#[from] gloo_net::Error),
}

impl From<JsValue> for ControllerError {
    fn from(value: JsValue) -> Self {
        ControllerError::Js(format!("{:?}", value))
    }
}

pub type ControllerResult<T> = Result<T, ControllerError>;

/// Log a failed step the way every controller does
pub fn report(context: &str, err: &ControllerError) {
    log::error!("{}: {}", context, err);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            ControllerError::MissingElement("#panel_preview #result".into()).to_string(),
            "element not found: #panel_preview #result"
        );
        assert_eq!(ControllerError::NoActiveTab.to_string(), "no active tab");
    }
}
