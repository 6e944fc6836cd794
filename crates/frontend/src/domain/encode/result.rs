//! Result element of a panel: loading text while a submission is in
//! flight, then the server's markup.

use web_sys::Element;

use crate::shared::error::ControllerResult;

pub trait ResultSink {
    /// Replace the content with plain text
    fn set_text(&self, text: &str);

    /// Replace the content with markup, unescaped
    fn set_markup(&self, html: &str);
}

impl ResultSink for Element {
    fn set_text(&self, text: &str) {
        self.set_text_content(Some(text));
    }

    fn set_markup(&self, html: &str) {
        self.set_inner_html(html);
    }
}

/// Show the loading message before the request starts.
pub fn begin<S: ResultSink>(sink: &S, loading_message: &str) {
    sink.set_text(loading_message);
}

/// Show the response body. On failure nothing is touched, so the loading
/// message stays, and the error is handed back for logging.
pub fn finish<S: ResultSink>(sink: &S, response: ControllerResult<String>) -> ControllerResult<()> {
    let html = response?;
    // Server markup is trusted and injected as-is.
    sink.set_markup(&html);
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::shared::error::ControllerError;

    #[derive(Debug, Default, PartialEq, Eq)]
    enum Content {
        #[default]
        Empty,
        Text(String),
        Markup(String),
    }

    #[derive(Default)]
    struct MemoryResult(RefCell<Content>);

    impl ResultSink for MemoryResult {
        fn set_text(&self, text: &str) {
            *self.0.borrow_mut() = Content::Text(text.to_string());
        }

        fn set_markup(&self, html: &str) {
            *self.0.borrow_mut() = Content::Markup(html.to_string());
        }
    }

    const LOADING: &str = "Loading, please wait patiently.";

    #[test]
    fn test_loading_then_response_markup() {
        let result = MemoryResult::default();

        begin(&result, LOADING);
        assert_eq!(*result.0.borrow(), Content::Text(LOADING.to_string()));

        finish(&result, Ok("<div>ok</div>".to_string())).unwrap();
        assert_eq!(*result.0.borrow(), Content::Markup("<div>ok</div>".to_string()));
    }

    #[test]
    fn test_failure_leaves_loading_message() {
        let result = MemoryResult::default();

        begin(&result, LOADING);
        let outcome = finish(&result, Err(ControllerError::NoActiveTab));

        assert!(outcome.is_err());
        assert_eq!(*result.0.borrow(), Content::Text(LOADING.to_string()));
    }

    #[test]
    fn test_last_response_wins() {
        let result = MemoryResult::default();

        begin(&result, LOADING);
        begin(&result, LOADING);
        finish(&result, Ok("<p>second</p>".to_string())).unwrap();
        finish(&result, Ok("<p>first</p>".to_string())).unwrap();

        assert_eq!(*result.0.borrow(), Content::Markup("<p>first</p>".to_string()));
    }
}
