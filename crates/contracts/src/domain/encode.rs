//! Encode page payload
//!
//! The form's own fields travel as-is; the controller appends exactly one
//! `save_path` and one `selected` to every submission.

use std::fmt;
use std::str::FromStr;

use crate::shared::artifact::ArtifactId;
use crate::shared::tabs::TabId;

pub const SAVE_PATH_FIELD: &str = "save_path";
pub const SELECTED_FIELD: &str = "selected";

// ============================================================================
// Panels
// ============================================================================

/// Panels the backend knows how to process
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodePanel {
    /// Noise preview; form field `intensity` (float)
    Preview,
    /// Hide the image inside a disguise; form field `disguise` (file)
    Steganography,
    /// Any other panel present in the markup
    Other(String),
}

impl EncodePanel {
    pub fn as_str(&self) -> &str {
        match self {
            EncodePanel::Preview => "panel_preview",
            EncodePanel::Steganography => "panel_steganography",
            EncodePanel::Other(id) => id,
        }
    }
}

impl fmt::Display for EncodePanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EncodePanel {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "panel_preview" => EncodePanel::Preview,
            "panel_steganography" => EncodePanel::Steganography,
            other => EncodePanel::Other(other.to_string()),
        })
    }
}

impl From<&TabId> for EncodePanel {
    fn from(tab: &TabId) -> Self {
        match tab.as_str().parse() {
            Ok(panel) => panel,
            Err(never) => match never {},
        }
    }
}

// ============================================================================
// Payload
// ============================================================================

/// Anything that accepts string form fields, e.g. the browser `FormData`
pub trait PayloadSink {
    type Error;

    fn append_field(&mut self, name: &str, value: &str) -> Result<(), Self::Error>;
}

/// Fields injected into one encode submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeSubmission {
    pub save_path: ArtifactId,
    pub selected: TabId,
}

impl EncodeSubmission {
    /// New submission for the active tab with a freshly generated artifact id.
    pub fn for_tab(selected: TabId) -> Self {
        Self {
            save_path: ArtifactId::new_v4(),
            selected,
        }
    }

    pub fn panel(&self) -> EncodePanel {
        EncodePanel::from(&self.selected)
    }

    /// Appends `save_path` then `selected`, once each.
    pub fn apply_to<S: PayloadSink>(&self, sink: &mut S) -> Result<(), S::Error> {
        sink.append_field(SAVE_PATH_FIELD, &self.save_path.file_name())?;
        sink.append_field(SELECTED_FIELD, self.selected.as_str())?;
        Ok(())
    }

    /// Selector of the result element scoped to the submitted panel
    pub fn result_selector(&self, result_id: &str) -> String {
        format!("#{} #{}", self.selected, result_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// In-memory ordered key/value payload
    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    struct FormPayload {
        fields: Vec<(String, String)>,
    }

    impl FormPayload {
        fn with_fields<K, V>(fields: impl IntoIterator<Item = (K, V)>) -> Self
        where
            K: Into<String>,
            V: Into<String>,
        {
            Self {
                fields: fields
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            }
        }

        fn fields(&self) -> &[(String, String)] {
            &self.fields
        }

        fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
            self.fields
                .iter()
                .filter(move |(k, _)| k == name)
                .map(|(_, v)| v.as_str())
        }
    }

    impl PayloadSink for FormPayload {
        type Error = std::convert::Infallible;

        fn append_field(&mut self, name: &str, value: &str) -> Result<(), Self::Error> {
            self.fields.push((name.to_string(), value.to_string()));
            Ok(())
        }
    }

    #[test]
    fn test_apply_appends_exactly_one_of_each() {
        let mut payload = FormPayload::with_fields([("intensity", "0.5")]);
        let submission = EncodeSubmission::for_tab(TabId::from("panel_preview"));

        submission.apply_to(&mut payload).unwrap();

        assert_eq!(payload.fields().len(), 3);
        assert_eq!(payload.fields()[0], ("intensity".into(), "0.5".into()));

        let save_paths: Vec<_> = payload.get_all(SAVE_PATH_FIELD).collect();
        assert_eq!(save_paths.len(), 1);
        assert!(ArtifactId::parse(save_paths[0]).is_ok());

        let selected: Vec<_> = payload.get_all(SELECTED_FIELD).collect();
        assert_eq!(selected, vec!["panel_preview"]);
    }

    #[test]
    fn test_each_submission_gets_a_fresh_id() {
        let tab = TabId::from("panel_preview");
        let first = EncodeSubmission::for_tab(tab.clone());
        let second = EncodeSubmission::for_tab(tab);
        assert_ne!(first.save_path, second.save_path);
    }

    #[test]
    fn test_result_selector() {
        let submission = EncodeSubmission::for_tab(TabId::from("panel_steganography"));
        assert_eq!(
            submission.result_selector("result"),
            "#panel_steganography #result"
        );
    }

    #[test]
    fn test_panels() {
        assert_eq!("panel_preview".parse::<EncodePanel>().unwrap(), EncodePanel::Preview);
        assert_eq!(
            EncodePanel::from(&TabId::from("panel_steganography")),
            EncodePanel::Steganography
        );
        assert_eq!(
            EncodePanel::from(&TabId::from("panel_custom")),
            EncodePanel::Other("panel_custom".into())
        );
        assert_eq!(EncodePanel::Other("x".into()).as_str(), "x");
    }
}
