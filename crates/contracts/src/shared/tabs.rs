use std::fmt;

use serde::{Deserialize, Serialize};

/// Id of a tab panel, as named by a header's `data-target`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabId(String);

impl TabId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TabId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Which tab header is active.
///
/// Headers are kept in document order, each with the panel it targets.
/// Selection is by header position, so two headers sharing a target are
/// still told apart: only the clicked one becomes active.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabSelection {
    headers: Vec<TabId>,
    active: Option<usize>,
}

/// Desired DOM state: one flag per header and per panel, in the order given
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabProjection {
    pub headers: Vec<bool>,
    pub panels: Vec<bool>,
}

impl TabSelection {
    /// Builds the selection from markup. `active` is a header position; one
    /// out of range leaves nothing selected.
    pub fn from_markup(headers: impl IntoIterator<Item = TabId>, active: Option<usize>) -> Self {
        let headers: Vec<TabId> = headers.into_iter().collect();
        let active = active.filter(|&i| i < headers.len());
        Self { headers, active }
    }

    pub fn headers(&self) -> &[TabId] {
        &self.headers
    }

    /// Panel targeted by the active header
    pub fn active(&self) -> Option<&TabId> {
        self.active.and_then(|i| self.headers.get(i))
    }

    /// Replace the header list with what the markup holds now. The active
    /// position survives when it still targets the same panel.
    pub fn sync_headers(&mut self, headers: Vec<TabId>) {
        let keep = self
            .active
            .filter(|&i| headers.get(i) == self.headers.get(i));
        self.headers = headers;
        self.active = keep;
    }

    /// Activate the header at `index`; `false` when there is no such header.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.headers.len() {
            return false;
        }
        self.active = Some(index);
        true
    }

    /// Exactly the active header is marked; exactly the panels whose id
    /// equals the active target are shown. Nothing is marked or shown
    /// without a selection.
    pub fn projection<'a>(&self, panel_ids: impl IntoIterator<Item = &'a str>) -> TabProjection {
        let target = self.active().map(TabId::as_str);
        TabProjection {
            headers: (0..self.headers.len())
                .map(|i| Some(i) == self.active)
                .collect(),
            panels: panel_ids
                .into_iter()
                .map(|id| Some(id) == target)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_tabs() -> TabSelection {
        TabSelection::from_markup([TabId::from("A"), TabId::from("B")], Some(0))
    }

    #[test]
    fn test_initial_state_follows_markup() {
        assert_eq!(two_tabs().active(), Some(&TabId::from("A")));

        let none = TabSelection::from_markup([TabId::from("A")], None);
        assert_eq!(none.active(), None);

        let out_of_range = TabSelection::from_markup([TabId::from("A")], Some(3));
        assert_eq!(out_of_range.active(), None);
    }

    #[test]
    fn test_click_b_switches_from_a() {
        let mut selection = two_tabs();
        assert!(selection.select(1));

        let projection = selection.projection(["A", "B"]);
        assert_eq!(projection.headers, vec![false, true]);
        assert_eq!(projection.panels, vec![false, true]);
        assert_eq!(selection.active(), Some(&TabId::from("B")));
    }

    #[test]
    fn test_exactly_one_header_and_panel_for_every_pair() {
        let ids = ["p1", "p2", "p3", "p4"];
        let mut selection = TabSelection::from_markup(ids.iter().map(|&id| TabId::from(id)), None);

        for (index, target) in ids.iter().enumerate() {
            assert!(selection.select(index));
            let projection = selection.projection(ids);

            assert_eq!(projection.headers.iter().filter(|&&on| on).count(), 1);
            assert!(projection.headers[index]);
            let shown: Vec<&str> = ids
                .iter()
                .zip(&projection.panels)
                .filter(|(_, &on)| on)
                .map(|(id, _)| *id)
                .collect();
            assert_eq!(shown, vec![*target]);
        }
    }

    #[test]
    fn test_shared_target_marks_only_clicked_header() {
        let mut selection = TabSelection::from_markup(
            [TabId::from("A"), TabId::from("B"), TabId::from("B")],
            Some(0),
        );
        assert!(selection.select(2));

        let projection = selection.projection(["A", "B"]);
        assert_eq!(projection.headers, vec![false, false, true]);
        assert_eq!(projection.panels, vec![false, true]);
    }

    #[test]
    fn test_nothing_projected_without_selection() {
        let selection = TabSelection::from_markup([TabId::from("A")], None);
        let projection = selection.projection(["A"]);
        assert_eq!(projection.headers, vec![false]);
        assert_eq!(projection.panels, vec![false]);
    }

    #[test]
    fn test_select_out_of_range_is_ignored() {
        let mut selection = two_tabs();
        assert!(!selection.select(5));
        assert_eq!(selection.active(), Some(&TabId::from("A")));
    }

    #[test]
    fn test_sync_headers() {
        let mut selection = two_tabs();
        selection.sync_headers(vec![TabId::from("A"), TabId::from("B"), TabId::from("C")]);
        assert_eq!(selection.active(), Some(&TabId::from("A")));
        assert!(selection.select(2));

        selection.sync_headers(vec![TabId::from("A")]);
        assert_eq!(selection.active(), None);
    }
}
