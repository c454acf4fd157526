//! Selectable account roles fetched from the backend

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

/// Backend-assigned role identifier
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RoleId(pub i64);

/// Role preselected on every signup page, independent of the fetched list
pub const DEFAULT_ROLE_ID: RoleId = RoleId(1);

/// A role the user can sign up as
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleOption {
    pub id: RoleId,
    #[serde(rename = "type")]
    pub kind: String,
}

impl RoleOption {
    pub fn new(id: i64, kind: impl Into<String>) -> Self {
        Self {
            id: RoleId(id),
            kind: kind.into(),
        }
    }

    /// Display label: the role type with its first letter upper-cased
    pub fn label(&self) -> String {
        let mut chars = self.kind.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

/// Progress of the one-time role fetch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RoleLoad {
    #[default]
    Pending,
    Loaded,
    Failed(String),
}

/// Fetched role options and the user's current choice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleSelector {
    options: Vec<RoleOption>,
    selected: RoleId,
    load: RoleLoad,
}

impl RoleSelector {
    pub fn new() -> Self {
        Self {
            options: Vec::new(),
            selected: DEFAULT_ROLE_ID,
            load: RoleLoad::Pending,
        }
    }

    /// Record the result of the role fetch.
    ///
    /// The selection is left alone: it stays at [`DEFAULT_ROLE_ID`] even when
    /// the backend list does not contain that id.
    pub fn apply<E: std::fmt::Display>(&mut self, result: Result<Vec<RoleOption>, E>) {
        match result {
            Ok(options) => {
                self.options = options;
                self.load = RoleLoad::Loaded;
            }
            Err(e) => {
                self.options.clear();
                self.load = RoleLoad::Failed(e.to_string());
            }
        }
    }

    /// Select a listed role. Ids that are not in the list are ignored.
    pub fn select(&mut self, id: RoleId) -> bool {
        if self.options.iter().any(|o| o.id == id) {
            self.selected = id;
            true
        } else {
            false
        }
    }

    pub fn selected(&self) -> RoleId {
        self.selected
    }

    pub fn is_selected(&self, id: RoleId) -> bool {
        self.selected == id
    }

    pub fn options(&self) -> &[RoleOption] {
        &self.options
    }

    pub fn load(&self) -> &RoleLoad {
        &self.load
    }

    pub fn is_pending(&self) -> bool {
        self.load == RoleLoad::Pending
    }

    /// Whether the preselected default appears in the loaded list
    pub fn default_is_listed(&self) -> bool {
        self.options.iter().any(|o| o.id == DEFAULT_ROLE_ID)
    }

    /// Problem with the role fetch worth a console warning
    pub fn load_warning(&self) -> Option<String> {
        match &self.load {
            RoleLoad::Failed(reason) => Some(format!("Failed to load roles: {}", reason)),
            RoleLoad::Loaded if !self.default_is_listed() => Some(format!(
                "Default role {} is not offered by the backend",
                DEFAULT_ROLE_ID
            )),
            _ => None,
        }
    }
}

impl Default for RoleSelector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roles() -> Vec<RoleOption> {
        vec![RoleOption::new(1, "farmer"), RoleOption::new(2, "buyer")]
    }

    #[test]
    fn test_new_selector_is_pending_with_default() {
        let selector = RoleSelector::new();
        assert!(selector.is_pending());
        assert!(selector.options().is_empty());
        assert_eq!(selector.selected(), RoleId(1));
    }

    #[test]
    fn test_apply_success_keeps_default_selection() {
        let mut selector = RoleSelector::new();
        selector.apply::<String>(Ok(roles()));

        assert_eq!(selector.load(), &RoleLoad::Loaded);
        assert_eq!(selector.options().len(), 2);
        assert_eq!(selector.selected(), DEFAULT_ROLE_ID);
        assert!(selector.default_is_listed());
    }

    #[test]
    fn test_default_survives_when_backend_omits_it() {
        let mut selector = RoleSelector::new();
        selector.apply::<String>(Ok(vec![
            RoleOption::new(7, "farmer"),
            RoleOption::new(8, "buyer"),
        ]));

        assert_eq!(selector.selected(), RoleId(1));
        assert!(!selector.default_is_listed());
    }

    #[test]
    fn test_apply_failure_records_reason() {
        let mut selector = RoleSelector::new();
        selector.apply::<String>(Err("network error".to_string()));

        assert_eq!(selector.load(), &RoleLoad::Failed("network error".to_string()));
        assert!(selector.options().is_empty());
        assert_eq!(selector.selected(), DEFAULT_ROLE_ID);
    }

    #[test]
    fn test_load_warning() {
        let mut selector = RoleSelector::new();
        assert_eq!(selector.load_warning(), None);

        selector.apply::<String>(Ok(roles()));
        assert_eq!(selector.load_warning(), None);

        selector.apply::<String>(Ok(vec![RoleOption::new(7, "farmer")]));
        assert_eq!(
            selector.load_warning().as_deref(),
            Some("Default role 1 is not offered by the backend")
        );

        selector.apply::<String>(Err("network error: offline".to_string()));
        assert_eq!(
            selector.load_warning().as_deref(),
            Some("Failed to load roles: network error: offline")
        );
    }

    #[test]
    fn test_select_listed_role() {
        let mut selector = RoleSelector::new();
        selector.apply::<String>(Ok(roles()));

        assert!(selector.select(RoleId(2)));
        assert_eq!(selector.selected(), RoleId(2));
        assert!(selector.is_selected(RoleId(2)));
        assert!(!selector.is_selected(RoleId(1)));
    }

    #[test]
    fn test_select_unknown_role_is_ignored() {
        let mut selector = RoleSelector::new();
        selector.apply::<String>(Ok(roles()));

        assert!(!selector.select(RoleId(42)));
        assert_eq!(selector.selected(), RoleId(1));
    }

    #[test]
    fn test_label_capitalizes_type() {
        assert_eq!(RoleOption::new(1, "farmer").label(), "Farmer");
        assert_eq!(RoleOption::new(2, "Buyer").label(), "Buyer");
        assert_eq!(RoleOption::new(3, "").label(), "");
    }

    #[test]
    fn test_role_option_wire_format() {
        let parsed: Vec<RoleOption> =
            serde_json::from_str(r#"[{"id":1,"type":"farmer"},{"id":2,"type":"buyer"}]"#).unwrap();
        assert_eq!(parsed, roles());

        let json = serde_json::to_string(&RoleOption::new(2, "buyer")).unwrap();
        assert_eq!(json, r#"{"id":2,"type":"buyer"}"#);
    }

    #[test]
    fn test_role_id_display() {
        assert_eq!(RoleId(3).to_string(), "3");
        assert_eq!(RoleId::from(4), RoleId(4));
    }
}
