//! Window blacklist.
//!
//! Rules use AND logic: every pattern a rule sets must match. A pattern that
//! is not set is ignored, but a rule must set at least one.

use regex::Regex;
use serde::Deserialize;

use super::WindowIdentity;
use crate::error::{Error, Result};
use crate::orientation::RotationState;

/// A blacklist entry as written in the configuration file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BlacklistRule {
    /// Regular expression matched against the window class.
    #[serde(default)]
    pub class: Option<String>,
    /// Regular expression matched against the window instance name.
    #[serde(default)]
    pub name: Option<String>,
    /// Orientation forced while a matching window has focus.
    #[serde(default)]
    pub rotation: RotationState,
}

struct CompiledRule {
    class: Option<Regex>,
    name: Option<Regex>,
    rotation: RotationState,
}

impl CompiledRule {
    fn matches(&self, window: &WindowIdentity) -> bool {
        let class = self.class.as_ref().map_or(true, |re| re.is_match(&window.class));
        let name = self.name.as_ref().map_or(true, |re| re.is_match(&window.name));
        class && name
    }
}

#[derive(Default)]
pub struct Blacklist {
    rules: Vec<CompiledRule>,
}

impl Blacklist {
    pub fn new(rules: Vec<BlacklistRule>) -> Result<Self> {
        let rules = rules
            .into_iter()
            .enumerate()
            .map(|(idx, rule)| {
                if rule.class.is_none() && rule.name.is_none() {
                    return Err(Error::Config(format!(
                        "blacklist rule {} needs a class or a name",
                        idx
                    )));
                }
                Ok(CompiledRule {
                    class: rule.class.as_deref().map(Regex::new).transpose()?,
                    name: rule.name.as_deref().map(Regex::new).transpose()?,
                    rotation: rule.rotation,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Blacklist { rules })
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Rotation of the first matching rule.
    pub fn forced_rotation(&self, window: &WindowIdentity) -> Option<RotationState> {
        self.rules
            .iter()
            .find(|rule| rule.matches(window))
            .map(|rule| rule.rotation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(class: Option<&str>, name: Option<&str>, rotation: RotationState) -> BlacklistRule {
        BlacklistRule {
            class: class.map(String::from),
            name: name.map(String::from),
            rotation,
        }
    }

    #[test]
    fn first_match_wins() -> Result<()> {
        let blacklist = Blacklist::new(vec![
            rule(Some("^Firefox$"), Some("^Navigator$"), RotationState::Left),
            rule(Some("^Firefox$"), None, RotationState::Normal),
        ])?;

        let navigator = WindowIdentity::new("Navigator", "Firefox");
        let dialog = WindowIdentity::new("Dialog", "Firefox");
        assert_eq!(blacklist.forced_rotation(&navigator), Some(RotationState::Left));
        assert_eq!(blacklist.forced_rotation(&dialog), Some(RotationState::Normal));
        let xterm = WindowIdentity::new("xterm", "XTerm");
        assert_eq!(blacklist.forced_rotation(&xterm), None);
        Ok(())
    }

    #[test]
    fn all_patterns_must_match() -> Result<()> {
        let blacklist = Blacklist::new(vec![rule(
            Some("Steam"),
            Some("^steam$"),
            RotationState::Normal,
        )])?;
        assert!(blacklist
            .forced_rotation(&WindowIdentity::new("steamwebhelper", "Steam"))
            .is_none());
        assert!(blacklist
            .forced_rotation(&WindowIdentity::new("steam", "Steam"))
            .is_some());
        Ok(())
    }

    #[test]
    fn rejects_empty_rules() {
        let err = Blacklist::new(vec![rule(None, None, RotationState::Normal)]);
        assert!(matches!(err, Err(Error::Config(_))));
    }

    #[test]
    fn rejects_bad_patterns() {
        let err = Blacklist::new(vec![rule(Some("(unclosed"), None, RotationState::Normal)]);
        assert!(matches!(err, Err(Error::Pattern(_))));
    }

    #[test]
    fn rotation_defaults_to_landscape() -> std::result::Result<(), serde_json::Error> {
        let parsed: BlacklistRule = serde_json::from_str(r#"{"class": "mpv"}"#)?;
        assert_eq!(parsed, rule(Some("mpv"), None, RotationState::Normal));
        Ok(())
    }
}
