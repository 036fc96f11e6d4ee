use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Name of a question topic, matching the stem of its pool file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TopicName(String);

impl TopicName {
    /// Create a topic name from a raw string.
    ///
    /// # Errors
    ///
    /// Returns `TopicNameError::Empty` if the name is blank.
    pub fn new(name: impl Into<String>) -> Result<Self, TopicNameError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(TopicNameError::Empty);
        }
        Ok(Self(name))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Human-readable title: first letter upper-cased, camelCase humps
    /// split with spaces (`"solarSystem"` becomes `"Solar System"`).
    #[must_use]
    pub fn display_title(&self) -> String {
        let mut title = String::with_capacity(self.0.len() + 4);
        for (i, ch) in self.0.chars().enumerate() {
            if i == 0 {
                title.extend(ch.to_uppercase());
            } else if ch.is_uppercase() {
                title.push(' ');
                title.push(ch);
            } else {
                title.push(ch);
            }
        }
        title
    }
}

impl fmt::Display for TopicName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TopicName {
    type Err = TopicNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TopicNameError {
    #[error("topic name is empty")]
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_name_round_trips() {
        let topic: TopicName = "history".parse().unwrap();
        assert_eq!(topic.as_str(), "history");
        assert_eq!(topic.to_string(), "history");
    }

    #[test]
    fn test_blank_topic_name_is_rejected() {
        assert!(matches!(
            TopicName::new("  "),
            Err(TopicNameError::Empty)
        ));
    }

    #[test]
    fn test_display_title_capitalizes() {
        let topic = TopicName::new("history").unwrap();
        assert_eq!(topic.display_title(), "History");
    }

    #[test]
    fn test_display_title_splits_camel_case() {
        let topic = TopicName::new("solarSystem").unwrap();
        assert_eq!(topic.display_title(), "Solar System");
    }
}
