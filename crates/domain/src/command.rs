//! Command — a `(device, action)` pair extracted from one free-text utterance.
//!
//! Extraction is deterministic and substring based. An ordered list of
//! [`Matcher`]s is scanned; the first whose keyword appears anywhere in the
//! utterance decides the device, then its [`Extraction`] decides the action.
//! Utterances are expected to be lower-cased already.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{UnknownDeviceError, ValidationError};

static DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("digit run pattern compiles"));

/// One device action requested by an utterance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    pub device: String,
    pub action: String,
}

/// How a matcher turns the utterance into an action once its device matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "extract", rename_all = "snake_case")]
pub enum Extraction {
    /// The first listed action token present in the utterance.
    Action { actions: Vec<String> },
    /// The first run of digits in the utterance, suffixed with `unit`.
    Temperature {
        #[serde(default = "default_unit")]
        unit: String,
    },
}

fn default_unit() -> String {
    "°C".to_string()
}

impl Extraction {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Action { .. } => "action",
            Self::Temperature { .. } => "temperature",
        }
    }
}

/// One entry of the interpreter's priority list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matcher {
    /// Registry name of the device this matcher drives.
    pub device: String,
    /// Substrings that select this matcher.
    pub keywords: Vec<String>,
    #[serde(flatten)]
    pub extraction: Extraction,
}

impl Matcher {
    /// Matcher picking the first of `actions` found in the utterance.
    pub fn actions<K, A>(
        device: impl Into<String>,
        keywords: impl IntoIterator<Item = K>,
        actions: impl IntoIterator<Item = A>,
    ) -> Self
    where
        K: Into<String>,
        A: Into<String>,
    {
        Self {
            device: device.into(),
            keywords: keywords.into_iter().map(Into::into).collect(),
            extraction: Extraction::Action {
                actions: actions.into_iter().map(Into::into).collect(),
            },
        }
    }

    /// Matcher turning the first number in the utterance into a `°C` setting.
    pub fn temperature<K>(device: impl Into<String>, keywords: impl IntoIterator<Item = K>) -> Self
    where
        K: Into<String>,
    {
        Self {
            device: device.into(),
            keywords: keywords.into_iter().map(Into::into).collect(),
            extraction: Extraction::Temperature {
                unit: default_unit(),
            },
        }
    }

    /// Whether any keyword appears in `utterance`.
    #[must_use]
    pub fn matches(&self, utterance: &str) -> bool {
        self.keywords.iter().any(|kw| utterance.contains(kw.as_str()))
    }

    /// Extract the action for this matcher's device.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::ActionNotSpecified`] when no action token is
    /// present, or [`CommandError::TemperatureNotSpecified`] when a
    /// temperature matcher finds no digits.
    pub fn extract(&self, utterance: &str) -> Result<Command, CommandError> {
        let action = match &self.extraction {
            Extraction::Action { actions } => actions
                .iter()
                .find(|action| utterance.contains(action.as_str()))
                .cloned()
                .ok_or_else(|| CommandError::ActionNotSpecified {
                    device: self.device.clone(),
                })?,
            Extraction::Temperature { unit } => first_number(utterance)
                .map(|digits| format!("{digits}{unit}"))
                .ok_or_else(|| CommandError::TemperatureNotSpecified {
                    device: self.device.clone(),
                })?,
        };

        Ok(Command {
            device: self.device.clone(),
            action,
        })
    }

    /// Check the matcher is usable on its own (registry checks live in the app layer).
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyName`], [`ValidationError::NoKeywords`],
    /// [`ValidationError::EmptyKeyword`] or [`ValidationError::NoActionKeywords`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.device.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if self.keywords.is_empty() {
            return Err(ValidationError::NoKeywords {
                device: self.device.clone(),
            });
        }
        // an empty keyword is a substring of every utterance
        if self.keywords.iter().any(String::is_empty) {
            return Err(ValidationError::EmptyKeyword {
                device: self.device.clone(),
            });
        }
        if let Extraction::Action { actions } = &self.extraction
            && (actions.is_empty() || actions.iter().any(String::is_empty))
        {
            return Err(ValidationError::NoActionKeywords {
                device: self.device.clone(),
            });
        }
        Ok(())
    }
}

/// Run `matchers` in priority order over `utterance`.
///
/// Only the first matching entry is considered; a later matcher never gets a
/// chance even if the first one fails to extract an action.
///
/// # Errors
///
/// Returns [`CommandError::Unrecognized`] when no keyword matches, or the
/// extraction error of the first matching entry.
pub fn parse(matchers: &[Matcher], utterance: &str) -> Result<Command, CommandError> {
    matchers
        .iter()
        .find(|matcher| matcher.matches(utterance))
        .ok_or(CommandError::Unrecognized)?
        .extract(utterance)
}

/// The first contiguous run of decimal digits in `text`.
#[must_use]
pub fn first_number(text: &str) -> Option<&str> {
    DIGITS.find(text).map(|m| m.as_str())
}

/// Why an utterance did not produce an applied action.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("no device keyword recognized")]
    Unrecognized,

    #[error("no action recognized for {device:?}")]
    ActionNotSpecified { device: String },

    #[error("no temperature given for {device:?}")]
    TemperatureNotSpecified { device: String },

    #[error(transparent)]
    UnknownDevice(#[from] UnknownDeviceError),
}
