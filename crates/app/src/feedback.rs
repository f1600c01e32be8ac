//! Feedback — the sentences a voice or text front end reads back to the user.

use serde::Serialize;

use friday_domain::command::CommandError;
use friday_domain::device::{Outcome, Transition};

pub const NOT_RECOGNIZED: &str = "Command not recognized.";
pub const TEMPERATURE_MISSING: &str = "Please specify the temperature.";

/// Sentence describing a registry transition, e.g. `"Door opened"`.
#[must_use]
pub fn describe(transition: &Transition) -> String {
    let device = display_name(&transition.device);
    match transition.outcome {
        Outcome::Applied => {
            let description = match transition.action.as_str() {
                "open" => "opened",
                "close" => "closed",
                other => other,
            };
            format!("{device} {description}")
        }
        Outcome::Ignored => format!("{device} cannot {}.", transition.action),
    }
}

/// Sentence for the full result of interpreting one utterance.
#[must_use]
pub fn reply(result: &Result<Transition, CommandError>) -> String {
    match result {
        Ok(transition) => match temperature_confirmation(transition) {
            Some(confirmation) => format!("{}. {confirmation}", describe(transition)),
            None => describe(transition),
        },
        Err(CommandError::Unrecognized | CommandError::ActionNotSpecified { .. }) => {
            NOT_RECOGNIZED.to_string()
        }
        Err(CommandError::TemperatureNotSpecified { .. }) => TEMPERATURE_MISSING.to_string(),
        Err(CommandError::UnknownDevice(err)) => {
            format!("Failed to control {}.", err.name)
        }
    }
}

/// Spoken confirmation for an applied `<digits>°C` setting.
fn temperature_confirmation(transition: &Transition) -> Option<String> {
    if transition.outcome != Outcome::Applied {
        return None;
    }
    let degrees = transition.action.strip_suffix("°C")?;
    (!degrees.is_empty() && degrees.chars().all(char::is_numeric)).then(|| {
        format!(
            "{} set to {degrees} degrees Celsius.",
            display_name(&transition.device)
        )
    })
}

/// Device name with its first letter upper-cased and the rest lower-cased.
#[must_use]
pub fn display_name(device: &str) -> String {
    let mut chars = device.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Serializable reply to one utterance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    pub reply: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<Outcome>,
}

impl From<&Result<Transition, CommandError>> for Reply {
    fn from(result: &Result<Transition, CommandError>) -> Self {
        let transition = result.as_ref().ok();
        Self {
            reply: reply(result),
            device: transition.map(|t| t.device.clone()),
            status: transition.map(|t| t.state.clone()),
            outcome: transition.map(|t| t.outcome),
        }
    }
}
