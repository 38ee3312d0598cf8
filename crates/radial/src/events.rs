use crate::item::Label;
use std::str::FromStr;
use strum::{EnumIter, EnumString, IntoEnumIterator};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    Show,
    Select(usize),
    Center,
    Add(Label),
    Diameter(f64),
    Angle(f64),
    Navigation(bool),
    Reload,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, EnumIter, strum::Display)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
enum Verb {
    #[strum(to_string = "show", serialize = "render")]
    Show,
    #[strum(to_string = "select", serialize = "s")]
    Select,
    #[strum(to_string = "center", serialize = "back", serialize = "b")]
    Center,
    Add,
    Diameter,
    Angle,
    Nav,
    Reload,
    #[strum(to_string = "quit", serialize = "exit", serialize = "q")]
    Quit,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EventParseError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command '{0}' (expected one of: {1})")]
    Unknown(String, String),
    #[error("'{0}' needs an argument")]
    MissingArgument(String),
    #[error("Invalid argument for '{0}': {1}")]
    BadArgument(String, String),
}

fn known_verbs() -> String {
    Verb::iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn argument<'a>(verb: Verb, rest: &'a str) -> Result<&'a str, EventParseError> {
    if rest.is_empty() {
        Err(EventParseError::MissingArgument(verb.to_string()))
    } else {
        Ok(rest)
    }
}

fn number<T: FromStr>(verb: Verb, rest: &str) -> Result<T, EventParseError> {
    let raw = argument(verb, rest)?;
    raw.parse()
        .map_err(|_| EventParseError::BadArgument(verb.to_string(), raw.to_string()))
}

impl FromStr for AppEvent {
    type Err = EventParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (head, rest) = line
            .split_once(char::is_whitespace)
            .map(|(h, r)| (h, r.trim()))
            .unwrap_or((line, ""));

        if head.is_empty() {
            return Err(EventParseError::Empty);
        }
        let verb = Verb::from_str(head)
            .map_err(|_| EventParseError::Unknown(head.to_string(), known_verbs()))?;

        Ok(match verb {
            Verb::Show => Self::Show,
            Verb::Select => Self::Select(number(verb, rest)?),
            Verb::Center => Self::Center,
            Verb::Add => Self::Add(Label::new(argument(verb, rest)?)),
            Verb::Diameter => Self::Diameter(number(verb, rest)?),
            Verb::Angle => Self::Angle(number(verb, rest)?),
            Verb::Nav => match argument(verb, rest)?.to_ascii_lowercase().as_str() {
                "on" | "true" | "1" => Self::Navigation(true),
                "off" | "false" | "0" => Self::Navigation(false),
                other => {
                    return Err(EventParseError::BadArgument(
                        verb.to_string(),
                        other.to_string(),
                    ));
                }
            },
            Verb::Reload => Self::Reload,
            Verb::Quit => Self::Quit,
        })
    }
}
