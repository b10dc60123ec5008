use std::fmt;

use serde::{Deserialize, Serialize};

/// Separates the key from the profile fields in a store line
pub const KEY_DELIMITER: char = ':';
/// Separates `field=value` pairs after the key
pub const FIELD_DELIMITER: char = ',';

/// A Git identity: the pair written to `user.name` and `user.email`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Identity {
    /// Git username (user.name)
    pub name: String,
    /// Git email address (user.email)
    pub email: String,
}

impl Identity {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Represents a Git user profile stored in the profiles file
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    /// Unique key the profile is switched to by
    pub key: String,
    /// Identity applied when switching
    #[serde(flatten)]
    pub identity: Identity,
}

/// Why a store line could not be read back as a profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    MissingKeyDelimiter,
    EmptyKey,
    MissingField(&'static str),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MissingKeyDelimiter => write!(f, "missing '{}' after key", KEY_DELIMITER),
            ParseError::EmptyKey => write!(f, "empty key"),
            ParseError::MissingField(field) => write!(f, "missing or empty '{}' field", field),
        }
    }
}

impl Profile {
    pub fn new(key: impl Into<String>, identity: Identity) -> Self {
        Self {
            key: key.into(),
            identity,
        }
    }

    /// Parses one store line of the form `key:name=<name>,email=<email>`
    ///
    /// The line is split on the first `:`. Fields after it are `,` separated
    /// `field=value` pairs; the first `name` and `email` win and unknown
    /// fields are ignored.
    pub fn parse_line(line: &str) -> Result<Profile, ParseError> {
        let (key, fields) = line
            .split_once(KEY_DELIMITER)
            .ok_or(ParseError::MissingKeyDelimiter)?;
        if key.is_empty() {
            return Err(ParseError::EmptyKey);
        }

        let identity = parse_fields(fields)?;
        Ok(Profile::new(key, identity))
    }

    /// Formats the profile as a store line, without the trailing newline
    pub fn to_line(&self) -> String {
        format!(
            "{}{}name={}{}email={}",
            self.key, KEY_DELIMITER, self.identity.name, FIELD_DELIMITER, self.identity.email
        )
    }
}

/// Parses the `name=<v>,email=<v>` part of a store line
fn parse_fields(fields: &str) -> Result<Identity, ParseError> {
    let mut name: Option<&str> = None;
    let mut email: Option<&str> = None;

    for (field, value) in fields
        .split(FIELD_DELIMITER)
        .filter_map(|pair| pair.split_once('='))
    {
        match field.trim() {
            "name" if name.is_none() => name = Some(value),
            "email" if email.is_none() => email = Some(value),
            _ => {}
        }
    }

    // Values are kept as stored, surrounding spaces included
    let name = name
        .filter(|value| !value.is_empty())
        .ok_or(ParseError::MissingField("name"))?;
    let email = email
        .filter(|value| !value.is_empty())
        .ok_or(ParseError::MissingField("email"))?;

    Ok(Identity::new(name, email))
}
