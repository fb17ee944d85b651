//! Form data model: modes, fields, payloads and the per-field error map.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Which of the two form variants is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Login,
    Register,
}

impl Mode {
    /// Fields validated in this mode
    pub fn fields(self) -> &'static [Field] {
        match self {
            Mode::Login => &[Field::Email, Field::Password],
            Mode::Register => &[Field::Name, Field::Email, Field::Address, Field::Password],
        }
    }

    pub fn has_field(self, field: Field) -> bool {
        self.fields().contains(&field)
    }

    /// The mode reached by the switch link
    pub fn other(self) -> Self {
        match self {
            Mode::Login => Mode::Register,
            Mode::Register => Mode::Login,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Login => "login",
            Mode::Register => "register",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input field identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Address,
    Password,
}

impl Field {
    /// Element id of the input, also the payload key
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Address => "address",
            Field::Password => "password",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email address",
            Field::Address => "Address",
            Field::Password => "Password",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Values entered in login mode
#[derive(Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoginPayload {
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
}

/// Values entered in register mode
#[derive(Clone, Default, PartialEq, Eq, Serialize)]
pub struct RegisterPayload {
    pub name: String,
    pub email: String,
    pub address: String,
    #[serde(skip_serializing)]
    pub password: String,
}

// Passwords never reach logs, so Debug is written by hand.
impl fmt::Debug for LoginPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginPayload")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl fmt::Debug for RegisterPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterPayload")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("address", &self.address)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl LoginPayload {
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Email => Some(&self.email),
            Field::Password => Some(&self.password),
            Field::Name | Field::Address => None,
        }
    }

    /// Writes `value` into `field`; fields login does not have are ignored
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Email => self.email = value,
            Field::Password => self.password = value,
            Field::Name | Field::Address => {}
        }
    }
}

impl RegisterPayload {
    pub fn get(&self, field: Field) -> Option<&str> {
        Some(match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Address => &self.address,
            Field::Password => &self.password,
        })
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Address => self.address = value,
            Field::Password => self.password = value,
        }
    }
}

/// Borrowed view of the payload belonging to one mode
#[derive(Debug, Clone, Copy)]
pub enum FormData<'a> {
    Login(&'a LoginPayload),
    Register(&'a RegisterPayload),
}

impl FormData<'_> {
    pub fn mode(&self) -> Mode {
        match self {
            FormData::Login(_) => Mode::Login,
            FormData::Register(_) => Mode::Register,
        }
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        match self {
            FormData::Login(p) => p.get(field),
            FormData::Register(p) => p.get(field),
        }
    }
}

/// Field-keyed validation messages. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorMap(BTreeMap<Field, String>);

impl ErrorMap {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn clear_field(&mut self, field: Field) {
        self.0.remove(&field);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl FromIterator<(Field, String)> for ErrorMap {
    fn from_iter<I: IntoIterator<Item = (Field, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
