use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use validator::{Validate, ValidationError};

use crate::format;
use crate::models::common::{
    blank_as_none, null_as_default, number_or_zero, string_or_number, whole_number,
};

/// A saved employee as returned by `GET /api/employees`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    /// Usually whole, but the form accepts fractions and the server echoes
    /// them back.
    #[serde(
        default,
        deserialize_with = "number_or_zero::deserialize",
        serialize_with = "whole_number::serialize"
    )]
    pub employee_number: f64,
    #[serde(default, deserialize_with = "null_as_default::deserialize")]
    pub first_name: String,
    #[serde(default, deserialize_with = "null_as_default::deserialize")]
    pub last_name: String,
    #[serde(default, with = "blank_as_none")]
    pub salutation: Option<Salutation>,
    #[serde(default, with = "blank_as_none")]
    pub gender: Option<Gender>,
    /// Raw digits as stored server-side; grouping is a display concern.
    #[serde(default, deserialize_with = "string_or_number::deserialize")]
    pub gross_salary: String,
    #[serde(default)]
    pub profile_colour: ProfileColour,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format::full_name(&self.first_name, &self.last_name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Salutation {
    Dr,
    Mr,
    Mrs,
    Ms,
    Mx,
}

impl Salutation {
    pub const ALL: [Salutation; 5] = [
        Salutation::Dr,
        Salutation::Mr,
        Salutation::Mrs,
        Salutation::Ms,
        Salutation::Mx,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Salutation::Dr => "Dr",
            Salutation::Mr => "Mr",
            Salutation::Mrs => "Mrs",
            Salutation::Ms => "Ms",
            Salutation::Mx => "Mx",
        }
    }

    /// Gender implied by the salutation, if any. `Dr` and `Mx` imply none.
    pub fn implied_gender(&self) -> Option<Gender> {
        match self {
            Salutation::Mr => Some(Gender::Male),
            Salutation::Mrs | Salutation::Ms => Some(Gender::Female),
            Salutation::Dr | Salutation::Mx => None,
        }
    }
}

impl fmt::Display for Salutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Salutation {
    type Err = UnknownChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Salutation::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| UnknownChoice::new("salutation", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Unspecified,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Unspecified => "unspecified",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = UnknownChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "unspecified" => Ok(Gender::Unspecified),
            other => Err(UnknownChoice::new("gender", other)),
        }
    }
}

/// UI-only colour tag. Tokens outside the four known choices are kept
/// verbatim so the table can still show them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ProfileColour {
    Green,
    Blue,
    Red,
    #[default]
    None,
    Other(String),
}

impl ProfileColour {
    pub fn as_str(&self) -> &str {
        match self {
            ProfileColour::Green => "green",
            ProfileColour::Blue => "blue",
            ProfileColour::Red => "red",
            ProfileColour::None => "none",
            ProfileColour::Other(token) => token,
        }
    }
}

impl From<String> for ProfileColour {
    fn from(token: String) -> Self {
        match token.as_str() {
            "green" => ProfileColour::Green,
            "blue" => ProfileColour::Blue,
            "red" => ProfileColour::Red,
            "none" => ProfileColour::None,
            _ => ProfileColour::Other(token),
        }
    }
}

impl fmt::Display for ProfileColour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses one of the four selectable choices; free-form tokens are refused.
impl FromStr for ProfileColour {
    type Err = UnknownChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match ProfileColour::from(s.to_string()) {
            ProfileColour::Other(_) => Err(UnknownChoice::new("profile colour", s)),
            known => Ok(known),
        }
    }
}

impl Serialize for ProfileColour {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ProfileColour {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(raw.map(ProfileColour::from).unwrap_or_default())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} `{value}`")]
pub struct UnknownChoice {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownChoice {
    fn new(kind: &'static str, value: &str) -> Self {
        Self { kind, value: value.to_string() }
    }
}

/// Body of `POST /api/employees` and `PUT /api/employees/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePayload {
    /// Present only on updates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[validate(custom(function = "validate_person_name"))]
    pub first_name: String,
    #[validate(custom(function = "validate_person_name"))]
    pub last_name: String,
    #[serde(with = "blank_as_none")]
    pub salutation: Option<Salutation>,
    #[serde(with = "blank_as_none")]
    pub gender: Option<Gender>,
    #[serde(serialize_with = "whole_number::serialize")]
    #[validate(custom(function = "validate_employee_number"))]
    pub employee_number: f64,
    #[validate(custom(function = "validate_salary"))]
    pub gross_salary: String,
    pub profile_colour: ProfileColour,
}

fn validate_person_name(value: &str) -> Result<(), ValidationError> {
    if value.chars().all(format::is_name_char) {
        Ok(())
    } else {
        let mut err = ValidationError::new("person_name");
        err.message = Some("letters, spaces and hyphens only".into());
        Err(err)
    }
}

fn validate_salary(value: &str) -> Result<(), ValidationError> {
    if value.chars().all(|c| c.is_ascii_digit() || c == ' ') {
        Ok(())
    } else {
        let mut err = ValidationError::new("salary_digits");
        err.message = Some("digits and spaces only".into());
        Err(err)
    }
}

fn validate_employee_number(value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        let mut err = ValidationError::new("employee_number");
        err.message = Some("must be a non-negative number".into());
        Err(err)
    }
}

/// `GET /api/employees` response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeeListResponse {
    pub message: Vec<Employee>,
}

/// Response to create and update requests.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub employee_number: Option<f64>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Error body of a non-2xx response.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub error: Option<String>,
}
