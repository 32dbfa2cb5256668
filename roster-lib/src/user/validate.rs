use crate::user::UserPayload;
use std::collections::BTreeMap;

const MAX_FIELD_LENGTH: usize = 8;

/// Violations keyed by field name, in field order.
pub type ValidationErrors = BTreeMap<&'static str, Vec<String>>;

/// A payload that passed validation. The only accepted input to the user factory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserInput {
    pub login: String,
    pub phone: String,
    pub password: String,
}

/// Checks every field of the payload and collects all violations before reporting.
/// Create and update share the same rules.
pub fn validate(payload: &UserPayload) -> Result<UserInput, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let login = require("login", &payload.login, &mut errors);
    let phone = require("phone", &payload.phone, &mut errors);
    let password = require("password", &payload.password, &mut errors);

    if errors.is_empty() {
        Ok(UserInput {
            login,
            phone,
            password,
        })
    } else {
        Err(errors)
    }
}

fn require(field: &'static str, value: &Option<String>, errors: &mut ValidationErrors) -> String {
    let Some(value) = value.as_deref().filter(|value| !value.is_empty()) else {
        errors
            .entry(field)
            .or_default()
            .push("This value should not be blank.".to_owned());
        return String::new();
    };
    if value.chars().count() > MAX_FIELD_LENGTH {
        errors.entry(field).or_default().push(format!(
            "This value is too long. It should have {} characters or less.",
            MAX_FIELD_LENGTH
        ));
    }
    value.to_owned()
}
