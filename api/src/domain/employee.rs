//! Employee entity and creation-payload validation.
//!
//! The upstream service owns identity: `id` is always the upstream-assigned
//! UUID rendered as a string, never synthesized here. Creation payloads
//! arrive as an all-optional [`CreateEmployeeDraft`] so that missing fields
//! surface as validation violations rather than deserialization failures.

use serde::Serialize;

/// Public employee entity, constructed fresh per request from upstream data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    /// Upstream-assigned identifier in canonical UUID string form.
    pub id: String,
    /// Display name; non-empty on the wire.
    pub name: String,
    /// Salary; absent upstream means the employee is unranked.
    pub salary: Option<i64>,
    /// Age in years.
    pub age: Option<i64>,
    /// Job title.
    pub title: String,
    /// Contact email, defaulted upstream.
    pub email: Option<String>,
}

/// Raw creation payload before validation. All fields optional so the
/// validator, not serde, reports what is missing.
#[derive(Debug, Clone, Default)]
pub struct CreateEmployeeDraft {
    /// Requested display name.
    pub name: Option<String>,
    /// Requested salary.
    pub salary: Option<i64>,
    /// Requested age.
    pub age: Option<i64>,
    /// Requested job title.
    pub title: Option<String>,
}

/// Validated creation payload. Only constructed via
/// [`CreateEmployeeDraft::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateEmployeeInput {
    /// Non-blank name of at least two characters.
    pub name: String,
    /// Salary of at least 1.
    pub salary: i64,
    /// Age between 16 and 75 inclusive.
    pub age: i64,
    /// Non-blank title of at least two characters.
    pub title: String,
}

/// One field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Field path the violation applies to.
    pub field: &'static str,
    /// Human-readable constraint description.
    pub message: String,
}

impl Violation {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

const MIN_AGE: i64 = 16;
const MAX_AGE: i64 = 75;
const MIN_SALARY: i64 = 1;
const MIN_TEXT_LEN: usize = 2;

fn check_text(field: &'static str, value: Option<&str>, violations: &mut Vec<Violation>) {
    match value {
        None => violations.push(Violation::new(field, format!("{field} must not be blank"))),
        Some(text) if text.trim().is_empty() => {
            violations.push(Violation::new(field, format!("{field} must not be blank")));
        }
        Some(text) if text.chars().count() < MIN_TEXT_LEN => {
            violations.push(Violation::new(
                field,
                format!("{field} must be at least {MIN_TEXT_LEN} characters"),
            ));
        }
        Some(_) => {}
    }
}

impl CreateEmployeeDraft {
    /// Validate the whole draft, checking every field.
    ///
    /// Violations are ordered by field path (age, name, salary, title) so
    /// callers can surface the first one deterministically.
    ///
    /// # Errors
    ///
    /// Returns the non-empty list of violations when any constraint fails.
    ///
    /// # Examples
    /// ```
    /// use employee_api::domain::CreateEmployeeDraft;
    ///
    /// let draft = CreateEmployeeDraft {
    ///     name: Some("Ada".into()),
    ///     salary: Some(100_000),
    ///     age: Some(36),
    ///     title: Some("Engineer".into()),
    /// };
    /// let input = draft.validate().expect("valid draft");
    /// assert_eq!(input.name, "Ada");
    /// ```
    pub fn validate(self) -> Result<CreateEmployeeInput, Vec<Violation>> {
        let mut violations = Vec::new();

        match self.age {
            None => violations.push(Violation::new("age", "age is required")),
            Some(age) if age < MIN_AGE => {
                violations.push(Violation::new(
                    "age",
                    format!("age must be at least {MIN_AGE}"),
                ));
            }
            Some(age) if age > MAX_AGE => {
                violations.push(Violation::new(
                    "age",
                    format!("age must be at most {MAX_AGE}"),
                ));
            }
            Some(_) => {}
        }

        check_text("name", self.name.as_deref(), &mut violations);

        match self.salary {
            None => violations.push(Violation::new("salary", "salary is required")),
            Some(salary) if salary < MIN_SALARY => {
                violations.push(Violation::new(
                    "salary",
                    format!("salary must be at least {MIN_SALARY}"),
                ));
            }
            Some(_) => {}
        }

        check_text("title", self.title.as_deref(), &mut violations);

        if !violations.is_empty() {
            return Err(violations);
        }

        // All four fields were just checked present.
        match (self.name, self.salary, self.age, self.title) {
            (Some(name), Some(salary), Some(age), Some(title)) => Ok(CreateEmployeeInput {
                name,
                salary,
                age,
                title,
            }),
            _ => Err(vec![Violation::new("", "invalid creation payload")]),
        }
    }
}
