//! # Registration Form
//!
//! State machine behind the registration screen.
//!
//! ## States
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Registration Form Lifecycle                          │
//! │                                                                         │
//! │           edit(field)                                                   │
//! │           ┌───────┐                                                     │
//! │           ▼       │                                                     │
//! │       ┌─────────┐ │   submit()   ┌──────────────┐                      │
//! │  ───► │ Editing │─┴────────────► │  (validate)  │                      │
//! │       └─────────┘                └──────┬───────┘                      │
//! │            ▲                  any error │        │ all clear           │
//! │            │ edit(field)                ▼        ▼                     │
//! │       ┌──────────┐                                ┌──────────┐         │
//! │       │ Rejected │ ◄──────────────────────────    │ Accepted │         │
//! │       └──────────┘                                └──────────┘         │
//! │                                                   emits Session        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Error Bookkeeping
//! - Editing a field clears only that field's error and the form-level
//!   message. Other fields keep whatever error they had.
//! - Submitting recomputes every field error from scratch.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ValidationError, SUBMIT_ERROR_MESSAGE};
use crate::gate::Session;
use crate::validation::{is_employee_domain, validate_age, validate_email, validate_employee_code};

// =============================================================================
// Fields
// =============================================================================

/// Identifies one input of the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Email,
    Age,
    EmployeeCode,
}

impl FormField {
    /// All fields in display order.
    pub const ALL: [FormField; 3] = [FormField::Email, FormField::Age, FormField::EmployeeCode];

    /// Label shown next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Email => "Correo Electrónico",
            FormField::Age => "Edad",
            FormField::EmployeeCode => "Código de Empleado",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormField::Email => write!(f, "email"),
            FormField::Age => write!(f, "age"),
            FormField::EmployeeCode => write!(f, "employee_code"),
        }
    }
}

/// Error returned when a field name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown form field: '{0}'. Valid options: email, age, code")]
pub struct UnknownField(pub String);

impl FromStr for FormField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "email" | "correo" => Ok(FormField::Email),
            "age" | "edad" => Ok(FormField::Age),
            "code" | "employee_code" | "codigo" => Ok(FormField::EmployeeCode),
            other => Err(UnknownField(other.to_string())),
        }
    }
}

/// Raw text of every input, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFields {
    pub email: String,
    pub age: String,
    pub employee_code: String,
}

impl FormFields {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Email => &self.email,
            FormField::Age => &self.age,
            FormField::EmployeeCode => &self.employee_code,
        }
    }

    fn slot_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Email => &mut self.email,
            FormField::Age => &mut self.age,
            FormField::EmployeeCode => &mut self.employee_code,
        }
    }
}

// =============================================================================
// Field Errors
// =============================================================================

/// Per-field validation outcome. `None` means the field is valid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors {
    pub email: Option<ValidationError>,
    pub age: Option<ValidationError>,
    pub employee_code: Option<ValidationError>,
}

impl FieldErrors {
    /// Runs every validator against `fields`.
    ///
    /// The employee-code rule is evaluated even when the code input is not
    /// shown; outside the employee domain it always passes.
    pub fn evaluate(fields: &FormFields) -> Self {
        let employee = is_employee_domain(&fields.email);
        FieldErrors {
            email: validate_email(&fields.email).err(),
            age: validate_age(&fields.age).err(),
            employee_code: validate_employee_code(&fields.employee_code, employee).err(),
        }
    }

    pub fn get(&self, field: FormField) -> Option<ValidationError> {
        match field {
            FormField::Email => self.email,
            FormField::Age => self.age,
            FormField::EmployeeCode => self.employee_code,
        }
    }

    /// Inline message for `field`; empty string when valid.
    pub fn message(&self, field: FormField) -> String {
        self.get(field).map(|e| e.to_string()).unwrap_or_default()
    }

    pub fn clear(&mut self, field: FormField) {
        match field {
            FormField::Email => self.email = None,
            FormField::Age => self.age = None,
            FormField::EmployeeCode => self.employee_code = None,
        }
    }

    /// True when no field carries an error.
    pub fn is_clean(&self) -> bool {
        FormField::ALL.iter().all(|f| self.get(*f).is_none())
    }
}

// =============================================================================
// Form
// =============================================================================

/// Where the form is in its lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormStatus {
    #[default]
    Editing,
    Rejected,
    Accepted,
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// All fields passed. Carries the new session.
    Accepted(Session),
    /// At least one field failed. Carries the recomputed errors.
    Rejected(FieldErrors),
}

/// The registration form: field values, errors and status.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    fields: FormFields,
    errors: FieldErrors,
    submit_error: Option<&'static str>,
    status: FormStatus,
}

impl RegistrationForm {
    /// Creates an empty form in `Editing`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn submit_error(&self) -> Option<&'static str> {
        self.submit_error
    }

    /// Replaces one field's value.
    ///
    /// Clears that field's error and the form-level message, and returns a
    /// rejected form to `Editing`. Other fields are untouched.
    pub fn edit(&mut self, field: FormField, value: impl Into<String>) {
        *self.fields.slot_mut(field) = value.into();
        self.errors.clear(field);
        self.submit_error = None;
        if self.status == FormStatus::Rejected {
            self.status = FormStatus::Editing;
        }
    }

    /// Validates every field and decides the outcome.
    ///
    /// The employee flag is computed from the email before validation and
    /// only takes effect when everything passes.
    pub fn submit(&mut self) -> SubmitOutcome {
        let is_employee = is_employee_domain(&self.fields.email);
        let errors = FieldErrors::evaluate(&self.fields);
        self.errors = errors;

        if !errors.is_clean() {
            self.submit_error = Some(SUBMIT_ERROR_MESSAGE);
            self.status = FormStatus::Rejected;
            return SubmitOutcome::Rejected(errors);
        }

        self.submit_error = None;
        self.status = FormStatus::Accepted;
        SubmitOutcome::Accepted(Session::start(is_employee))
    }

    /// Immutable view of the form for rendering.
    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            fields: self.fields.clone(),
            email_error: self.errors.message(FormField::Email),
            age_error: self.errors.message(FormField::Age),
            employee_code_error: self.errors.message(FormField::EmployeeCode),
            submit_error: self.submit_error.unwrap_or_default().to_string(),
            status: self.status,
            show_employee_code: is_employee_domain(&self.fields.email),
        }
    }
}

/// Rendering snapshot of the form. Empty strings mean "no message".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormSnapshot {
    pub fields: FormFields,
    pub email_error: String,
    pub age_error: String,
    pub employee_code_error: String,
    pub submit_error: String,
    pub status: FormStatus,
    /// The code input is only shown while the email looks like staff.
    pub show_employee_code: bool,
}

impl FormSnapshot {
    pub fn error_for(&self, field: FormField) -> &str {
        match field {
            FormField::Email => &self.email_error,
            FormField::Age => &self.age_error,
            FormField::EmployeeCode => &self.employee_code_error,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
