use validator::Validate;

use crate::{
    api::EmployeeApi,
    error::{AppError, Result},
    format::{self, ColorLookup},
    models::employee::{Employee, EmployeePayload, Gender, ProfileColour, Salutation},
};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum FormMode {
    #[default]
    NewRecord,
    Editing(Employee),
}

/// Free-text inputs. Each one has its own keystroke normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    FirstName,
    LastName,
    EmployeeNumber,
    GrossSalary,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormFields {
    pub first_name: String,
    pub last_name: String,
    pub salutation: Option<Salutation>,
    pub gender: Option<Gender>,
    pub employee_number: f64,
    /// Display form, already grouped (`"52 000"`).
    pub gross_salary: String,
    pub profile_colour: ProfileColour,
}

impl FormFields {
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            salutation: employee.salutation,
            gender: employee.gender,
            employee_number: employee.employee_number,
            gross_salary: format::format_salary(&employee.gross_salary),
            profile_colour: employee.profile_colour.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitAction {
    Create,
    Update,
}

impl SubmitAction {
    /// Fixed text shown to the user when this action fails.
    pub fn alert_message(&self) -> &'static str {
        match self {
            SubmitAction::Create => "Failed to add employee. Please try again.",
            SubmitAction::Update => "Failed to update employee. Please try again.",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubmitReceipt {
    pub action: SubmitAction,
    pub message: String,
    pub employee_number: Option<f64>,
}

/// A rejected or undeliverable submission. Displays as the alert text; the
/// underlying error stays reachable through `source`.
#[derive(Debug, thiserror::Error)]
#[error("{}", .action.alert_message())]
pub struct SubmitFailure {
    pub action: SubmitAction,
    #[source]
    pub source: AppError,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonStyle {
    pub background: String,
    pub text: &'static str,
}

#[derive(Debug, Clone, Default)]
pub struct EmployeeForm {
    mode: FormMode,
    fields: FormFields,
}

impl EmployeeForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    /// `Some` loads every field from the record. `None` switches to
    /// new-record mode but keeps whatever is currently typed in.
    pub fn configure(&mut self, employee: Option<Employee>) {
        match employee {
            Some(employee) => {
                self.fields = FormFields::from_employee(&employee);
                self.mode = FormMode::Editing(employee);
            }
            None => self.mode = FormMode::NewRecord,
        }
    }

    /// Back to a blank new record, dropping both the selection and any edits.
    pub fn clear(&mut self) {
        self.mode = FormMode::NewRecord;
        self.fields = FormFields::blank();
    }

    pub fn input(&mut self, field: FormField, raw: &str) {
        match field {
            FormField::FirstName => self.fields.first_name = format::sanitize_name(raw),
            FormField::LastName => self.fields.last_name = format::sanitize_name(raw),
            FormField::EmployeeNumber => {
                self.fields.employee_number = format::parse_employee_number(raw)
            }
            FormField::GrossSalary => self.fields.gross_salary = format::normalize_salary(raw),
        }
    }

    /// Sets the salutation; a gendered one overwrites gender.
    pub fn select_salutation(&mut self, salutation: Salutation) {
        self.fields.salutation = Some(salutation);
        if let Some(gender) = salutation.implied_gender() {
            self.fields.gender = Some(gender);
        }
    }

    pub fn set_gender(&mut self, gender: Gender) {
        self.fields.gender = Some(gender);
    }

    pub fn set_profile_colour(&mut self, colour: ProfileColour) {
        self.fields.profile_colour = colour;
    }

    pub fn full_name(&self) -> String {
        format::full_name(&self.fields.first_name, &self.fields.last_name)
    }

    /// Discards edits. No request is made.
    pub fn cancel(&mut self) {
        self.fields = match &self.mode {
            FormMode::Editing(employee) => FormFields::from_employee(employee),
            FormMode::NewRecord => FormFields::blank(),
        };
    }

    pub fn action(&self) -> SubmitAction {
        match self.mode {
            FormMode::Editing(_) => SubmitAction::Update,
            FormMode::NewRecord => SubmitAction::Create,
        }
    }

    pub fn payload(&self) -> Result<EmployeePayload> {
        let id = match &self.mode {
            FormMode::Editing(employee) => Some(employee.id),
            FormMode::NewRecord => None,
        };
        let f = &self.fields;
        let payload = EmployeePayload {
            id,
            first_name: f.first_name.clone(),
            last_name: f.last_name.clone(),
            salutation: f.salutation,
            gender: f.gender,
            employee_number: f.employee_number,
            gross_salary: f.gross_salary.clone(),
            profile_colour: f.profile_colour.clone(),
        };
        payload.validate()?;
        Ok(payload)
    }

    /// PUT when editing, POST otherwise. A successful create blanks the
    /// fields; a failure of any kind leaves them as they were.
    pub async fn submit(
        &mut self,
        api: &dyn EmployeeApi,
    ) -> std::result::Result<SubmitReceipt, SubmitFailure> {
        let action = self.action();
        let fail = |source: AppError| {
            tracing::error!(error = %source, ?action, "Employee submit failed");
            SubmitFailure { action, source }
        };

        let payload = self.payload().map_err(fail)?;
        let response = match (&self.mode, payload.id) {
            (FormMode::Editing(_), Some(id)) => api.update_employee(id, &payload).await,
            _ => api.create_employee(&payload).await,
        }
        .map_err(fail)?;

        if action == SubmitAction::Create {
            self.fields = FormFields::blank();
        }
        tracing::info!(?action, message = %response.message, "Employee saved");

        Ok(SubmitReceipt {
            action,
            message: response.message,
            employee_number: response.employee_number,
        })
    }

    /// The Save button is tinted with the exact-match colour lookup.
    pub fn save_button_style(&self) -> ButtonStyle {
        let colour = &self.fields.profile_colour;
        ButtonStyle {
            background: format::display_color_with(colour.as_str(), ColorLookup::Exact),
            text: if *colour == ProfileColour::None { "white" } else { "black" },
        }
    }

    pub fn render(&self) -> String {
        let f = &self.fields;
        let save = self.save_button_style();
        let heading = match &self.mode {
            FormMode::Editing(employee) => format!("Employee Information (#{})", employee.id),
            FormMode::NewRecord => "Employee Information (new)".to_string(),
        };
        let option = |v: Option<&str>| v.unwrap_or("-").to_string();

        let mut out = String::new();
        out.push_str(&format!(
            "{}    [Cancel] [Save bg={} fg={}]\n",
            heading, save.background, save.text
        ));
        out.push_str(&format!("  First Name:       {}\n", f.first_name));
        out.push_str(&format!("  Last Name:        {}\n", f.last_name));
        out.push_str(&format!(
            "  Salutation:       {}\n",
            option(f.salutation.as_ref().map(|s| s.as_str()))
        ));
        out.push_str(&format!(
            "  Gender:           {}\n",
            option(f.gender.as_ref().map(|g| g.as_str()))
        ));
        out.push_str(&format!("  Employee #:       {}\n", f.employee_number));
        out.push_str(&format!("  Full Name:        {}\n", self.full_name()));
        out.push_str(&format!("  Gross Salary $PY: {}\n", f.gross_salary));
        out.push_str(&format!("  Profile Color:    {}\n", f.profile_colour));
        out
    }
}
