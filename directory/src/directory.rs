use crate::{
    api::EmployeeApi,
    form::{EmployeeForm, FormField, SubmitReceipt},
    list::EmployeeList,
    models::employee::{Gender, ProfileColour, Salutation},
};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Refresh,
    SelectRow(usize),
    /// Clears the selection and the fields, then saves the blank record.
    AddEmployee,
    Submit,
    Cancel,
    Input(FormField, String),
    SelectSalutation(Salutation),
    SetGender(Gender),
    SetProfileColour(ProfileColour),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Updated,
    Saved(SubmitReceipt),
    Alert(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Failed(String),
}

#[derive(Debug, Default)]
pub struct Directory {
    list: EmployeeList,
    form: EmployeeForm,
    submission: SubmissionState,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list(&self) -> &EmployeeList {
        &self.list
    }

    pub fn form(&self) -> &EmployeeForm {
        &self.form
    }

    pub fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    /// Initial fetch.
    pub async fn mount(&mut self, api: &dyn EmployeeApi) {
        self.list.sync(api).await;
    }

    pub async fn dispatch(&mut self, command: Command, api: &dyn EmployeeApi) -> Outcome {
        tracing::debug!(?command, "dispatch");
        match command {
            Command::Refresh => {
                self.list.refresh_table();
                self.list.sync(api).await;
            }
            Command::SelectRow(index) => {
                if let Some(employee) = self.list.select(index).cloned() {
                    self.form.configure(Some(employee));
                }
            }
            Command::AddEmployee => {
                self.form.clear();
                return self.submit(api).await;
            }
            Command::Submit => return self.submit(api).await,
            Command::Cancel => self.form.cancel(),
            Command::Input(field, raw) => self.form.input(field, &raw),
            Command::SelectSalutation(s) => self.form.select_salutation(s),
            Command::SetGender(g) => self.form.set_gender(g),
            Command::SetProfileColour(c) => self.form.set_profile_colour(c),
        }
        Outcome::Updated
    }

    async fn submit(&mut self, api: &dyn EmployeeApi) -> Outcome {
        self.submission = SubmissionState::Submitting;
        match self.form.submit(api).await {
            Ok(receipt) => {
                self.submission = SubmissionState::Idle;
                self.list.refresh_table();
                self.list.sync(api).await;
                Outcome::Saved(receipt)
            }
            Err(failure) => {
                let alert = failure.to_string();
                self.submission = SubmissionState::Failed(alert.clone());
                Outcome::Alert(alert)
            }
        }
    }

    pub fn render(&self) -> String {
        let mut out = self.list.render();
        out.push('\n');
        if self.submission == SubmissionState::Submitting {
            out.push_str("Saving...\n");
        }
        out.push_str(&self.form.render());
        out
    }
}
