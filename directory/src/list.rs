use crate::{
    api::EmployeeApi,
    format::{self, ColorLookup},
    models::employee::Employee,
};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ListState {
    #[default]
    Loading,
    Failed(String),
    Loaded(Vec<Employee>),
}

#[derive(Debug, Clone, Default)]
pub struct EmployeeList {
    state: ListState,
    refresh_signal: bool,
    // Signal value at the last completed load; None until the first one.
    loaded_signal: Option<bool>,
}

impl EmployeeList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn rows(&self) -> &[Employee] {
        match &self.state {
            ListState::Loaded(rows) => rows.as_slice(),
            _ => &[],
        }
    }

    pub fn refresh_table(&mut self) {
        self.refresh_signal = !self.refresh_signal;
    }

    pub fn needs_fetch(&self) -> bool {
        self.loaded_signal != Some(self.refresh_signal)
    }

    /// Fetches the collection. A failure replaces the table with its message.
    pub async fn load(&mut self, api: &dyn EmployeeApi) {
        self.state = ListState::Loading;
        let signal = self.refresh_signal;

        self.state = match api.list_employees().await {
            Ok(rows) => ListState::Loaded(rows),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load employees");
                ListState::Failed(e.to_string())
            }
        };
        self.loaded_signal = Some(signal);
    }

    /// Loads only if this is the first load or the signal moved since.
    pub async fn sync(&mut self, api: &dyn EmployeeApi) {
        if self.needs_fetch() {
            self.load(api).await;
        }
    }

    pub fn select(&self, index: usize) -> Option<&Employee> {
        self.rows().get(index)
    }

    /// Row background. The table matches colour tokens case-insensitively.
    pub fn row_color(employee: &Employee) -> String {
        format::display_color_with(employee.profile_colour.as_str(), ColorLookup::CaseInsensitive)
    }

    pub fn render(&self) -> String {
        let rows = match &self.state {
            ListState::Loading => return "Loading...\n".to_string(),
            ListState::Failed(message) => return format!("Error: {}\n", message),
            ListState::Loaded(rows) => rows,
        };

        let mut out = String::from("Current Employees    [add employee]\n");
        out.push_str(&format!(
            "{:>3}  {:<10} {:<16} {:<16} {:<10} {:<14} {}\n",
            "#", "Employee #", "First Name", "Last Name", "Salutation", "Profile Colour", "Row"
        ));
        for (i, e) in rows.iter().enumerate() {
            out.push_str(&format!(
                "{:>3}  {:<10} {:<16} {:<16} {:<10} {:<14} {}\n",
                i,
                e.employee_number,
                e.first_name,
                e.last_name,
                e.salutation.map(|s| s.as_str()).unwrap_or(""),
                e.profile_colour.as_str(),
                Self::row_color(e),
            ));
        }
        out
    }
}
