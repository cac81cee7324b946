use crate::{
    directory::Command,
    form::FormField,
    models::employee::UnknownChoice,
};

pub const HELP: &str = "\
commands:
  list | refresh           refetch the employee table
  select <row>             edit the employee in that row
  add                      save the form as a new employee
  save                     submit the form
  cancel                   discard edits
  first <text>             first name
  last <text>              last name
  number <text>            employee number
  salary <text>            gross salary
  salutation <Dr|Mr|Mrs|Ms|Mx>
  gender <male|female|unspecified>
  colour <green|blue|red|none>
  help | quit";

#[derive(Debug, Clone, PartialEq)]
pub enum Line {
    Empty,
    Help,
    Quit,
    Dispatch(Command),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown command `{0}` (try `help`)")]
    UnknownCommand(String),

    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),

    #[error("row must be a number, got `{0}`")]
    BadRow(String),

    #[error(transparent)]
    Choice(#[from] UnknownChoice),
}

pub fn parse_line(line: &str) -> Result<Line, ParseError> {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match verb {
        "" => return Ok(Line::Empty),
        "help" | "?" => return Ok(Line::Help),
        "quit" | "exit" => return Ok(Line::Quit),
        "list" | "refresh" => Command::Refresh,
        "add" => Command::AddEmployee,
        "save" => Command::Submit,
        "cancel" => Command::Cancel,
        "select" => {
            let row = required("select", rest)?;
            Command::SelectRow(row.parse().map_err(|_| ParseError::BadRow(row.to_string()))?)
        }
        // Text fields accept anything; the form normalizes it.
        "first" => Command::Input(FormField::FirstName, rest.to_string()),
        "last" => Command::Input(FormField::LastName, rest.to_string()),
        "number" => Command::Input(FormField::EmployeeNumber, rest.to_string()),
        "salary" => Command::Input(FormField::GrossSalary, rest.to_string()),
        "salutation" => Command::SelectSalutation(required("salutation", rest)?.parse()?),
        "gender" => Command::SetGender(required("gender", rest)?.parse()?),
        "colour" | "color" => Command::SetProfileColour(required("colour", rest)?.parse()?),
        other => return Err(ParseError::UnknownCommand(other.to_string())),
    };

    Ok(Line::Dispatch(command))
}

fn required<'a>(verb: &'static str, arg: &'a str) -> Result<&'a str, ParseError> {
    if arg.is_empty() {
        Err(ParseError::MissingArgument(verb))
    } else {
        Ok(arg)
    }
}
