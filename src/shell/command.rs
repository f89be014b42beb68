//! Shell commands - one line of operator input

use crate::record::Field;
use crate::{Error, Result};
use std::str::FromStr;

/// A parsed shell command.
///
/// English and Spanish spellings are both accepted, matching the button
/// labels of the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add,
    Remove,
    Update,
    /// Search by the name input; a term given inline replaces the input first
    Search(Option<String>),
    ShowAll,
    /// Select a row by its list position, or clear with `None`
    Select(Option<usize>),
    Set(Field, String),
    Edit,
    Clear,
    Show,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let line = s.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_lowercase().as_str() {
            "add" | "agregar" => Command::Add,
            "remove" | "rm" | "eliminar" => Command::Remove,
            "update" | "actualizar" => Command::Update,
            "search" | "buscar" => {
                Command::Search((!rest.is_empty()).then(|| rest.to_string()))
            }
            "all" | "mostrar" | "todo" => Command::ShowAll,
            "select" | "sel" | "seleccionar" => {
                if rest.is_empty() {
                    Command::Select(None)
                } else {
                    let index = rest.parse::<usize>().map_err(|_| {
                        Error::InvalidCommand(format!("not a row number: {}", rest))
                    })?;
                    Command::Select(Some(index))
                }
            }
            "set" => {
                let (field, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                if field.is_empty() {
                    return Err(Error::InvalidCommand("usage: set <field> <value>".into()));
                }
                Command::Set(field.parse()?, value.trim().to_string())
            }
            "edit" | "editar" => Command::Edit,
            "clear" | "limpiar" => Command::Clear,
            "show" | "form" | "ver" => Command::Show,
            "help" | "?" | "ayuda" => Command::Help,
            "quit" | "exit" | "q" | "salir" => Command::Quit,
            "" => return Err(Error::InvalidCommand("empty command".into())),
            other => return Err(Error::InvalidCommand(format!("unknown command: {}", other))),
        };

        Ok(command)
    }
}

pub const HELP: &str = "\
Commands:
  add | agregar                Add a service from the inputs
  remove | eliminar            Remove the selected service
  update | actualizar          Overwrite the selected service with the inputs
  search | buscar [term]       Show services whose name contains the term
  all | mostrar                Show every service
  select | seleccionar [n]     Select row n (no number clears the selection)
  set <field> <value>          Fill one input (nombre, recogida, entrega, celular, dinero)
  edit | editar                Prompt for every input
  clear | limpiar              Empty the inputs
  show | ver                   Redraw the form
  help | ayuda                 This help
  quit | salir                 Leave";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_commands() {
        assert_eq!("add".parse::<Command>().unwrap(), Command::Add);
        assert_eq!("  Eliminar ".parse::<Command>().unwrap(), Command::Remove);
        assert_eq!("mostrar".parse::<Command>().unwrap(), Command::ShowAll);
        assert_eq!("salir".parse::<Command>().unwrap(), Command::Quit);
    }

    #[test]
    fn test_search_with_and_without_term() {
        assert_eq!("search".parse::<Command>().unwrap(), Command::Search(None));
        assert_eq!(
            "buscar  Ana Maria ".parse::<Command>().unwrap(),
            Command::Search(Some("Ana Maria".into()))
        );
    }

    #[test]
    fn test_select() {
        assert_eq!("select 2".parse::<Command>().unwrap(), Command::Select(Some(2)));
        assert_eq!("select".parse::<Command>().unwrap(), Command::Select(None));
        assert!("select dos".parse::<Command>().is_err());
    }

    #[test]
    fn test_set_keeps_spaces_in_value() {
        assert_eq!(
            "set recogida Calle 10 # 4-20".parse::<Command>().unwrap(),
            Command::Set(Field::PickupAddress, "Calle 10 # 4-20".into())
        );
        assert_eq!(
            "set nombre".parse::<Command>().unwrap(),
            Command::Set(Field::Name, String::new())
        );
        assert!("set".parse::<Command>().is_err());
        assert!("set apellido x".parse::<Command>().is_err());
    }

    #[test]
    fn test_unknown_command() {
        let err = "borrar todo".parse::<Command>().unwrap_err();
        assert!(matches!(err, Error::InvalidCommand(_)));
        assert!("".parse::<Command>().is_err());
    }
}
