//! Terminal shell - drives the form controller from operator input
//!
//! Interactive sessions prompt with `dialoguer` and redraw the form after
//! every command; piped input is read line by line with the same commands.

pub mod command;

pub use command::{Command, HELP};

use std::io::BufRead;
use console::Term;
use dialoguer::Input;
use crate::form::{FormController, Notice, Notifier, Outcome, RecordingNotifier};
use crate::record::{Field, ServiceRecord};
use crate::{ui, Error, Result};

/// Shows each notice on the terminal. When `modal`, waits for Enter the
/// way a dialog waits for its button.
pub struct TerminalNotifier {
    modal: bool,
}

impl TerminalNotifier {
    pub fn new(modal: bool) -> Self {
        Self { modal }
    }
}

impl Notifier for TerminalNotifier {
    fn notify(&mut self, notice: Notice) {
        ui::notice(&notice);

        let term = Term::stderr();
        if self.modal && term.is_term() {
            let _ = term.write_line(&ui::dim("  (Enter para continuar)"));
            let _ = term.read_line();
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Shell<N: Notifier> {
    form: FormController<N>,
    title: String,
    interactive: bool,
}

impl<N: Notifier> Shell<N> {
    pub fn new(form: FormController<N>, title: impl Into<String>, interactive: bool) -> Self {
        Self {
            form,
            title: title.into(),
            interactive,
        }
    }

    pub fn form(&self) -> &FormController<N> {
        &self.form
    }

    /// Run one command against the form
    pub fn execute(&mut self, command: Command) -> Result<Flow> {
        tracing::debug!(?command, "shell command");
        match command {
            Command::Add => {
                self.form.add();
            }
            Command::Remove => {
                self.form.remove();
            }
            Command::Update => {
                self.form.update();
            }
            Command::Search(term) => {
                if let Some(term) = term {
                    self.form.set_field(Field::Name, term);
                }
                self.form.search();
            }
            Command::ShowAll => {
                self.form.show_all();
            }
            Command::Select(index) => self.form.select(index),
            Command::Set(field, value) => self.form.set_field(field, value),
            Command::Edit => self.edit_fields()?,
            Command::Clear => self.form.clear_fields(),
            Command::Show => self.render(),
            Command::Help => println!("{}", HELP),
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Parse and run one line; bad input is reported, never fatal
    pub fn execute_line(&mut self, line: &str) -> Result<Flow> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(Flow::Continue);
        }

        match line.parse::<Command>() {
            Ok(command) => self.execute(command),
            Err(e @ Error::InvalidCommand(_)) => {
                self.form
                    .notifier_mut()
                    .notify(Notice::error(crate::form::notice::TITLE_ERROR, e.to_string()));
                Ok(Flow::Continue)
            }
            Err(e) => Err(e),
        }
    }

    /// Read commands from `reader` until it ends or `quit`
    pub fn run_script<R: BufRead>(&mut self, reader: R) -> Result<()> {
        for line in reader.lines() {
            if self.execute_line(&line?)? == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    /// Prompt, run, redraw until the operator quits
    pub fn run_interactive(&mut self) -> Result<()> {
        self.render();
        println!("{}", ui::dim("Escriba 'help' para ver los comandos."));

        loop {
            let line: String = Input::new()
                .with_prompt("servicios")
                .allow_empty(true)
                .interact_text()?;

            if self.execute_line(&line)? == Flow::Quit {
                break;
            }
            self.render();
        }
        Ok(())
    }

    /// Draw the list view followed by the five inputs
    pub fn render(&self) {
        if self.interactive {
            let _ = Term::stdout().clear_screen();
        }

        ui::header(&self.title);
        println!(
            "{}",
            ui::render_services(self.form.rows(), self.form.selected_index())
        );

        ui::section("Servicio");
        let fields = self.form.fields();
        for field in Field::all() {
            println!("{}", ui::field_line(field.label(), fields.get(*field)));
        }
        println!();
    }

    fn edit_fields(&mut self) -> Result<()> {
        if !self.interactive {
            self.form.notifier_mut().notify(Notice::error(
                crate::form::notice::TITLE_ERROR,
                "edit needs a terminal; use 'set <field> <value>'",
            ));
            return Ok(());
        }

        for field in Field::all() {
            let current = self.form.fields().get(*field).to_string();
            let value: String = Input::new()
                .with_prompt(field.label())
                .with_initial_text(current)
                .allow_empty(true)
                .interact_text()?;
            self.form.set_field(*field, value);
        }
        Ok(())
    }
}

/// One-shot search: fill the name input and search. Rows come back only
/// when the search ran; a rejected term or store error leaves `None`.
pub fn search_once<N: Notifier>(
    form: &mut FormController<N>,
    term: impl Into<String>,
) -> Option<&[ServiceRecord]> {
    form.set_field(Field::Name, term);
    match form.search() {
        Outcome::Done => Some(form.rows()),
        _ => None,
    }
}

impl Shell<RecordingNotifier> {
    /// Notices collected so far (non-interactive runs)
    pub fn notices(&self) -> &[Notice] {
        &self.form.notifier().notices
    }
}
