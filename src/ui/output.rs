use crate::form::{Notice, NoticeLevel};
use crate::ui::{theme, Icons};
use owo_colors::OwoColorize;

pub fn header(text: &str) {
    println!("{} {}", Icons::CLIPBOARD, text.style(theme().header.clone()));
}

pub fn success(label: &str) {
    println!("{} {}", Icons::CHECK, label.style(theme().success.clone()));
}

pub fn error(label: &str) {
    eprintln!("{} {}", Icons::CROSS, label.style(theme().error.clone()));
}

pub fn section(title: &str) {
    println!();
    println!("━{}━", title.style(theme().header.clone()));
}

pub fn dim(text: &str) -> String {
    text.style(theme().dim.clone()).to_string()
}

/// One labeled input of the form, e.g. `  Nombre: Ana`
pub fn field_line(label: &str, value: &str) -> String {
    format!("  {:<20} {}", format!("{}:", label).style(theme().dim.clone()), value)
}

/// Print a notice the way a dialog would show it: title, then message
pub fn notice(notice: &Notice) {
    match notice.level {
        NoticeLevel::Info => {
            success(&format!("{} - {}", notice.title, notice.message));
        }
        NoticeLevel::Error => {
            error(&format!("{} - {}", notice.title, notice.message));
        }
    }
}
