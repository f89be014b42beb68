pub mod icons;
pub mod output;
pub mod table;
pub mod theme;

pub use icons::Icons;
pub use output::{dim, error, field_line, header, notice, section, success};
pub use table::{ServiceRow, render_services};
pub use theme::{theme, Theme};
