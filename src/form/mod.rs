//! Form Layer - input fields, list view state and action dispatch
//!
//! The controller is independent of any terminal or window toolkit:
//! it holds plain state and reports everything the operator must see
//! through a [`Notifier`].

pub mod controller;
pub mod notice;

pub use controller::{FormController, FormFields, Outcome};
pub use notice::{Notice, NoticeLevel, Notifier, RecordingNotifier};
