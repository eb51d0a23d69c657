pub mod app;
pub mod dashboard;

pub use app::{default_form, App, Field, Section, View};
