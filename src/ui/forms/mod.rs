//! Form rendering

mod field_renderer;
mod signup_form;

pub use signup_form::{draw, FORM_HEIGHT};
