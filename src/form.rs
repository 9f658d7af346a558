//! Input form: English name and interests

pub mod form_render;
mod form_state;

pub use form_state::{FormField, FormState, FormValues};
