//! form-choice - Checkbox/radio "choice" building block for form components
//!
//! Contains the `Choice` view component, the identifier helpers collaborating
//! controls use for assistive wiring, and the style configuration the
//! component resolves its class names through.

pub mod components;
pub mod styles;

pub use components::*;
pub use styles::{use_choice_styles, ChoiceStyles, StylesError};
