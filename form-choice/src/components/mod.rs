//! Choice components and their collaborators

pub mod choice;
pub mod css;
pub mod icons;
pub mod inline_error;

pub use choice::{described_by, help_text_id, Alignment, Choice, ChoiceError, Descriptions};
pub use css::{class_names, variation_name};
pub use icons::AlertCircleIcon;
pub use inline_error::{error_id, InlineError};
