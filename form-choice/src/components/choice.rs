//! Choice component - label, control slot and descriptions shared by checkbox and radio controls

use crate::components::css::{class_names, variation_name};
use crate::components::inline_error::{error_id, InlineError};
use crate::styles::{use_choice_styles, ROOT};
use dioxus::prelude::*;
use tracing::trace;

/// Vertical alignment of the control relative to its label text
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Alignment {
    Leading,
    Trailing,
    Center,
}

impl Alignment {
    pub fn as_str(self) -> &'static str {
        match self {
            Alignment::Leading => "leading",
            Alignment::Trailing => "trailing",
            Alignment::Center => "center",
        }
    }
}

/// Error state of a choice
///
/// `NoMessage` only flags the field for error styling; `WithMessage` also
/// renders the message below the choice.
#[derive(Clone, PartialEq, Debug)]
pub enum ChoiceError {
    NoMessage(bool),
    WithMessage(Element),
}

impl ChoiceError {
    /// Message to display, if this error carries one
    pub fn message(&self) -> Option<&Element> {
        match self {
            ChoiceError::NoMessage(_) => None,
            ChoiceError::WithMessage(message) => Some(message),
        }
    }
}

impl From<bool> for ChoiceError {
    fn from(flag: bool) -> Self {
        ChoiceError::NoMessage(flag)
    }
}

impl From<Element> for ChoiceError {
    fn from(message: Element) -> Self {
        ChoiceError::WithMessage(message)
    }
}

impl From<&str> for ChoiceError {
    fn from(message: &str) -> Self {
        message.to_string().into()
    }
}

/// An empty string is no error at all, not an empty message.
impl From<String> for ChoiceError {
    fn from(message: String) -> Self {
        if message.is_empty() {
            return ChoiceError::NoMessage(false);
        }
        ChoiceError::WithMessage(rsx! { "{message}" })
    }
}

/// Which sub-regions the descriptions block below a choice contains
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Descriptions {
    pub error: bool,
    pub help_text: bool,
}

impl Descriptions {
    /// `None` when there is neither help text nor an error message to show
    pub fn plan(has_help_text: bool, error: Option<&ChoiceError>) -> Option<Self> {
        let error = error.and_then(ChoiceError::message).is_some();
        if !error && !has_help_text {
            return None;
        }

        Some(Self {
            error,
            help_text: has_help_text,
        })
    }
}

/// Identifier of the help text element rendered for choice `id`
pub fn help_text_id(id: &str) -> String {
    format!("{id}HelpText")
}

/// Value for the control's `aria-describedby`: error message first, then help text
pub fn described_by(id: &str, has_error: bool, has_help_text: bool) -> Option<String> {
    let mut ids = Vec::new();
    if has_error {
        ids.push(error_id(id));
    }
    if has_help_text {
        ids.push(help_text_id(id));
    }

    if ids.is_empty() {
        None
    } else {
        Some(ids.join(" "))
    }
}

/// Label wrapping a checkbox/radio control, with optional error message and help text.
///
/// `children` is the control itself; it should carry `id` so the label activates it.
#[component]
pub fn Choice(
    id: String,
    label: Element,
    children: Element,
    #[props(default)] disabled: bool,
    #[props(default)] error: Option<ChoiceError>,
    #[props(default)] label_hidden: bool,
    #[props(default)] help_text: Option<Element>,
    #[props(default)] alignment: Option<Alignment>,
    #[props(default)] full_width: bool,
    #[props(default)] onclick: Option<EventHandler>,
    #[props(default)] onmouseover: Option<EventHandler>,
    #[props(default)] onmouseout: Option<EventHandler>,
) -> Element {
    let styles = use_choice_styles();

    let root = styles.resolve(ROOT);
    let label_hidden_class = styles.resolve("labelHidden");
    let disabled_class = styles.resolve("disabled");
    let alignment_class = alignment
        .map(|a| styles.resolve(&variation_name("alignment", a.as_str())))
        .unwrap_or_default();
    let full_width_class = styles.resolve("fullWidth");
    let label_base = styles.resolve("Label");

    let class = class_names(&[
        (root.as_str(), true),
        (label_hidden_class.as_str(), label_hidden),
        (disabled_class.as_str(), disabled),
        (alignment_class.as_str(), alignment.is_some()),
        (full_width_class.as_str(), full_width),
    ]);
    let label_class = class_names(&[
        (label_base.as_str(), true),
        (full_width_class.as_str(), full_width),
    ]);

    let label_markup = rsx! {
        label {
            class: "{class}",
            r#for: "{id}",
            onclick: move |_| {
                if let Some(handler) = onclick {
                    handler.call(());
                }
            },
            onmouseover: move |_| {
                if let Some(handler) = onmouseover {
                    handler.call(());
                }
            },
            onmouseout: move |_| {
                if let Some(handler) = onmouseout {
                    handler.call(());
                }
            },
            span { class: styles.resolve("Control"), {children} }
            span { class: "{label_class}", {label} }
        }
    };

    let descriptions = Descriptions::plan(help_text.is_some(), error.as_ref());
    trace!(id = %id, ?descriptions, "Rendering choice");

    let Some(descriptions) = descriptions else {
        return label_markup;
    };

    let error_markup = error
        .as_ref()
        .and_then(ChoiceError::message)
        .filter(|_| descriptions.error)
        .map(|message| {
            rsx! {
                div { class: styles.resolve("Error"),
                    InlineError { message: message.clone(), field_id: id.clone() }
                }
            }
        });

    let help_text_markup = help_text.filter(|_| descriptions.help_text).map(|help_text| {
        rsx! {
            div { class: styles.resolve("HelpText"), id: help_text_id(&id), {help_text} }
        }
    });

    rsx! {
        div {
            {label_markup}
            div { class: styles.resolve("Descriptions"),
                {error_markup}
                {help_text_markup}
            }
        }
    }
}
