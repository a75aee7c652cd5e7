//! Inline error message for a single form field

use crate::components::icons::AlertCircleIcon;
use crate::styles::use_choice_styles;
use dioxus::prelude::*;

/// Identifier of the error message element rendered for `field_id`
pub fn error_id(field_id: &str) -> String {
    format!("{field_id}Error")
}

/// Error message shown next to a field, addressable via [`error_id`]
#[component]
pub fn InlineError(message: Element, field_id: String) -> Element {
    let styles = use_choice_styles();

    rsx! {
        div { id: error_id(&field_id), class: styles.resolve("InlineError"),
            div { class: styles.resolve("InlineErrorIcon"),
                AlertCircleIcon { class: styles.resolve("InlineErrorIconSvg") }
            }
            span { {message} }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_utils::render;
    use crate::styles::ChoiceStyles;

    #[test]
    fn test_error_id() {
        assert_eq!(error_id("terms"), "termsError");
    }

    #[test]
    fn test_renders_message_with_field_id() {
        fn app() -> Element {
            rsx! {
                InlineError { message: rsx! { "You must accept" }, field_id: "terms" }
            }
        }

        let html = render(app);
        assert!(html.contains(r#"id="termsError""#));
        assert!(html.contains(r#"class="Polaris-Choice__InlineError""#));
        assert!(html.contains("You must accept"));
        assert!(html.contains("<svg"));
    }

    #[test]
    fn test_renders_rich_message() {
        fn app() -> Element {
            rsx! {
                InlineError {
                    message: rsx! {
                        "Read the "
                        a { href: "/terms", "terms" }
                    },
                    field_id: "terms",
                }
            }
        }

        let html = render(app);
        assert!(html.contains(r#"<a href="/terms">terms</a>"#));
    }

    #[test]
    fn test_classes_from_context() {
        fn app() -> Element {
            use_context_provider(|| ChoiceStyles {
                prefix: "choice".to_string(),
                ..Default::default()
            });

            rsx! {
                InlineError { message: rsx! { "Bad" }, field_id: "t" }
            }
        }

        let html = render(app);
        assert!(html.contains(r#"class="choice__InlineError""#));
        assert!(html.contains(r#"class="choice__InlineErrorIcon""#));
        assert!(!html.contains("Polaris-"));
    }
}
