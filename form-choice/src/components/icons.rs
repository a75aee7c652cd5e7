//! Icon components using Lucide icon set (https://lucide.dev)
//!
//! Icons use stroke="currentColor" so they inherit the surrounding text color.

use dioxus::prelude::*;

/// Circled exclamation mark shown in front of inline error messages
#[component]
pub fn AlertCircleIcon(class: String) -> Element {
    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            width: "20",
            height: "20",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            circle { cx: "12", cy: "12", r: "10" }
            line { x1: "12", x2: "12", y1: "8", y2: "12" }
            line { x1: "12", x2: "12.01", y1: "16", y2: "16" }
        }
    }
}
