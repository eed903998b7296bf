//! # Input Components
//!
//! Form inputs used by the add/edit modals:
//! - **TextInput**: single-line text or numeric input
//! - **TextArea**: multi-line text input
//! - **Select**: dropdown selection
//! - **Checkbox**: boolean checkbox
//!
//! `required` is forwarded to the underlying element so the renderer blocks
//! submission of an empty required field.
//!

use dioxus::prelude::*;

/// Class shared by text inputs and selects
const INPUT_CLASS: &str = "form-control";

/// Class for multi-line inputs
const TEXTAREA_CLASS: &str = "form-control resize-y";

/// Visible rows of a text area
const TEXTAREA_ROWS: usize = 3;

// ============================================================================
// Text Input Component
// ============================================================================

/// Properties for TextInput component
#[derive(Props, Clone, PartialEq)]
pub struct TextInputProps {
    /// Input value
    pub value: String,

    /// Label text (optional)
    #[props(default)]
    pub label: Option<String>,

    /// Form field name
    #[props(default)]
    pub name: Option<String>,

    /// Whether the input is required
    #[props(default = false)]
    pub required: bool,

    /// Input type (text, number, url, ...)
    #[props(default = "text".to_string())]
    pub input_type: String,

    /// Minimum value for numeric inputs
    #[props(default)]
    pub min: Option<String>,

    /// Step for numeric inputs
    #[props(default)]
    pub step: Option<String>,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Single-line text input component
#[component]
pub fn TextInput(props: TextInputProps) -> Element {
    rsx! {
        div {
            class: "input-group",

            if let Some(label) = &props.label {
                label {
                    class: "input-label",
                    "{label}"
                    if props.required {
                        span { class: "required-mark", "*" }
                    }
                }
            }

            input {
                class: INPUT_CLASS,
                r#type: "{props.input_type}",
                name: props.name.clone(),
                value: "{props.value}",
                required: props.required,
                min: props.min.clone(),
                step: props.step.clone(),
                oninput: move |e| props.on_change.call(e.value()),
            }
        }
    }
}

// ============================================================================
// Text Area Component
// ============================================================================

/// Properties for TextArea component
#[derive(Props, Clone, PartialEq)]
pub struct TextAreaProps {
    /// Input value
    pub value: String,

    /// Label text
    #[props(default)]
    pub label: Option<String>,

    /// Form field name
    #[props(default)]
    pub name: Option<String>,

    /// Whether required
    #[props(default = false)]
    pub required: bool,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Multi-line text input component
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    rsx! {
        div {
            class: "input-group",

            if let Some(label) = &props.label {
                label {
                    class: "input-label",
                    "{label}"
                    if props.required {
                        span { class: "required-mark", "*" }
                    }
                }
            }

            textarea {
                class: TEXTAREA_CLASS,
                name: props.name.clone(),
                rows: "{TEXTAREA_ROWS}",
                required: props.required,
                value: "{props.value}",
                oninput: move |e| props.on_change.call(e.value()),
            }
        }
    }
}

// ============================================================================
// Select Component
// ============================================================================

/// A single option for the Select component
#[derive(Clone, PartialEq, Debug)]
pub struct SelectOption {
    /// Option value
    pub value: String,
    /// Display label
    pub label: String,
}

impl SelectOption {
    /// Create a new select option
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Properties for Select component
#[derive(Props, Clone, PartialEq)]
pub struct SelectProps {
    /// Selected value (empty for none)
    pub value: String,

    /// Available options
    pub options: Vec<SelectOption>,

    /// Label text
    #[props(default)]
    pub label: Option<String>,

    /// Placeholder (shown when no selection)
    #[props(default)]
    pub placeholder: Option<String>,

    /// Whether required
    #[props(default = false)]
    pub required: bool,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Dropdown select component
#[component]
pub fn Select(props: SelectProps) -> Element {
    rsx! {
        div {
            class: "input-group",

            if let Some(label) = &props.label {
                label {
                    class: "input-label",
                    "{label}"
                    if props.required {
                        span { class: "required-mark", "*" }
                    }
                }
            }

            select {
                class: INPUT_CLASS,
                required: props.required,
                onchange: move |e| props.on_change.call(e.value()),

                // Placeholder option
                if let Some(placeholder) = &props.placeholder {
                    option {
                        value: "",
                        selected: props.value.is_empty(),
                        "{placeholder}"
                    }
                }

                for option in &props.options {
                    option {
                        key: "{option.value}",
                        value: "{option.value}",
                        selected: props.value == option.value,
                        "{option.label}"
                    }
                }
            }
        }
    }
}

// ============================================================================
// Checkbox Component
// ============================================================================

/// Properties for Checkbox component
#[derive(Props, Clone, PartialEq)]
pub struct CheckboxProps {
    /// Whether checked
    pub checked: bool,

    /// Label text
    #[props(default)]
    pub label: Option<String>,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<bool>,
}

/// Checkbox input component
#[component]
pub fn Checkbox(props: CheckboxProps) -> Element {
    rsx! {
        label {
            class: "checkbox-wrapper",

            input {
                r#type: "checkbox",
                checked: props.checked,
                onchange: move |_| props.on_change.call(!props.checked),
            }

            if let Some(label) = &props.label {
                span { class: "checkbox-label", "{label}" }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
