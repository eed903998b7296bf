//! # Form Modal
//!
//! Overlay shared by the add and edit flows. The caller supplies the fields
//! as children; the modal owns the form element, the title and the
//! Cancel/submit footer.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct FormModalProps {
    /// Header text ("Add Category", "Edit Product", ...)
    pub title: String,

    /// Submit button text ("Add" or "Update")
    pub submit_label: String,

    /// Disables the footer while a save is in flight
    #[props(default = false)]
    pub saving: bool,

    /// Called when the form is submitted
    pub on_submit: EventHandler<()>,

    /// Called on Cancel, the close button, or a backdrop click
    pub on_cancel: EventHandler<()>,

    /// Form fields
    pub children: Element,
}

/// Modal dialog wrapping a form
#[component]
pub fn FormModal(props: FormModalProps) -> Element {
    let saving = props.saving;

    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| {
                if !saving {
                    props.on_cancel.call(());
                }
            },

            div {
                class: "modal",
                onclick: move |e| e.stop_propagation(),

                // Header
                div {
                    class: "modal-header",
                    h3 { class: "modal-title", "{props.title}" }
                    button {
                        r#type: "button",
                        class: "modal-close",
                        disabled: saving,
                        onclick: move |_| props.on_cancel.call(()),
                        "×"
                    }
                }

                form {
                    onsubmit: move |e| {
                        e.prevent_default();
                        props.on_submit.call(());
                    },

                    div {
                        class: "modal-body",
                        {props.children}
                    }

                    // Footer
                    div {
                        class: "modal-footer",
                        button {
                            r#type: "button",
                            class: "btn btn-secondary",
                            disabled: saving,
                            onclick: move |_| props.on_cancel.call(()),
                            "Cancel"
                        }
                        button {
                            r#type: "submit",
                            class: "btn btn-primary",
                            disabled: saving,
                            if saving { "Saving..." } else { "{props.submit_label}" }
                        }
                    }
                }
            }
        }
    }
}

/// Title for the modal depending on whether an edit target is set
pub fn modal_title(editing: bool, singular_title: &str) -> String {
    if editing {
        format!("Edit {singular_title}")
    } else {
        format!("Add {singular_title}")
    }
}

/// Submit button label depending on whether an edit target is set
pub fn submit_label(editing: bool) -> &'static str {
    if editing { "Update" } else { "Add" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_titles_follow_edit_target() {
        assert_eq!(modal_title(false, "Category"), "Add Category");
        assert_eq!(modal_title(true, "Product"), "Edit Product");
        assert_eq!(submit_label(false), "Add");
        assert_eq!(submit_label(true), "Update");
    }
}
