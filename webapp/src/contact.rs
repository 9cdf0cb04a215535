use dioxus::prelude::*;
use portfolio_common::{SectionId, content::Profile};

use crate::components::cards::{IconBadge, SectionHeading};

#[component]
fn FormField(label: String, kind: String, placeholder: String) -> Element {
    rsx! {
        div { class: "form-group",
            label { class: "form-label", "{label}" }
            input { class: "form-input", r#type: "{kind}", placeholder: "{placeholder}" }
        }
    }
}

// the form is presentational only: nothing is sent and the button never submits
#[component]
fn ContactForm() -> Element {
    rsx! {
        form { class: "contact-form",
            div { class: "form-row",
                FormField {
                    label: "Name".to_string(),
                    kind: "text".to_string(),
                    placeholder: "Your Name".to_string(),
                }
                FormField {
                    label: "Email".to_string(),
                    kind: "email".to_string(),
                    placeholder: "Your Email".to_string(),
                }
            }
            FormField {
                label: "Subject".to_string(),
                kind: "text".to_string(),
                placeholder: "Subject".to_string(),
            }
            div { class: "form-group",
                label { class: "form-label", "Message" }
                textarea {
                    class: "form-textarea",
                    placeholder: "Your Message",
                    rows: "5",
                }
            }
            div {
                button { class: "btn btn-primary", r#type: "button", "Send Message" }
            }
        }
    }
}

#[component]
pub fn Contact(profile: Profile) -> Element {
    rsx! {
        section { id: SectionId::Contact.anchor(), class: "section alt",
            div { class: "container",
                SectionHeading { title: "Get In Touch".to_string() }

                div { class: "contact-layout",
                    div { class: "contact-info",
                        h3 { class: "contact-heading", "Contact Information" }

                        div { class: "contact-list",
                            for link in profile.contact_links() {
                                div { key: "{link.href}", class: "contact-item",
                                    IconBadge { icon: link.kind.icon().to_string() }
                                    div {
                                        p { class: "contact-label", "{link.kind.label()}" }
                                        a {
                                            href: "{link.href}",
                                            target: if link.kind.is_external() { "_blank" } else { "_self" },
                                            rel: if link.kind.is_external() { "noopener noreferrer" } else { "" },
                                            "{link.text}"
                                        }
                                    }
                                }
                            }
                        }
                    }

                    ContactForm {}
                }
            }
        }
    }
}
