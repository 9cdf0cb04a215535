use dioxus::prelude::*;
use portfolio_common::{SectionId, UiFlags};

#[derive(Clone, PartialEq, Props)]
struct NavBarButtonProps {
    section: SectionId,
    active: bool,
    on_navigate: EventHandler<SectionId>,
}

#[component]
fn NavBarButton(props: NavBarButtonProps) -> Element {
    let section = props.section;

    rsx! {
        button {
            class: if props.active { "nav-link active" } else { "nav-link" },
            onclick: move |_| props.on_navigate.call(section),
            "{section.label()}"
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct NavBarProps {
    flags: UiFlags,
    first_name: String,
    last_name: String,
    on_navigate: EventHandler<SectionId>,
    on_toggle_theme: EventHandler<()>,
}

#[component]
pub fn NavBar(props: NavBarProps) -> Element {
    let flags = props.flags;
    let theme = flags.theme();

    rsx! {
        header { class: if flags.nav_visible { "app-header" } else { "app-header hidden" },
            div { class: "container nav-container",
                div { class: "brand",
                    span { class: "brand-first", "{props.first_name}" }
                    " {props.last_name}"
                }

                nav { class: "nav-links",
                    for section in SectionId::ALL {
                        NavBarButton {
                            key: "{section}",
                            section,
                            active: flags.active_section == section,
                            on_navigate: props.on_navigate,
                        }
                    }
                }

                button {
                    class: "btn-round theme-toggle",
                    "aria-label": "{theme.toggle_label()}",
                    "aria-pressed": "{theme.is_dark()}",
                    onclick: move |_| props.on_toggle_theme.call(()),
                    span { class: "icon {theme.toggle_icon()}" }
                }
            }
        }
    }
}
