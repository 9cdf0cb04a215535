use dioxus::prelude::*;
use portfolio_common::{
    SectionId,
    content::{ContactKind, Profile, current_year},
};

use crate::components::cards::SocialLinks;

#[derive(Clone, PartialEq, Props)]
pub struct FooterProps {
    profile: Profile,
    on_navigate: EventHandler<SectionId>,
}

#[component]
pub fn Footer(props: FooterProps) -> Element {
    let profile = props.profile;
    let on_navigate = props.on_navigate;

    // no phone link down here
    let links = profile
        .contact_links()
        .into_iter()
        .filter(|link| link.kind != ContactKind::Phone)
        .map(|link| (link.kind, link.href))
        .collect::<Vec<_>>();

    rsx! {
        footer { class: "site-footer",
            div { class: "container",
                div { class: "footer-top",
                    div {
                        div { class: "brand",
                            span { class: "brand-first", "{profile.first_name}" }
                            " {profile.last_name}"
                        }
                        p { class: "footer-tagline", "{profile.headline}" }
                    }

                    SocialLinks { links }
                }

                div { class: "footer-bottom",
                    p { class: "footer-copyright", "{profile.copyright(current_year())}" }

                    button {
                        class: "btn-round",
                        r#type: "button",
                        "aria-label": "Back to top",
                        onclick: move |_| on_navigate.call(SectionId::Home),
                        span { class: "icon icon-chevron-up" }
                    }
                }
            }
        }
    }
}
