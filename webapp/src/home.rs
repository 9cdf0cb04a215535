use dioxus::prelude::*;
use portfolio_common::{SectionId, content::Profile};

use crate::components::cards::SocialLinks;

#[derive(Clone, PartialEq, Props)]
pub struct HeroProps {
    profile: Profile,
    on_navigate: EventHandler<SectionId>,
}

#[component]
pub fn Hero(props: HeroProps) -> Element {
    let profile = props.profile;
    let on_navigate = props.on_navigate;

    let links = profile
        .contact_links()
        .into_iter()
        .map(|link| (link.kind, link.href))
        .collect::<Vec<_>>();

    rsx! {
        section { id: SectionId::Home.anchor(), class: "hero",
            div { class: "hero-backdrop",
                div { class: "hero-gradient" }
                div { class: "hero-grid",
                    for i in 0..100 {
                        div { key: "{i}" }
                    }
                }
            }

            div { class: "container hero-layout",
                div { class: "hero-text",
                    span { class: "hero-greeting", "{profile.greeting}" }
                    h1 { class: "hero-title", "{profile.full_name()}" }
                    h2 { class: "hero-headline", "{profile.headline}" }
                    p { class: "hero-intro", "{profile.intro}" }

                    div { class: "hero-actions",
                        button { class: "btn btn-primary", r#type: "button",
                            "View Resume"
                            span { class: "icon icon-arrow" }
                        }
                        button {
                            class: "btn btn-dark",
                            r#type: "button",
                            onclick: move |_| on_navigate.call(SectionId::Contact),
                            "Contact Me"
                            span { class: "icon icon-arrow" }
                        }
                    }

                    SocialLinks { links }
                }

                div { class: "hero-portrait",
                    div { class: "hero-portrait-frame",
                        img { src: "{profile.portrait}", alt: "{profile.full_name()}" }
                    }
                }
            }
        }
    }
}
