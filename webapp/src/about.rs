use dioxus::prelude::*;
use portfolio_common::{
    SectionId,
    content::{Highlight, Profile},
};

use crate::components::cards::{IconBadge, SectionHeading};

#[component]
pub fn About(profile: Profile, highlights: Vec<Highlight>) -> Element {
    rsx! {
        section { id: SectionId::About.anchor(), class: "section",
            div { class: "container",
                SectionHeading { title: "About Me".to_string() }

                div { class: "about-layout",
                    div { class: "about-image",
                        div { class: "about-image-frame",
                            img {
                                src: "{profile.workspace_image}",
                                alt: "{profile.full_name()} Workspace",
                            }
                        }
                    }

                    div { class: "about-text",
                        for paragraph in profile.bio.iter() {
                            p { key: "{paragraph}", "{paragraph}" }
                        }

                        div { class: "highlights",
                            for highlight in highlights {
                                div { key: "{highlight.title}", class: "highlight",
                                    IconBadge { icon: highlight.icon.clone() }
                                    div {
                                        p { class: "highlight-title", "{highlight.title}" }
                                        p { class: "highlight-caption", "{highlight.caption}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
