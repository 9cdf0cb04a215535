use dioxus::prelude::*;
use portfolio_common::content::{
    Certification, ContactKind, Project, SkillCategory, TimelineEntry, TimelineSide,
};

#[component]
pub fn SectionHeading(title: String) -> Element {
    rsx! {
        div { class: "section-heading",
            h2 { class: "section-title", "{title}" }
            div { class: "section-rule" }
        }
    }
}

#[component]
pub fn IconBadge(icon: String, #[props(default)] class: String) -> Element {
    rsx! {
        div { class: "icon-badge {class}",
            span { class: "icon {icon}" }
        }
    }
}

// a round icon button per link, as shown in the hero and the footer
#[component]
pub fn SocialLinks(links: Vec<(ContactKind, String)>) -> Element {
    rsx! {
        div { class: "social-links",
            for (kind, href) in links {
                a {
                    key: "{href}",
                    class: "btn-round",
                    href: "{href}",
                    target: if kind.is_external() { "_blank" } else { "_self" },
                    rel: if kind.is_external() { "noopener noreferrer" } else { "" },
                    "aria-label": "{kind.label()}",
                    span { class: "icon {kind.icon()}" }
                }
            }
        }
    }
}

#[component]
pub fn SkillCard(category: SkillCategory) -> Element {
    rsx! {
        div { class: "card lift",
            h3 { class: "card-title", "{category.title}" }
            ul { class: "dot-list",
                for skill in category.skills.iter() {
                    li { key: "{skill}", "{skill}" }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct TimelineItemProps {
    entry: TimelineEntry,
    side: TimelineSide,
}

#[component]
pub fn TimelineItem(props: TimelineItemProps) -> Element {
    let entry = props.entry;

    rsx! {
        div { class: "timeline-item {props.side.as_str()}",
            div { class: "timeline-card-slot",
                div { class: "card",
                    h3 { class: "timeline-company", "{entry.company}" }
                    p { class: "timeline-role", "{entry.role}" }
                    p { class: "timeline-period", "{entry.period}" }
                    p { "{entry.description}" }
                }
            }
            div { class: "timeline-marker" }
            div { class: "timeline-spacer" }
        }
    }
}

#[component]
pub fn ProjectCard(project: Project) -> Element {
    rsx! {
        div { class: "card project-card",
            div { class: "project-media",
                img { src: "{project.image}", alt: "{project.title}" }
                div { class: "project-overlay",
                    button { class: "btn btn-primary", r#type: "button",
                        "View Details"
                        span { class: "icon icon-external" }
                    }
                }
            }

            div { class: "project-body",
                h3 { class: "card-title", "{project.title}" }
                p { class: "project-tech", "{project.tech}" }

                h4 { class: "project-features-title", "Key Features:" }
                ul { class: "dot-list",
                    for feature in project.features.iter() {
                        li { key: "{feature}", "{feature}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn CertificationCard(certification: Certification) -> Element {
    rsx! {
        div { class: "card lift",
            IconBadge { icon: "icon-star".to_string(), class: "cert-badge".to_string() }
            h3 { class: "card-title", "{certification.title}" }
            p { class: "cert-issuer", "{certification.issued_by()}" }
        }
    }
}
