use dioxus::prelude::*;
use portfolio_common::{
    SectionId,
    content::{Certification, Project},
};

use crate::components::cards::{CertificationCard, ProjectCard, SectionHeading};

#[component]
pub fn Projects(projects: Vec<Project>) -> Element {
    rsx! {
        section { id: SectionId::Projects.anchor(), class: "section alt",
            div { class: "container",
                SectionHeading { title: "Featured Projects".to_string() }

                div { class: "card-grid",
                    for project in projects {
                        ProjectCard { key: "{project.title}", project: project.clone() }
                    }
                }
            }
        }
    }
}

// not a navigation target, so it carries no anchor
#[component]
pub fn Certifications(certifications: Vec<Certification>) -> Element {
    rsx! {
        section { class: "section",
            div { class: "container",
                SectionHeading { title: "Certifications".to_string() }

                div { class: "card-grid",
                    for certification in certifications {
                        CertificationCard {
                            key: "{certification.title}",
                            certification: certification.clone(),
                        }
                    }
                }
            }
        }
    }
}
