use dioxus::prelude::*;
use portfolio_common::{SectionId, content::SkillCategory};

use crate::components::cards::{SectionHeading, SkillCard};

#[component]
pub fn Skills(categories: Vec<SkillCategory>) -> Element {
    rsx! {
        section { id: SectionId::Skills.anchor(), class: "section alt",
            div { class: "container",
                SectionHeading { title: "My Skills".to_string() }

                div { class: "card-grid",
                    for category in categories {
                        SkillCard { key: "{category.title}", category: category.clone() }
                    }
                }
            }
        }
    }
}
