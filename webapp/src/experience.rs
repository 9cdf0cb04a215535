use dioxus::prelude::*;
use portfolio_common::{
    SectionId,
    content::{TimelineEntry, TimelineSide},
};

use crate::components::cards::{SectionHeading, TimelineItem};

#[component]
pub fn Experience(entries: Vec<TimelineEntry>) -> Element {
    rsx! {
        section { id: SectionId::Experience.anchor(), class: "section",
            div { class: "container",
                SectionHeading { title: "Work Experience".to_string() }

                div { class: "timeline",
                    for (i, entry) in entries.into_iter().enumerate() {
                        TimelineItem {
                            key: "{i}",
                            entry,
                            side: TimelineSide::for_index(i),
                        }
                    }
                }
            }
        }
    }
}
