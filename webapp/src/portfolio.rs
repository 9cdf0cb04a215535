use std::{cell::RefCell, rc::Rc};

use dioxus::prelude::*;
use portfolio_common::{PageState, ScrollStateDeriver, SectionId, SiteConfig, UiFlags};
use tracing::{error, info};

use crate::{
    about::About,
    common::dom::{BrowserViewport, ScrollSubscription},
    components::navigation::NavBar,
    contact::Contact,
    experience::Experience,
    footer::Footer,
    home::Hero,
    projects::{Certifications, Projects},
    skills::Skills,
};

fn scroll_to_section(deriver: &ScrollStateDeriver, section: SectionId) {
    match BrowserViewport::new() {
        Ok(viewport) => {
            deriver.scroll_to_section(section.anchor(), &viewport);
        }
        Err(err) => error!("failed to scroll to {section}: {err}"),
    }
}

// install the window scroll listener for the lifetime of the calling component
//
// every event updates the page state and publishes the flags only when they changed, so
// plain scrolling within a section doesn't re-render anything
fn use_scroll_tracking(
    page: Rc<RefCell<PageState>>,
    deriver: ScrollStateDeriver,
    flags: Signal<UiFlags>,
) -> Option<Rc<ScrollSubscription>> {
    use_hook(move || {
        let mut flags = flags;

        let subscription = BrowserViewport::new().and_then(|viewport| {
            ScrollSubscription::install(move || {
                let offset = viewport.scroll_y();

                let mut page = page.borrow_mut();
                if page.handle_scroll(offset, &deriver, &viewport) {
                    flags.set(page.flags);
                }
            })
        });

        match subscription {
            Ok(subscription) => Some(Rc::new(subscription)),
            Err(err) => {
                error!("scroll tracking disabled: {err}");
                None
            }
        }
    })
}

#[component]
pub fn Portfolio(site: Rc<SiteConfig>) -> Element {
    let deriver = ScrollStateDeriver::new(site.scroll);

    let page = use_hook(|| {
        info!("mounting portfolio");
        Rc::new(RefCell::new(PageState::default()))
    });
    let mut flags = use_signal(UiFlags::default);

    use_scroll_tracking(page.clone(), deriver, flags);

    let toggle_theme = move |_: ()| {
        let mut page = page.borrow_mut();
        page.toggle_dark_mode();
        flags.set(page.flags);
    };

    let navigate = move |section: SectionId| scroll_to_section(&deriver, section);

    let current = flags();
    let profile = &site.profile;

    rsx! {
        div { class: "portfolio {current.theme()}",
            NavBar {
                flags: current,
                first_name: profile.first_name.clone(),
                last_name: profile.last_name.clone(),
                on_navigate: navigate,
                on_toggle_theme: toggle_theme,
            }

            Hero { profile: profile.clone(), on_navigate: navigate }
            About {
                profile: profile.clone(),
                highlights: site.highlights.clone(),
            }
            Skills { categories: site.skills.clone() }
            Experience { entries: site.experience.clone() }
            Projects { projects: site.projects.clone() }
            Certifications { certifications: site.certifications.clone() }
            Contact { profile: profile.clone() }
            Footer { profile: profile.clone(), on_navigate: navigate }
        }
    }
}
