use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::debug;

// navigable page sections
//
// the declaration order is also the priority order used when picking the active section, so
// when two boundaries overlap at a transition the earlier section wins
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Home,
    About,
    Skills,
    Experience,
    Projects,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Skills,
        SectionId::Experience,
        SectionId::Projects,
        SectionId::Contact,
    ];

    // the element id of the rendered region
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Experience => "experience",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Skills => "Skills",
            SectionId::Experience => "Experience",
            SectionId::Projects => "Projects",
            SectionId::Contact => "Contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.anchor())
    }
}

impl FromStr for SectionId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|section| section.anchor() == s)
            .ok_or_else(|| anyhow::Error::msg(format!("unknown section: {s}")))
    }
}

// layout tunables
//
// all values are in css pixels; the defaults match the fixed-position navigation bar
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct ScrollConfig {
    // distance below the viewport top that decides the active section
    pub activation_line: f64,
    // the nav bar always shows while the page is scrolled less than this
    pub nav_reveal_threshold: u32,
    // space left above a section after jumping to it, so the nav bar doesn't cover the heading
    pub scroll_margin: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        ScrollConfig {
            activation_line: 150.0,
            nav_reveal_threshold: 100,
            scroll_margin: 80.0,
        }
    }
}

// a region's position relative to the current viewport
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegionBounds {
    pub top: f64,
    pub bottom: f64,
}

impl RegionBounds {
    pub fn straddles(&self, line: f64) -> bool {
        self.top <= line && self.bottom >= line
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollRequest {
    // absolute document offset
    pub top: f64,
    pub smooth: bool,
}

// the render boundary
//
// the host presentation layer measures regions by id and performs scrolls; every lookup may
// fail (the region isn't mounted, or the id is wrong), in which case callers skip it
pub trait Viewport {
    fn bounds(&self, id: &str) -> Option<RegionBounds>;

    fn document_top(&self, id: &str) -> Option<f64>;

    fn scroll_to(&self, request: ScrollRequest);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollUpdate {
    pub nav_visible: bool,
    // None means no section straddled the activation line and the caller keeps its value
    pub active_section: Option<SectionId>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollStateDeriver {
    config: ScrollConfig,
}

impl ScrollStateDeriver {
    pub fn new(config: ScrollConfig) -> Self {
        ScrollStateDeriver { config }
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    // shown while scrolling up, or anywhere near the top of the page
    pub fn nav_visible(&self, current: u32, previous: u32) -> bool {
        current < previous || current < self.config.nav_reveal_threshold
    }

    pub fn active_section<V: Viewport + ?Sized>(
        &self,
        sections: &[SectionId],
        viewport: &V,
    ) -> Option<SectionId> {
        let line = self.config.activation_line;

        sections.iter().copied().find(|section| {
            viewport
                .bounds(section.anchor())
                .is_some_and(|bounds| bounds.straddles(line))
        })
    }

    pub fn on_scroll<V: Viewport + ?Sized>(
        &self,
        current: u32,
        previous: u32,
        sections: &[SectionId],
        viewport: &V,
    ) -> ScrollUpdate {
        ScrollUpdate {
            nav_visible: self.nav_visible(current, previous),
            active_section: self.active_section(sections, viewport),
        }
    }

    // the scroll that would bring a region just under the nav bar, if the region exists
    pub fn scroll_request<V: Viewport + ?Sized>(
        &self,
        id: &str,
        viewport: &V,
    ) -> Option<ScrollRequest> {
        let top = viewport.document_top(id)?;

        Some(ScrollRequest {
            top: (top - self.config.scroll_margin).max(0.0),
            smooth: true,
        })
    }

    // returns false (and does nothing) when the region can't be found
    pub fn scroll_to_section<V: Viewport + ?Sized>(&self, id: &str, viewport: &V) -> bool {
        match self.scroll_request(id, viewport) {
            Some(request) => {
                debug!({ section = id, top = request.top }, "scrolling to section");
                viewport.scroll_to(request);
                true
            }
            None => {
                debug!({ section = id }, "section not found, ignoring scroll request");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::StaticViewport;

    fn two_sections() -> StaticViewport {
        StaticViewport::new()
            .with_region("home", 0.0, 800.0)
            .with_region("about", 800.0, 800.0)
    }

    #[test]
    fn section_names_parse() {
        for section in SectionId::ALL {
            assert_eq!(section.anchor().parse::<SectionId>().unwrap(), section);
        }

        assert!("nonexistent".parse::<SectionId>().is_err());
        assert!("Home".parse::<SectionId>().is_err());
    }

    #[test]
    fn nav_visibility_examples() {
        let deriver = ScrollStateDeriver::default();

        assert!(deriver.nav_visible(50, 200));
        assert!(!deriver.nav_visible(150, 120));
        assert!(deriver.nav_visible(50, 30));
        assert!(deriver.nav_visible(0, 0));
        assert!(!deriver.nav_visible(100, 100));
        assert!(deriver.nav_visible(99, 500));
    }

    #[test]
    fn first_straddling_section_wins() {
        let deriver = ScrollStateDeriver::default();
        let viewport = two_sections();
        viewport.set_scroll(50.0);

        assert_eq!(
            viewport.bounds("home"),
            Some(RegionBounds {
                top: -50.0,
                bottom: 750.0
            })
        );

        let update = deriver.on_scroll(50, 0, &[SectionId::Home, SectionId::About], &viewport);
        assert_eq!(update.active_section, Some(SectionId::Home));
        assert!(update.nav_visible);
    }

    #[test]
    fn overlap_resolves_to_earlier_section() {
        let deriver = ScrollStateDeriver::default();

        // both regions touch the activation line exactly
        let viewport = two_sections();
        viewport.set_scroll(650.0);

        assert_eq!(
            deriver.active_section(&[SectionId::Home, SectionId::About], &viewport),
            Some(SectionId::Home)
        );
        assert_eq!(
            deriver.active_section(&[SectionId::About, SectionId::Home], &viewport),
            Some(SectionId::About)
        );
    }

    #[test]
    fn later_section_matches_after_scrolling() {
        let deriver = ScrollStateDeriver::default();
        let viewport = two_sections();
        viewport.set_scroll(900.0);

        let update = deriver.on_scroll(900, 850, &SectionId::ALL, &viewport);
        assert_eq!(update.active_section, Some(SectionId::About));
        assert!(!update.nav_visible);
    }

    #[test]
    fn missing_regions_are_skipped() {
        let deriver = ScrollStateDeriver::default();
        let viewport = StaticViewport::new().with_region("skills", 0.0, 1000.0);

        assert_eq!(
            deriver.active_section(&SectionId::ALL, &viewport),
            Some(SectionId::Skills)
        );
    }

    #[test]
    fn gap_between_sections_yields_no_update() {
        let deriver = ScrollStateDeriver::default();
        let viewport = StaticViewport::new()
            .with_region("home", 0.0, 100.0)
            .with_region("about", 400.0, 400.0);
        viewport.set_scroll(100.0);

        let update = deriver.on_scroll(100, 90, &SectionId::ALL, &viewport);
        assert_eq!(update.active_section, None);
    }

    #[test]
    fn empty_section_list() {
        let deriver = ScrollStateDeriver::default();
        let update = deriver.on_scroll(500, 600, &[], &two_sections());

        assert!(update.nav_visible);
        assert_eq!(update.active_section, None);
    }

    #[test]
    fn custom_activation_line() {
        let deriver = ScrollStateDeriver::new(ScrollConfig {
            activation_line: 10.0,
            ..ScrollConfig::default()
        });
        let viewport = two_sections();
        viewport.set_scroll(795.0);

        assert_eq!(
            deriver.active_section(&SectionId::ALL, &viewport),
            Some(SectionId::About)
        );
    }

    #[test]
    fn scroll_request_leaves_room_for_nav() {
        let deriver = ScrollStateDeriver::default();
        let viewport = two_sections();

        assert_eq!(
            deriver.scroll_request("about", &viewport),
            Some(ScrollRequest {
                top: 720.0,
                smooth: true
            })
        );

        // can't scroll above the top of the page
        assert_eq!(
            deriver.scroll_request("home", &viewport).map(|r| r.top),
            Some(0.0)
        );
    }

    #[test]
    fn scroll_to_missing_section_is_a_noop() {
        let deriver = ScrollStateDeriver::default();
        let viewport = two_sections();
        viewport.set_scroll(300.0);

        assert!(!deriver.scroll_to_section("nonexistent", &viewport));
        assert!(viewport.requests().is_empty());
        assert_eq!(viewport.scroll_y(), 300.0);
    }

    #[test]
    fn scroll_to_section_moves_viewport() {
        let deriver = ScrollStateDeriver::default();
        let viewport = two_sections();

        assert!(deriver.scroll_to_section("about", &viewport));
        assert_eq!(viewport.requests().len(), 1);
        assert_eq!(viewport.scroll_y(), 720.0);
    }
}
