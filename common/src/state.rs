use tracing::debug;

use crate::{
    scroll::{ScrollStateDeriver, ScrollUpdate, SectionId, Viewport},
    theme::{Theme, toggle_dark_mode},
};

// the last two observed scroll offsets
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ScrollState {
    pub current: u32,
    pub previous: u32,
}

impl ScrollState {
    pub fn record(&mut self, offset: u32) {
        self.previous = self.current;
        self.current = offset;
    }
}

// everything the view renders from
//
// nav_visible and active_section are only ever written through apply(); dark_mode only
// through toggle_dark_mode()
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct UiFlags {
    pub nav_visible: bool,
    pub active_section: SectionId,
    pub dark_mode: bool,
}

impl Default for UiFlags {
    fn default() -> Self {
        UiFlags {
            nav_visible: true,
            active_section: SectionId::Home,
            dark_mode: false,
        }
    }
}

impl UiFlags {
    // returns true if anything changed
    pub fn apply(&mut self, update: ScrollUpdate) -> bool {
        let before = *self;

        self.nav_visible = update.nav_visible;
        if let Some(section) = update.active_section {
            self.active_section = section;
        }

        *self != before
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = toggle_dark_mode(self.dark_mode);
    }

    pub fn theme(&self) -> Theme {
        Theme::from_dark_mode(self.dark_mode)
    }
}

// per-mount page state, owned by the top-level view
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PageState {
    pub scroll: ScrollState,
    pub flags: UiFlags,
}

impl PageState {
    // apply one scroll event, returning true if the rendered flags changed
    pub fn handle_scroll<V: Viewport + ?Sized>(
        &mut self,
        offset: u32,
        deriver: &ScrollStateDeriver,
        viewport: &V,
    ) -> bool {
        self.scroll.record(offset);

        let update = deriver.on_scroll(
            self.scroll.current,
            self.scroll.previous,
            &SectionId::ALL,
            viewport,
        );

        let changed = self.flags.apply(update);
        if changed {
            debug!(
                {
                    offset = offset,
                    nav_visible = self.flags.nav_visible,
                    active_section = %self.flags.active_section
                },
                "page flags changed"
            );
        }

        changed
    }

    pub fn toggle_dark_mode(&mut self) {
        self.flags.toggle_dark_mode();
        debug!({ theme = %self.flags.theme() }, "toggled theme");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::StaticViewport;

    fn page() -> StaticViewport {
        SectionId::ALL
            .iter()
            .enumerate()
            .fold(StaticViewport::new(), |viewport, (i, section)| {
                viewport.with_region(section.anchor(), i as f64 * 1000.0, 1000.0)
            })
    }

    #[test]
    fn defaults_at_mount() {
        let state = PageState::default();

        assert_eq!(state.scroll, ScrollState::default());
        assert!(state.flags.nav_visible);
        assert_eq!(state.flags.active_section, SectionId::Home);
        assert!(!state.flags.dark_mode);
    }

    #[test]
    fn previous_offset_tracks_last_event() {
        let deriver = ScrollStateDeriver::default();
        let viewport = page();
        let mut state = PageState::default();

        for offset in [40, 300, 250] {
            viewport.set_scroll(offset as f64);
            state.handle_scroll(offset, &deriver, &viewport);
            assert_eq!(state.scroll.current, offset);
        }

        assert_eq!(state.scroll.previous, 300);
        // scrolled up
        assert!(state.flags.nav_visible);
    }

    #[test]
    fn reports_only_real_changes() {
        let deriver = ScrollStateDeriver::default();
        let viewport = page();
        let mut state = PageState::default();

        viewport.set_scroll(20.0);
        assert!(!state.handle_scroll(20, &deriver, &viewport));

        viewport.set_scroll(400.0);
        assert!(state.handle_scroll(400, &deriver, &viewport));
        assert!(!state.flags.nav_visible);

        viewport.set_scroll(1500.0);
        assert!(state.handle_scroll(1500, &deriver, &viewport));
        assert_eq!(state.flags.active_section, SectionId::About);

        viewport.set_scroll(1600.0);
        assert!(!state.handle_scroll(1600, &deriver, &viewport));
    }

    #[test]
    fn active_section_retained_without_match() {
        let deriver = ScrollStateDeriver::default();
        let viewport = StaticViewport::new()
            .with_region("home", 0.0, 500.0)
            .with_region("skills", 2000.0, 500.0);
        let mut state = PageState::default();

        viewport.set_scroll(2000.0);
        state.handle_scroll(2000, &deriver, &viewport);
        assert_eq!(state.flags.active_section, SectionId::Skills);

        // nothing straddles the line in the gap
        viewport.set_scroll(1000.0);
        state.handle_scroll(1000, &deriver, &viewport);
        assert_eq!(state.flags.active_section, SectionId::Skills);
        assert!(state.flags.nav_visible);
    }

    #[test]
    fn dark_mode_is_independent_of_scroll() {
        let deriver = ScrollStateDeriver::default();
        let viewport = page();
        let mut state = PageState::default();

        state.toggle_dark_mode();
        assert_eq!(state.flags.theme(), Theme::Dark);

        viewport.set_scroll(3200.0);
        state.handle_scroll(3200, &deriver, &viewport);
        assert!(state.flags.dark_mode);
        assert_eq!(state.flags.active_section, SectionId::Experience);

        state.toggle_dark_mode();
        assert!(!state.flags.dark_mode);
    }
}
