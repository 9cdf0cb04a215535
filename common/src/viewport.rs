use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
};

use crate::scroll::{RegionBounds, ScrollRequest, Viewport};

// an in-memory page layout
//
// regions are laid out at fixed document offsets and the viewport position is tracked
// explicitly, which is enough to drive the scroll logic away from a browser (prerendering,
// tests).  scroll requests are applied immediately and kept for inspection
#[derive(Debug, Default)]
pub struct StaticViewport {
    // id -> (document top, height)
    regions: HashMap<String, (f64, f64)>,
    scroll_y: Cell<f64>,
    requests: RefCell<Vec<ScrollRequest>>,
}

impl StaticViewport {
    pub fn new() -> Self {
        StaticViewport::default()
    }

    pub fn with_region(mut self, id: impl Into<String>, top: f64, height: f64) -> Self {
        self.regions.insert(id.into(), (top, height));
        self
    }

    pub fn set_scroll(&self, y: f64) {
        self.scroll_y.set(y.max(0.0));
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_y.get()
    }

    pub fn requests(&self) -> Vec<ScrollRequest> {
        self.requests.borrow().clone()
    }
}

impl Viewport for StaticViewport {
    fn bounds(&self, id: &str) -> Option<RegionBounds> {
        let (top, height) = self.regions.get(id)?;
        let offset = self.scroll_y.get();

        Some(RegionBounds {
            top: top - offset,
            bottom: top + height - offset,
        })
    }

    fn document_top(&self, id: &str) -> Option<f64> {
        self.regions.get(id).map(|(top, _)| *top)
    }

    fn scroll_to(&self, request: ScrollRequest) {
        self.requests.borrow_mut().push(request);
        self.set_scroll(request.top);
    }
}
