use anyhow::Result;
use portfolio_common::{RegionBounds, ScrollRequest, Viewport};
use tracing::debug;
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{Element, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| anyhow::Error::msg("no global window exists"))
}

// the live page, measured through the dom
pub struct BrowserViewport {
    window: Window,
}

impl BrowserViewport {
    pub fn new() -> Result<Self> {
        Ok(BrowserViewport { window: window()? })
    }

    // overscroll (rubber banding) can briefly report negative offsets
    pub fn scroll_y(&self) -> u32 {
        match self.window.scroll_y() {
            Ok(y) => y.max(0.0).round() as u32,
            Err(_) => 0,
        }
    }

    fn element(&self, id: &str) -> Option<Element> {
        self.window.document()?.get_element_by_id(id)
    }
}

impl Viewport for BrowserViewport {
    fn bounds(&self, id: &str) -> Option<RegionBounds> {
        let rect = self.element(id)?.get_bounding_client_rect();

        Some(RegionBounds {
            top: rect.top(),
            bottom: rect.bottom(),
        })
    }

    fn document_top(&self, id: &str) -> Option<f64> {
        let element = self.element(id)?;
        let element = element.dyn_ref::<HtmlElement>()?;

        Some(element.offset_top() as f64)
    }

    fn scroll_to(&self, request: ScrollRequest) {
        let options = ScrollToOptions::new();
        options.set_top(request.top);
        options.set_behavior(if request.smooth {
            ScrollBehavior::Smooth
        } else {
            ScrollBehavior::Auto
        });

        self.window.scroll_to_with_scroll_to_options(&options);
    }
}

// a window scroll listener that is removed when dropped
//
// the owning component keeps this in its hook storage, so the handler can never outlive the
// view it writes to
pub struct ScrollSubscription {
    window: Window,
    handler: Closure<dyn FnMut()>,
}

impl ScrollSubscription {
    pub fn install(handler: impl FnMut() + 'static) -> Result<Self> {
        let window = window()?;
        let handler = Closure::<dyn FnMut()>::new(handler);

        window
            .add_event_listener_with_callback("scroll", handler.as_ref().unchecked_ref())
            .map_err(|err| anyhow::Error::msg(format!("failed to add scroll listener: {err:?}")))?;

        debug!("installed scroll listener");
        Ok(ScrollSubscription { window, handler })
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        if self
            .window
            .remove_event_listener_with_callback("scroll", self.handler.as_ref().unchecked_ref())
            .is_err()
        {
            tracing::warn!("failed to remove scroll listener");
        }

        debug!("removed scroll listener");
    }
}
