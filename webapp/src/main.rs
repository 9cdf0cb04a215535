#![allow(non_snake_case)]
use std::rc::Rc;

use dioxus::prelude::*;

use tracing::{Level, error};

mod common;

mod components;

mod about;
mod contact;
mod experience;
mod footer;
mod home;
mod projects;
mod skills;

mod portfolio;
use portfolio::Portfolio;

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

#[component]
pub fn App() -> Element {
    // the content is compiled in, so this only fails on a broken build
    let site = use_hook(|| {
        portfolio_common::site_config()
            .map(Rc::new)
            .map_err(|err| {
                error!("{err:#}");
                format!("{err:#}")
            })
    });

    rsx! {
        style { "{common::style::PORTFOLIO_STYLES}" }
        {
            match site {
                Ok(site) => rsx! { Portfolio { site } },
                Err(err) => rsx! { div { class: "container", "failed to load site content: {err}" } },
            }
        }
    }
}
