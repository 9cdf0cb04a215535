use std::fmt;

use serde::{Deserialize, Serialize};

pub fn toggle_dark_mode(current: bool) -> bool {
    !current
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark_mode(dark_mode: bool) -> Self {
        if dark_mode { Theme::Dark } else { Theme::Light }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggled(self) -> Self {
        Theme::from_dark_mode(toggle_dark_mode(self.is_dark()))
    }

    // class applied to the page root
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggle_label(self) -> String {
        format!("Switch to {} theme", self.toggled().as_str())
    }

    // the toggle shows where it will take you
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Light => "icon-moon",
            Theme::Dark => "icon-sun",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_is_an_involution() {
        for value in [false, true] {
            assert_eq!(toggle_dark_mode(toggle_dark_mode(value)), value);
            assert_ne!(toggle_dark_mode(value), value);
        }
    }

    #[test]
    fn theme_follows_flag() {
        assert_eq!(Theme::from_dark_mode(false), Theme::Light);
        assert_eq!(Theme::from_dark_mode(true), Theme::Dark);
        assert_eq!(Theme::default().toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn toggle_presentation() {
        assert_eq!(Theme::Light.toggle_label(), "Switch to dark theme");
        assert_eq!(Theme::Dark.toggle_label(), "Switch to light theme");
        assert_eq!(Theme::Light.toggle_icon(), "icon-moon");
        assert_eq!(Theme::Dark.toggle_icon(), "icon-sun");
        assert_eq!(Theme::Dark.to_string(), "dark");
    }
}
