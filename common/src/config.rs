use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument};

use crate::{
    content::{Certification, Highlight, Profile, Project, SkillCategory, TimelineEntry},
    scroll::ScrollConfig,
};

// the copy for the page is compiled into the binary
pub const SITE_TOML: &str = include_str!("../site.toml");

// portfolio configuration
//
// this struct holds the layout tunables along with all of the page content
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub scroll: ScrollConfig,

    pub profile: Profile,
    pub highlights: Vec<Highlight>,
    pub skills: Vec<SkillCategory>,
    pub experience: Vec<TimelineEntry>,
    pub projects: Vec<Project>,
    pub certifications: Vec<Certification>,
}

// in order to extract the config table from a larger document, we need to specify it
// as a subtable of the root node, i.e. a substruct
#[derive(Debug, Deserialize, Serialize)]
struct TomlConfigFile {
    config: SiteConfig,
}

#[instrument(level=Level::DEBUG, skip(doc))]
pub fn read_config(doc: &str) -> Result<SiteConfig> {
    debug!("parsing site config");

    let data: TomlConfigFile = toml::from_str(doc).context("failed to parse site config")?;

    debug!(
        {
            skills = data.config.skills.len(),
            experience = data.config.experience.len(),
            projects = data.config.projects.len()
        },
        "successfully parsed site config"
    );
    Ok(data.config)
}

pub fn site_config() -> Result<SiteConfig> {
    read_config(SITE_TOML)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_parses() {
        let config = site_config().unwrap();

        assert_eq!(config.scroll, ScrollConfig::default());
        assert_eq!(config.profile.full_name(), "Abhishek Kumar");
        assert_eq!(config.highlights.len(), 4);
        assert_eq!(config.skills.len(), 4);
        assert_eq!(config.experience.len(), 4);
        assert_eq!(config.projects.len(), 5);
        assert_eq!(config.certifications.len(), 4);
    }

    #[test]
    fn scroll_table_is_optional() {
        let doc = SITE_TOML.replace("[config.scroll]", "[unused]");
        let config = read_config(&doc).unwrap();

        assert_eq!(config.scroll, ScrollConfig::default());
    }

    #[test]
    fn partial_scroll_table_keeps_defaults() {
        let doc = SITE_TOML
            .replace("activation_line = 150.0", "activation_line = 200.0")
            .replace("scroll_margin = 80.0\n", "");
        let config = read_config(&doc).unwrap();

        assert_eq!(config.scroll.activation_line, 200.0);
        assert_eq!(config.scroll.scroll_margin, 80.0);
    }

    #[test]
    fn malformed_config_is_an_error() {
        let err = read_config("[config]\nprofile = 3").unwrap_err();
        assert!(err.to_string().contains("failed to parse site config"));
    }
}
