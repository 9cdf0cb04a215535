use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};

// static page content
//
// every struct here is deserialized from the embedded site.toml and handed to the views as
// immutable props, hence the PartialEq derives

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub headline: String,
    pub greeting: String,
    pub intro: String,
    pub bio: Vec<String>,
    pub email: String,
    pub phone: String,
    pub portrait: String,
    pub workspace_image: String,
    pub github: SocialLink,
    pub linkedin: SocialLink,
}

impl Profile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn tel(&self) -> String {
        format!("tel:{}", self.phone)
    }

    pub fn copyright(&self, year: i32) -> String {
        format!("© {year} {}. All rights reserved.", self.full_name())
    }

    // all outbound contact points, in the order the contact section lists them
    pub fn contact_links(&self) -> Vec<ContactLink> {
        vec![
            ContactLink {
                kind: ContactKind::Email,
                href: self.mailto(),
                text: self.email.clone(),
            },
            ContactLink {
                kind: ContactKind::Phone,
                href: self.tel(),
                text: self.phone.clone(),
            },
            ContactLink {
                kind: ContactKind::GitHub,
                href: self.github.url.clone(),
                text: self.github.display.clone(),
            },
            ContactLink {
                kind: ContactKind::LinkedIn,
                href: self.linkedin.url.clone(),
                text: self.linkedin.display.clone(),
            },
        ]
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SocialLink {
    pub url: String,
    pub display: String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ContactKind {
    Email,
    Phone,
    GitHub,
    LinkedIn,
}

impl ContactKind {
    pub fn label(self) -> &'static str {
        match self {
            ContactKind::Email => "Email",
            ContactKind::Phone => "Phone",
            ContactKind::GitHub => "GitHub",
            ContactKind::LinkedIn => "LinkedIn",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ContactKind::Email => "icon-mail",
            ContactKind::Phone => "icon-phone",
            ContactKind::GitHub => "icon-github",
            ContactKind::LinkedIn => "icon-linkedin",
        }
    }

    // web profiles open in a new tab, mailto/tel are handed to the os
    pub fn is_external(self) -> bool {
        matches!(self, ContactKind::GitHub | ContactKind::LinkedIn)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContactLink {
    pub kind: ContactKind,
    pub href: String,
    pub text: String,
}

// one of the stat cards in the about section
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Highlight {
    pub title: String,
    pub caption: String,
    pub icon: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SkillCategory {
    pub title: String,
    pub skills: Vec<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct TimelineEntry {
    pub company: String,
    pub role: String,
    pub period: String,
    pub description: String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TimelineSide {
    Left,
    Right,
}

impl TimelineSide {
    // entries alternate, starting on the left
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            TimelineSide::Left
        } else {
            TimelineSide::Right
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TimelineSide::Left => "left",
            TimelineSide::Right => "right",
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Project {
    pub title: String,
    pub tech: String,
    pub features: Vec<String>,
    pub image: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Certification {
    pub title: String,
    pub issuer: String,
}

impl Certification {
    pub fn issued_by(&self) -> String {
        format!("Issued by {}", self.issuer)
    }
}

pub fn current_year() -> i32 {
    Local::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> Profile {
        Profile {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            headline: "Analyst".into(),
            greeting: "Hello, I'm".into(),
            intro: "intro".into(),
            bio: vec![],
            email: "ada@example.com".into(),
            phone: "5550100".into(),
            portrait: "/assets/portrait.jpg".into(),
            workspace_image: "/assets/workspace.jpg".into(),
            github: SocialLink {
                url: "https://github.com/ada".into(),
                display: "github.com/ada".into(),
            },
            linkedin: SocialLink {
                url: "https://linkedin.com/in/ada".into(),
                display: "linkedin.com/in/ada".into(),
            },
        }
    }

    #[test]
    fn contact_links() {
        let links = profile().contact_links();

        let hrefs: Vec<&str> = links.iter().map(|l| l.href.as_str()).collect();
        assert_eq!(
            hrefs,
            [
                "mailto:ada@example.com",
                "tel:5550100",
                "https://github.com/ada",
                "https://linkedin.com/in/ada"
            ]
        );

        let external: Vec<bool> = links.iter().map(|l| l.kind.is_external()).collect();
        assert_eq!(external, [false, false, true, true]);
    }

    #[test]
    fn copyright_line() {
        assert_eq!(
            profile().copyright(2025),
            "© 2025 Ada Lovelace. All rights reserved."
        );
    }

    #[test]
    fn timeline_alternates() {
        let sides: Vec<TimelineSide> = (0..4).map(TimelineSide::for_index).collect();
        assert_eq!(
            sides,
            [
                TimelineSide::Left,
                TimelineSide::Right,
                TimelineSide::Left,
                TimelineSide::Right
            ]
        );
    }
}
