//! Records rendered by the portfolio page.

use serde::Serialize;

use crate::{icon::Icon, state::Section};

/// Owner of the portfolio and the hero copy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Profile {
    /// First and last name, shown on two lines in the hero.
    pub first_name: &'static str,
    pub last_name: &'static str,

    /// Current role line under the name.
    pub headline: &'static str,

    /// Years of experience, highlighted in the summary.
    pub experience_years: &'static str,

    /// Summary paragraph following the years highlight.
    pub summary: &'static str,

    /// Secondary paragraph about the current position.
    pub current_focus: &'static str,

    /// Portrait image path, relative to the site root.
    pub portrait: Option<&'static str>,

    /// Outbound links shown in the hero.
    pub links: &'static [ContactLink],

    /// Cards shown in the contact section.
    pub contact_cards: &'static [ContactCard],

    /// Contact section lead text.
    pub contact_blurb: &'static str,
}

impl Profile {
    /// Full display name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// An outbound link (email, code hosting, professional network, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContactLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: Icon,
}

/// A larger link card in the contact section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContactCard {
    pub heading: &'static str,
    pub detail: &'static str,
    pub href: &'static str,
    pub icon: Icon,
}

/// An entry in the fixed portfolio navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub section: Section,
    pub label: &'static str,
    pub icon: Icon,
}

/// A group of related skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkillCategory {
    pub title: &'static str,
    pub icon: Icon,

    /// Gradient class pair, e.g. `from-purple-500 to-pink-500`.
    pub color: &'static str,
    pub skills: &'static [&'static str],
}

/// One position in the experience timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Experience {
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub location: &'static str,

    /// Employment type (Full-time, Founder, ...).
    pub kind: &'static str,
    pub color: &'static str,
    pub icon: Icon,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
    pub technologies: &'static [&'static str],

    /// Company website, rendered as "Visit Website" when present.
    pub website: Option<&'static str>,

    /// Company logo URL. Hidden when it fails to load.
    pub logo: Option<&'static str>,
}

impl Experience {
    /// `location • kind` line under the company name.
    pub fn location_line(&self) -> String {
        format!("{} • {}", self.location, self.kind)
    }
}

/// Education and research block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Education {
    pub role: &'static str,
    pub institution: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub publication: &'static str,
    pub topics: &'static [&'static str],
}
