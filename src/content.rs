use chrono::{DateTime, Datelike};
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, sync::LazyLock};

use crate::error::{Error, Result};
use crate::sections::Section;
use crate::typing::TypingConfig;

const PORTFOLIO_FILE: &str = "portfolio.json";

/// Element ids the page renders its sections under. The `sections` list in
/// the content file must name exactly these, in this order.
pub mod anchors {
    pub const HOME: &str = "home";
    pub const ABOUT: &str = "about";
    pub const SKILLS: &str = "my-skills";
    pub const SERVICES: &str = "services";
    pub const PORTFOLIO: &str = "portfolio";
    pub const CONTACT: &str = "contact";

    pub const ALL: [&str; 6] = [HOME, ABOUT, SKILLS, SERVICES, PORTFOLIO, CONTACT];
}

static PORTFOLIO: LazyLock<Result<Portfolio>> = LazyLock::new(load_portfolio);

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fact {
    pub icon: String,
    pub text: String,
    #[serde(default)]
    pub href: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub tagline: String,
    /// Headline phrases cycled by the typing animation.
    #[serde(default)]
    pub phrases: Vec<String>,
    pub image: String,
    pub bio: Vec<String>,
    pub facts: Vec<Fact>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub icon: String,
    pub title: String,
    pub description: String,
    pub points: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub sections: Vec<Section>,
    pub skills: Vec<Skill>,
    pub services: Vec<Service>,
    pub projects: Vec<Project>,
}

impl Portfolio {
    pub fn from_json(content: &str) -> Result<Self> {
        let portfolio =
            serde_json::from_str::<Portfolio>(content).map_err(|e| Error::Content(e.to_string()))?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    fn validate(&self) -> Result<()> {
        if self.sections.is_empty() {
            return Err(Error::NoSections);
        }
        let mut seen = HashSet::new();
        for section in &self.sections {
            if !seen.insert(section.id.as_str()) {
                return Err(Error::DuplicateSection(section.id.clone()));
            }
        }
        Ok(())
    }

    pub fn typing_config(&self) -> TypingConfig {
        TypingConfig::new(self.profile.phrases.iter().cloned())
    }
}

fn load_portfolio() -> Result<Portfolio> {
    let file = Assets::get(PORTFOLIO_FILE)
        .ok_or_else(|| Error::MissingContent(PORTFOLIO_FILE.to_string()))?;
    let content = std::str::from_utf8(&file.data).map_err(|e| Error::Content(e.to_string()))?;
    Portfolio::from_json(content)
}

/// Embedded portfolio content, parsed on first use.
pub fn portfolio() -> Result<&'static Portfolio> {
    PORTFOLIO.as_ref().map_err(Clone::clone)
}

/// Year the site was built, from the stamp `build.rs` leaves behind.
pub fn build_year() -> Option<i32> {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .ok()
        .map(|d| d.year())
}
