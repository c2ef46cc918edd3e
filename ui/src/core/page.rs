//! Page identifiers the shell can route between.
//!
//! The set is closed: every view the shell knows how to render has a variant
//! here. String identifiers only appear at the edges (`FromStr` for strict
//! parsing, [`Page::resolve`] for the lenient fallback the bottom bar and
//! legacy callers rely on).

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Homepage,
    Classroom,
    Learn,
    VirtualLab,
    Leaderboard,
    Events,
    Teacher,
    Parents,
    Arena,
}

/// Returned by the strict parser for identifiers outside the closed set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown page identifier `{0}`")]
pub struct UnknownPage(pub String);

impl Page {
    pub const DEFAULT: Page = Page::Homepage;

    /// Bottom navigation order (left to right).
    pub const NAV_ORDER: [Page; 9] = [
        Page::Arena,
        Page::Homepage,
        Page::Learn,
        Page::VirtualLab,
        Page::Leaderboard,
        Page::Classroom,
        Page::Events,
        Page::Teacher,
        Page::Parents,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Page::Homepage => "homepage",
            Page::Classroom => "classroom",
            Page::Learn => "learn",
            Page::VirtualLab => "virtuallab",
            Page::Leaderboard => "leaderboard",
            Page::Events => "events",
            Page::Teacher => "teacher",
            Page::Parents => "parents",
            Page::Arena => "arena",
        }
    }

    /// Lenient lookup: unknown identifiers fall back to [`Page::DEFAULT`].
    pub fn resolve(id: &str) -> Page {
        match id.parse() {
            Ok(page) => page,
            Err(UnknownPage(raw)) => {
                tracing::warn!(id = %raw, "unknown page identifier, showing homepage");
                Page::DEFAULT
            }
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Page::Arena => "🎮",
            Page::Homepage => "🏠",
            Page::Learn => "📚",
            Page::VirtualLab => "🧪",
            Page::Leaderboard => "🏆",
            Page::Classroom => "🏫",
            Page::Events => "📅",
            Page::Teacher => "👨‍🏫",
            Page::Parents => "👨‍👩‍👧‍👦",
        }
    }

    /// Localization key for the bottom bar label.
    pub fn label_key(self) -> &'static str {
        match self {
            Page::Arena => "nav-arena",
            Page::Homepage => "nav-home",
            Page::Learn => "nav-learn",
            Page::VirtualLab => "nav-labs",
            Page::Leaderboard => "nav-ranks",
            Page::Classroom => "nav-class",
            Page::Events => "nav-events",
            Page::Teacher => "nav-teacher",
            Page::Parents => "nav-parents",
        }
    }
}

impl FromStr for Page {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::NAV_ORDER
            .into_iter()
            .find(|page| page.id() == s)
            .ok_or_else(|| UnknownPage(s.to_string()))
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
