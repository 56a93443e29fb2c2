//! Portals and the screens each one exposes.

use serde::{Deserialize, Serialize};

/// Which tenant-facing portal is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Portal {
    #[default]
    Admin,
    Organization,
    Vendor,
    Candidate,
}

/// A list screen backed by one record collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Screen {
    Occupations,
    Vendors,
    Compliance,
    Candidates,
}

impl Portal {
    pub const ALL: [Portal; 4] = [
        Portal::Admin,
        Portal::Organization,
        Portal::Vendor,
        Portal::Candidate,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Portal::Admin => "Admin",
            Portal::Organization => "Organization",
            Portal::Vendor => "Vendor",
            Portal::Candidate => "Candidate",
        }
    }

    /// Screens in tab order.
    pub fn screens(self) -> &'static [Screen] {
        match self {
            Portal::Admin => &[
                Screen::Occupations,
                Screen::Vendors,
                Screen::Compliance,
                Screen::Candidates,
            ],
            Portal::Organization => &[Screen::Candidates, Screen::Occupations, Screen::Compliance],
            Portal::Vendor => &[Screen::Candidates, Screen::Occupations],
            Portal::Candidate => &[Screen::Occupations, Screen::Compliance],
        }
    }

    /// Whether records on this portal's screens can be changed.
    pub fn can_edit(self) -> bool {
        !matches!(self, Portal::Candidate)
    }

    /// The portal after this one, wrapping around.
    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|p| *p == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    /// Parses a portal name, ignoring case.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(name.trim()))
    }
}

impl Screen {
    pub fn title(self) -> &'static str {
        match self {
            Screen::Occupations => "Occupations",
            Screen::Vendors => "Vendors",
            Screen::Compliance => "Compliance",
            Screen::Candidates => "Candidates",
        }
    }
}
