//! Serde shapes of the standings API responses.
//!
//! Only the fields we read are modelled; everything else in the payload is
//! ignored. These types are also what the response cache stores on disk.

use serde::{Deserialize, Serialize};

use crate::{standings::LeagueEntry, LeagueCode};


/// `GET /leagues/`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LeaguesEnvelope {
    pub data: Vec<LeagueInfo>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LeagueInfo {
    /// Endpoint code, e.g. `eng.1`.
    pub id: String,
    pub name: String,
}

impl From<LeagueInfo> for LeagueEntry {
    fn from(info: LeagueInfo) -> Self {
        LeagueEntry {
            code: LeagueCode::new(info.id),
            display_name: info.name,
        }
    }
}

/// `GET /leagues/{code}/standings?season={year}&sort=asc`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StandingsPayload {
    pub data: StandingsData,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StandingsData {
    /// Season label, e.g. "2022-23".
    #[serde(
        rename = "seasonDisplay",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub season_display: Option<String>,
    pub standings: Vec<StandingEntry>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StandingEntry {
    pub team: TeamInfo,
    #[serde(default)]
    pub stats: Vec<StatEntry>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TeamInfo {
    pub name: String,
    pub abbreviation: String,
}

/// One statistic of a team's record.
///
/// Upstream usually labels statistics (`name: "wins"`, `type: "wins"`),
/// but the label is optional here so unlabelled payloads still decode.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StatEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub stat_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

impl StatEntry {
    /// Unlabelled statistic carrying only a value.
    pub fn value(value: f64) -> Self {
        Self {
            name: None,
            stat_type: None,
            value: Some(value),
        }
    }

    /// Statistic labelled with both `name` and `type`.
    pub fn labelled(label: &str, value: f64) -> Self {
        Self {
            name: Some(label.to_string()),
            stat_type: Some(label.to_lowercase()),
            value: Some(value),
        }
    }

    pub fn is_labelled(&self) -> bool {
        self.name.is_some() || self.stat_type.is_some()
    }

    /// True when either label equals `label`, ignoring ASCII case.
    pub fn has_label(&self, label: &str) -> bool {
        [self.name.as_deref(), self.stat_type.as_deref()]
            .into_iter()
            .flatten()
            .any(|l| l.eq_ignore_ascii_case(label))
    }
}
