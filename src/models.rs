//! Frontend Models
//!
//! Typed shapes for the replies the UI reads field by field. Resource rows
//! stay as `serde_json::Value` and are described by `resources`.

use serde::{Deserialize, Serialize};

/// Dashboard reply from `/escalas/api/dashboard`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub kpis: Kpis,
    #[serde(rename = "grafico")]
    pub series: Series,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kpis {
    #[serde(rename = "alocados")]
    pub allocated: u64,
    #[serde(rename = "vagos")]
    pub vacant: u64,
    #[serde(rename = "substituicoes")]
    pub substitutions: u64,
    #[serde(rename = "produtividade")]
    pub productivity_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Series {
    #[serde(rename = "dias", default)]
    pub days: Vec<String>,
    #[serde(rename = "alocados", default)]
    pub allocated: Vec<f64>,
    #[serde(rename = "vagos", default)]
    pub vacant: Vec<f64>,
    #[serde(rename = "substituicoes", default)]
    pub substitutions: Vec<f64>,
}

/// Schedule ("escala") status as stored by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScheduleStatus {
    #[serde(rename = "ativo")]
    Active,
    #[serde(rename = "substituto")]
    Substitute,
    #[serde(rename = "vago")]
    Vacant,
}

impl ScheduleStatus {
    pub const ALL: [ScheduleStatus; 3] = [Self::Active, Self::Substitute, Self::Vacant];

    pub const fn wire(&self) -> &'static str {
        match self {
            Self::Active => "ativo",
            Self::Substitute => "substituto",
            Self::Vacant => "vago",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Active => "Ativo",
            Self::Substitute => "Substituto",
            Self::Vacant => "Vago",
        }
    }

    /// Older rows use capitalised values, so matching ignores case.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.wire().eq_ignore_ascii_case(value.trim()))
    }
}
