// SPDX-License-Identifier: MPL-2.0
//! Crop calendar shown on the crop advisory screen.
//!
//! Crop names and descriptions are authored in every locale inline
//! ([`LocalizedText`]); the remaining fields are shown as authored. The data
//! ships inside the binary as `assets/data/crops.toml`.

use crate::error::{Error, Result};
use crate::i18n::keys;
use crate::i18n::{I18n, LocalizedText};
use rust_embed::RustEmbed;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(RustEmbed)]
#[folder = "assets/data/"]
struct Asset;

const CROPS_FILE: &str = "crops.toml";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Kharif,
    Rabi,
    Summer,
}

impl Season {
    pub const ALL: [Season; 3] = [Season::Kharif, Season::Rabi, Season::Summer];

    /// Returns the i18n key for the season label.
    pub fn i18n_key(self) -> &'static str {
        match self {
            Season::Kharif => keys::CROPS_KHARIF,
            Season::Rabi => keys::CROPS_RABI,
            Season::Summer => keys::CROPS_SUMMER,
        }
    }
}

/// Season tab on the crop advisory screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeasonFilter {
    #[default]
    All,
    Only(Season),
}

impl SeasonFilter {
    pub fn i18n_key(self) -> &'static str {
        match self {
            SeasonFilter::All => keys::CROPS_ALL,
            SeasonFilter::Only(season) => season.i18n_key(),
        }
    }

    pub fn matches(self, season: Season) -> bool {
        match self {
            SeasonFilter::All => true,
            SeasonFilter::Only(wanted) => wanted == season,
        }
    }
}

impl FromStr for SeasonFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(SeasonFilter::All),
            "kharif" => Ok(SeasonFilter::Only(Season::Kharif)),
            "rabi" => Ok(SeasonFilter::Only(Season::Rabi)),
            "summer" => Ok(SeasonFilter::Only(Season::Summer)),
            other => Err(Error::Data(format!("invalid season: {}", other))),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WaterNeeds {
    Low,
    Medium,
    High,
}

impl fmt::Display for WaterNeeds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WaterNeeds::Low => write!(f, "Low"),
            WaterNeeds::Medium => write!(f, "Medium"),
            WaterNeeds::High => write!(f, "High"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Crop {
    pub id: String,
    pub name: LocalizedText,
    pub description: LocalizedText,
    pub season: Season,
    pub sowing_period: String,
    pub harvest_period: String,
    pub soil_type: String,
    pub water_needs: WaterNeeds,
    pub expected_yield: String,
    pub price_unit: String,
}

#[derive(Debug, Deserialize)]
struct CropFile {
    #[serde(default)]
    crop: Vec<Crop>,
}

/// Parses a crop calendar in the `[[crop]]` TOML layout.
pub fn parse(content: &str) -> Result<Vec<Crop>> {
    let file: CropFile =
        toml::from_str(content).map_err(|err| Error::Data(format!("{}: {}", CROPS_FILE, err)))?;

    for crop in &file.crop {
        let missing = crop.name.missing_locales();
        if !missing.is_empty() {
            tracing::warn!(id = %crop.id, ?missing, "Crop name lacks translations");
        }
    }

    Ok(file.crop)
}

/// The crop calendar compiled into the binary.
pub fn load_embedded() -> Result<Vec<Crop>> {
    let content = Asset::get(CROPS_FILE)
        .ok_or_else(|| Error::Data(format!("{} is not embedded", CROPS_FILE)))?;
    parse(&String::from_utf8_lossy(content.data.as_ref()))
}

/// Crops in `season` whose name, in the active locale or in English,
/// contains `query` (case-insensitive). An empty query matches every crop.
pub fn filter<'a>(
    crops: &'a [Crop],
    i18n: &I18n,
    season: SeasonFilter,
    query: &str,
) -> Vec<&'a Crop> {
    let query = query.trim().to_lowercase();
    crops
        .iter()
        .filter(|crop| season.matches(crop.season))
        .filter(|crop| {
            query.is_empty()
                || i18n.localized(&crop.name).to_lowercase().contains(&query)
                || crop.name.en.to_lowercase().contains(&query)
        })
        .collect()
}

pub fn find_by_id<'a>(crops: &'a [Crop], id: &str) -> Option<&'a Crop> {
    crops.iter().find(|crop| crop.id == id)
}
