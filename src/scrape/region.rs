use crate::prelude::*;
use anyhow::anyhow;
use std::{fmt, str::FromStr};
use url::Url;

/// A location listing on spacea.net. Variant order is the order regions are emitted in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Region {
    Usa,
    Europe,
    Pacific,
    Other,
}

impl Region {
    pub const ALL: [Region; 4] = [Region::Usa, Region::Europe, Region::Pacific, Region::Other];

    pub fn name(&self) -> &'static str {
        match self {
            Region::Usa => "usa",
            Region::Europe => "europe",
            Region::Pacific => "pacific",
            Region::Other => "other",
        }
    }

    pub fn url(&self) -> Result<Url> {
        Ok(Url::parse(&format!(
            "http://spacea.net/{}-locations",
            self.name()
        ))?)
    }

    /// Suffix of the CSS class on the cell holding this region's label.
    pub fn label_field(&self) -> &'static str {
        match self {
            Region::Usa => "province",
            _ => "country",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Region {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "usa" => Ok(Region::Usa),
            "europe" => Ok(Region::Europe),
            "pacific" => Ok(Region::Pacific),
            "other" => Ok(Region::Other),
            unknown => Err(anyhow!("Unknown region: {}", unknown)),
        }
    }
}
