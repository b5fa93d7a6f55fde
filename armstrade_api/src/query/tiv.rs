use std::str::FromStr;

use crate::Endpoint;

use super::common::{Query, QueryCommon};

#[derive(Default, Clone)]
pub struct TivQuery {
    pub common: QueryCommon,
    pub countries: Vec<String>,
    pub direction: Direction,
    pub summarize: SummarizeBy,
}

impl Query for TivQuery {
    fn endpoint(&self) -> Endpoint {
        Endpoint::Tiv
    }
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn form_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        self.common.add_to_params(&mut params);
        for country in self.countries.iter() {
            params.push(("country_code".to_string(), country.clone()));
        }
        params.push(("import_or_export".to_string(), self.direction.to_string()));
        params.push(("summarize".to_string(), self.summarize.to_string()));
        params
    }
}

impl TivQuery {
    pub fn with_country(mut self, country: &str) -> Self {
        self.countries.push(country.to_string());
        self
    }
    pub fn with_countries(mut self, countries: &[String]) -> Self {
        self.countries.extend_from_slice(countries);
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_summarize(mut self, summarize: SummarizeBy) -> Self {
        self.summarize = summarize;
        self
    }
}

/// Side of the transfer a TIV table is computed for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    /// Value of arms received. This is the default.
    #[default]
    Import,
    /// Value of arms supplied.
    Export,
}
impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Import => write!(f, "import"),
            Direction::Export => write!(f, "export"),
        }
    }
}
impl FromStr for Direction {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "import" => Ok(Direction::Import),
            "export" => Ok(Direction::Export),
            _ => Err(()),
        }
    }
}

/// Row grouping of a TIV table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SummarizeBy {
    /// One row per entity, one column per year. This is the default.
    #[default]
    Country,
    /// One row per year, one column per entity.
    Year,
}
impl std::fmt::Display for SummarizeBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SummarizeBy::Country => write!(f, "country"),
            SummarizeBy::Year => write!(f, "year"),
        }
    }
}
impl FromStr for SummarizeBy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "country" => Ok(SummarizeBy::Country),
            "year" => Ok(SummarizeBy::Year),
            _ => Err(()),
        }
    }
}
