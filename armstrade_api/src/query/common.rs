//! Shared query infrastructure: the [`Query`] trait, [`QueryCommon`] fields, and [`FileType`].

use std::str::FromStr;

use chrono::{Datelike, Utc};

use crate::Endpoint;

/// Trait implemented by all query builders. Provides form-parameter
/// serialization and shared builder methods for the delivery-year window
/// and export file type.
pub trait Query {
    /// The endpoint this query posts to.
    fn endpoint(&self) -> Endpoint;

    /// Serializes this query into form parameters, in a stable order.
    fn form_params(&self) -> Vec<(String, String)>;

    /// Returns a mutable reference to the common query fields.
    fn get_common(&mut self) -> &mut QueryCommon;

    /// Sets the first delivery year of the export window.
    fn with_low_year(mut self, low_year: i64) -> Self
    where
        Self: Sized,
    {
        self.get_common().low_year = low_year;
        self
    }

    /// Sets the last delivery year of the export window.
    fn with_high_year(mut self, high_year: i64) -> Self
    where
        Self: Sized,
    {
        self.get_common().high_year = high_year;
        self
    }

    /// Sets the export file type.
    fn with_filetype(mut self, filetype: FileType) -> Self
    where
        Self: Sized,
    {
        self.get_common().filetype = filetype;
        self
    }
}

/// Export file type requested from the registry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FileType {
    /// Comma-separated values. This is the default.
    #[default]
    Csv,
    /// Rich text, as offered by the registry's export form.
    Rtf,
    /// Row-keyed JSON. The registry does not serve JSON; this file type is
    /// sent as `csv` on the wire and re-encoded client-side.
    Json,
}
impl std::fmt::Display for FileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileType::Csv => write!(f, "csv"),
            FileType::Rtf => write!(f, "rtf"),
            FileType::Json => write!(f, "json"),
        }
    }
}
impl FromStr for FileType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "csv" => Ok(FileType::Csv),
            "rtf" => Ok(FileType::Rtf),
            "json" => Ok(FileType::Json),
            _ => Err(()),
        }
    }
}

/// Fields shared by both endpoints: the delivery-year window and file type.
#[derive(Clone, Copy)]
pub struct QueryCommon {
    /// First delivery year included in the export. Defaults to 1950, the
    /// earliest year the registry covers.
    pub low_year: i64,
    /// Last delivery year included in the export. Defaults to the current year.
    pub high_year: i64,
    /// Export file type. Defaults to CSV.
    pub filetype: FileType,
}

impl Default for QueryCommon {
    fn default() -> QueryCommon {
        QueryCommon {
            low_year: 1950,
            high_year: Utc::now().year() as i64,
            filetype: FileType::Csv,
        }
    }
}

impl QueryCommon {
    /// Appends the common parameters to a form-parameter list.
    pub fn add_to_params(&self, params: &mut Vec<(String, String)>) {
        params.push(("low_year".to_string(), self.low_year.to_string()));
        params.push(("high_year".to_string(), self.high_year.to_string()));
        params.push(("filetype".to_string(), self.filetype.to_string()));
    }
}
