use serde::{Deserialize, Serialize};

/// One row of the trade-register export.
///
/// Field names follow the export's CSV header. Cells the registry leaves
/// empty come back as `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferRecord {
    /// Registry-assigned transfer identifier.
    #[serde(rename = "tidn")]
    pub transfer_id: i64,

    #[serde(rename = "sellercod")]
    pub seller_code: String,

    #[serde(rename = "buyercod")]
    pub buyer_code: String,

    /// Year the order was placed.
    #[serde(rename = "odat")]
    pub order_year: Option<i64>,

    /// Units delivered over the whole transfer.
    #[serde(rename = "nrdel")]
    pub delivered: Option<i64>,

    /// Delivery year recorded for the transfer.
    #[serde(rename = "ldat")]
    pub delivery_year: Option<i64>,

    /// Raw delivery-year field: a single year or a "start-end" range.
    #[serde(rename = "delyears")]
    pub delivery_years: Option<String>,

    #[serde(rename = "desig2")]
    pub designation: String,

    #[serde(rename = "wcat")]
    pub category: String,

    #[serde(rename = "desc")]
    pub description: String,

    /// Trend-indicator value of a single unit, in TIV millions.
    #[serde(rename = "tivunit")]
    pub tiv_per_unit: Option<f64>,

    /// Trend-indicator value of everything delivered, in TIV millions.
    #[serde(rename = "tivdel")]
    pub tiv_delivered: Option<f64>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ArmsCategory {
    #[default]
    Any,
    Aircraft,
    AirDefenceSystems,
    AntiSubmarineWarfareWeapons,
    ArmouredVehicles,
    Artillery,
    Engines,
    Missiles,
    NavalWeapons,
    Satellites,
    Sensors,
    Ships,
    Other,
}
impl std::fmt::Display for ArmsCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ArmsCategory::Any => "any",
                ArmsCategory::Aircraft => "aircraft",
                ArmsCategory::AirDefenceSystems => "air-defence-systems",
                ArmsCategory::AntiSubmarineWarfareWeapons => "anti-submarine-warfare-weapons",
                ArmsCategory::ArmouredVehicles => "armoured-vehicles",
                ArmsCategory::Artillery => "artillery",
                ArmsCategory::Engines => "engines",
                ArmsCategory::Missiles => "missiles",
                ArmsCategory::NavalWeapons => "naval-weapons",
                ArmsCategory::Satellites => "satellites",
                ArmsCategory::Sensors => "sensors",
                ArmsCategory::Ships => "ships",
                ArmsCategory::Other => "other",
            }
        )
    }
}

impl std::str::FromStr for ArmsCategory {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "any" => Ok(ArmsCategory::Any),
            "aircraft" => Ok(ArmsCategory::Aircraft),
            "air-defence-systems" => Ok(ArmsCategory::AirDefenceSystems),
            "anti-submarine-warfare-weapons" => Ok(ArmsCategory::AntiSubmarineWarfareWeapons),
            "armoured-vehicles" => Ok(ArmsCategory::ArmouredVehicles),
            "artillery" => Ok(ArmsCategory::Artillery),
            "engines" => Ok(ArmsCategory::Engines),
            "missiles" => Ok(ArmsCategory::Missiles),
            "naval-weapons" => Ok(ArmsCategory::NavalWeapons),
            "satellites" => Ok(ArmsCategory::Satellites),
            "sensors" => Ok(ArmsCategory::Sensors),
            "ships" => Ok(ArmsCategory::Ships),
            "other" => Ok(ArmsCategory::Other),
            _ => Err(()),
        }
    }
}
