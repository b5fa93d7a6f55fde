//! Export endpoints of the arms-transfer registry.

use std::str::FromStr;

/// An export script under the registry base URL.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Endpoint {
    /// Trade-register export, one row per transfer.
    #[default]
    Registers,
    /// Trend-indicator-value tables.
    Tiv,
}

impl Endpoint {
    /// Path of the export script, relative to the registry base URL.
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Registers => "export_trade_register.php",
            Endpoint::Tiv => "export_values.php",
        }
    }

    /// Resolves an endpoint by name.
    ///
    /// Unknown names are not an error: a warning is logged and the
    /// trade-register endpoint is used instead.
    pub fn from_name(name: &str) -> Endpoint {
        match Endpoint::from_str(name) {
            Ok(endpoint) => endpoint,
            Err(_) => {
                tracing::warn!("Invalid endpoint {:?}, defaulting to \"registers\"", name);
                Endpoint::Registers
            }
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Endpoint::Registers => write!(f, "registers"),
            Endpoint::Tiv => write!(f, "tiv"),
        }
    }
}

impl FromStr for Endpoint {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "registers" => Ok(Endpoint::Registers),
            "tiv" => Ok(Endpoint::Tiv),
            _ => Err(()),
        }
    }
}
