mod client;
mod decode;
mod endpoint;
mod errors;
mod query;
pub mod types;
mod user_agent;
pub use self::client::Client;
pub use self::decode::{parse_tiv_values, parse_trade_registers, parse_trade_registers_indexed};
pub use self::endpoint::Endpoint;
pub use self::errors::Error;
pub use self::query::{
    Direction, FileType, OrderBy, Query, QueryCommon, RegistersQuery, SummarizeBy, TivQuery,
};
