use std::str::FromStr;

use crate::types::ArmsCategory;
use crate::Endpoint;

use super::common::{Query, QueryCommon};

#[derive(Default, Clone)]
pub struct RegistersQuery {
    pub common: QueryCommon,
    pub sellers: Vec<String>,
    pub buyers: Vec<String>,
    pub category: ArmsCategory,
    pub order_by: OrderBy,
}

impl Query for RegistersQuery {
    fn endpoint(&self) -> Endpoint {
        Endpoint::Registers
    }
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn form_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        self.common.add_to_params(&mut params);
        for seller in self.sellers.iter() {
            params.push(("seller_country_code".to_string(), seller.clone()));
        }
        for buyer in self.buyers.iter() {
            params.push(("buyer_country_code".to_string(), buyer.clone()));
        }
        params.push((
            "armament_category_id".to_string(),
            self.category.to_string(),
        ));
        params.push(("buyers_or_sellers".to_string(), self.order_by.to_string()));
        params
    }
}

impl RegistersQuery {
    pub fn with_seller(mut self, seller: &str) -> Self {
        self.sellers.push(seller.to_string());
        self
    }
    pub fn with_sellers(mut self, sellers: &[String]) -> Self {
        self.sellers.extend_from_slice(sellers);
        self
    }

    pub fn with_buyer(mut self, buyer: &str) -> Self {
        self.buyers.push(buyer.to_string());
        self
    }
    pub fn with_buyers(mut self, buyers: &[String]) -> Self {
        self.buyers.extend_from_slice(buyers);
        self
    }

    pub fn with_category(mut self, category: ArmsCategory) -> Self {
        self.category = category;
        self
    }

    pub fn with_order_by(mut self, order_by: OrderBy) -> Self {
        self.order_by = order_by;
        self
    }
}

/// Whether exported rows are grouped by buyer or by seller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OrderBy {
    /// Group rows by buyer. This is the default.
    #[default]
    Buyers,
    /// Group rows by seller.
    Sellers,
}
impl std::fmt::Display for OrderBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderBy::Buyers => write!(f, "buyers"),
            OrderBy::Sellers => write!(f, "sellers"),
        }
    }
}
impl FromStr for OrderBy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "buyers" => Ok(OrderBy::Buyers),
            "sellers" => Ok(OrderBy::Sellers),
            _ => Err(()),
        }
    }
}
