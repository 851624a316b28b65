use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub course_name: String,
    pub rating: f64,
    pub full_price: f64,
    pub offered_price: f64,
    pub kind: String,
    pub level: String,
    #[serde(default)]
    pub ies_logo: Option<String>,
    pub ies_name: String,
}

#[derive(Debug, Deserialize)]
pub struct Dataset {
    pub offers: Vec<Offer>,
}
