use crate::dtos::offer::{FormattedOffer, OfferRecord};
use crate::errors::CatalogError;
use serde_json::{Map, Value};

pub fn parse_fields(input: &str) -> Option<Vec<String>> {
    let fields: Vec<String> = input.split(',')
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .map(str::to_string)
        .collect();
    if fields.is_empty() {
        None
    } else {
        Some(fields)
    }
}

pub fn select_fields(offers: Vec<FormattedOffer>, fields: Option<&[String]>) -> Result<Vec<OfferRecord>, CatalogError> {
    let fields = match fields {
        Some(fields) => fields,
        None => return Ok(offers.into_iter().map(OfferRecord::Full).collect()),
    };
    let mut records = Vec::with_capacity(offers.len());
    for offer in offers {
        let mut source = match serde_json::to_value(&offer) {
            Ok(Value::Object(source)) => source,
            Ok(other) => return Err(CatalogError::failure(
                "select_fields".to_string(), format!("offer serialized as {}", other))),
            Err(json_error) => return Err(CatalogError::failure(
                "select_fields".to_string(), json_error.to_string())),
        };
        let mut selected = Map::new();
        for field in fields {
            if let Some(value) = source.remove(field) {
                selected.insert(field.clone(), value);
            }
        }
        records.push(OfferRecord::Projected(selected));
    }
    Ok(records)
}
