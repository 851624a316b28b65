use crate::constants::{DEFAULT_LIMIT, DEFAULT_PAGE};
use crate::query::fields::parse_fields;
use crate::query::filter::QueryFilters;
use crate::query::sort::{SortKey, SortOrder, SortSpec};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawOfferQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub level: Option<String>,
    pub kind: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
    pub fields: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OfferQuery {
    pub filters: QueryFilters,
    pub sort: Option<SortSpec>,
    pub fields: Option<Vec<String>>,
    pub page: usize,
    pub limit: usize,
}

impl Default for OfferQuery {
    fn default() -> Self {
        OfferQuery {
            filters: QueryFilters::default(),
            sort: None,
            fields: None,
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    match value {
        Some(value) if !value.trim().is_empty() => Some(value.as_str()),
        _ => None,
    }
}

fn parse_positive(name: &str, value: &Option<String>, default: usize) -> usize {
    match non_blank(value) {
        None => default,
        Some(text) => match text.trim().parse::<usize>() {
            Ok(number) if number >= 1 => number,
            _ => {
                debug!("Ignoring {}={:?}, using {}", name, text, default);
                default
            }
        },
    }
}

fn parse_price(name: &str, value: &Option<String>) -> Option<f64> {
    let text = non_blank(value)?;
    match text.trim().parse::<f64>() {
        Ok(price) if price.is_finite() => Some(price),
        _ => {
            warn!("Ignoring non-numeric {}={:?}", name, text);
            None
        }
    }
}

impl RawOfferQuery {
    // A repeated key keeps its first value; unknown keys are ignored.
    pub fn from_query_string(query_string: &str) -> RawOfferQuery {
        let mut raw = RawOfferQuery::default();
        for (name, value) in form_urlencoded::parse(query_string.as_bytes()) {
            let slot = match name.as_ref() {
                "page" => &mut raw.page,
                "limit" => &mut raw.limit,
                "level" => &mut raw.level,
                "kind" => &mut raw.kind,
                "minPrice" => &mut raw.min_price,
                "maxPrice" => &mut raw.max_price,
                "search" => &mut raw.search,
                "sortBy" => &mut raw.sort_by,
                "order" => &mut raw.order,
                "fields" => &mut raw.fields,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }
        raw
    }

    pub fn parse(&self) -> OfferQuery {
        let filters = QueryFilters {
            level: non_blank(&self.level).map(str::to_string),
            kind: non_blank(&self.kind).map(str::to_string),
            min_price: parse_price("minPrice", &self.min_price),
            max_price: parse_price("maxPrice", &self.max_price),
            search: non_blank(&self.search).map(str::to_string),
        };
        let sort = non_blank(&self.sort_by).map(|sort_by| {
            let key = sort_by.parse::<SortKey>().ok();
            if key.is_none() {
                debug!("Unrecognized sortBy {:?}, keeping dataset order", sort_by);
            }
            SortSpec {
                key,
                order: SortOrder::parse(non_blank(&self.order)),
            }
        });
        OfferQuery {
            filters,
            sort,
            fields: non_blank(&self.fields).and_then(parse_fields),
            page: parse_positive("page", &self.page, DEFAULT_PAGE),
            limit: parse_positive("limit", &self.limit, DEFAULT_LIMIT),
        }
    }
}
