use crate::dtos::offer::{FilterOptions, FormattedOffer, OfferRecord, OffersPage, PriceRange};
use crate::entities::offer::Offer;
use crate::errors::CatalogError;
use crate::query::fields::select_fields;
use crate::query::filter::filter_offers;
use crate::query::pagination::paginate;
use crate::query::params::OfferQuery;
use crate::query::sort::sort_offers;

// Sorting runs before formatting so prices compare as numbers.
pub fn run_query(offers: Vec<Offer>, query: &OfferQuery) -> Result<OffersPage<OfferRecord>, CatalogError> {
    let mut offers = filter_offers(offers, &query.filters);
    if let Some(sort) = &query.sort {
        offers = sort_offers(offers, sort);
    }
    let formatted: Vec<FormattedOffer> = offers.iter().map(Offer::to_formatted_offer).collect();
    let records = select_fields(formatted, query.fields.as_deref())?;
    Ok(paginate(records, query.page, query.limit))
}

pub fn filter_options(offers: &[Offer]) -> FilterOptions {
    let mut levels: Vec<String> = Vec::new();
    let mut kinds: Vec<String> = Vec::new();
    let mut price_range: Option<PriceRange> = None;
    for offer in offers {
        if !levels.contains(&offer.level) {
            levels.push(offer.level.clone());
        }
        if !kinds.contains(&offer.kind) {
            kinds.push(offer.kind.clone());
        }
        price_range = Some(match price_range {
            None => PriceRange {
                min: offer.offered_price,
                max: offer.offered_price,
            },
            Some(range) => PriceRange {
                min: range.min.min(offer.offered_price),
                max: range.max.max(offer.offered_price),
            },
        });
    }
    FilterOptions {
        levels,
        kinds,
        price_range,
    }
}
