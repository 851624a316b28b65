use crate::entities::offer::Offer;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryFilters {
    pub level: Option<String>,
    pub kind: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub search: Option<String>,
}

impl QueryFilters {
    pub fn is_empty(&self) -> bool {
        self == &QueryFilters::default()
    }

    pub fn matches(&self, offer: &Offer) -> bool {
        if let Some(level) = &self.level {
            if offer.level != *level {
                return false;
            }
        }
        if let Some(kind) = &self.kind {
            if offer.kind != *kind {
                return false;
            }
        }
        if let Some(min_price) = self.min_price {
            if offer.offered_price < min_price {
                return false;
            }
        }
        if let Some(max_price) = self.max_price {
            if offer.offered_price > max_price {
                return false;
            }
        }
        if let Some(search) = &self.search {
            if !offer.course_name.to_lowercase().contains(&search.to_lowercase()) {
                return false;
            }
        }
        true
    }
}

pub fn filter_offers(offers: Vec<Offer>, filters: &QueryFilters) -> Vec<Offer> {
    if filters.is_empty() {
        return offers;
    }
    offers.into_iter().filter(|offer| filters.matches(offer)).collect()
}
