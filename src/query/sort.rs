use crate::entities::offer::Offer;
use std::cmp::Ordering;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortKey {
    CourseName,
    OfferedPrice,
    Rating,
}

impl FromStr for SortKey {
    type Err = ();
    fn from_str(input: &str) -> Result<SortKey, Self::Err> {
        match input {
            "courseName" => Ok(SortKey::CourseName),
            "offeredPrice" => Ok(SortKey::OfferedPrice),
            "rating" => Ok(SortKey::Rating),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn parse(input: Option<&str>) -> SortOrder {
        match input {
            Some("desc") => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SortSpec {
    pub key: Option<SortKey>,
    pub order: SortOrder,
}

impl SortKey {
    fn compare(&self, a: &Offer, b: &Offer) -> Ordering {
        match self {
            SortKey::CourseName => a.course_name.to_lowercase().cmp(&b.course_name.to_lowercase()),
            SortKey::OfferedPrice => a.offered_price.partial_cmp(&b.offered_price).unwrap_or(Ordering::Equal),
            SortKey::Rating => a.rating.partial_cmp(&b.rating).unwrap_or(Ordering::Equal),
        }
    }
}

pub fn sort_offers(mut offers: Vec<Offer>, sort: &SortSpec) -> Vec<Offer> {
    let key = match sort.key {
        Some(key) => key,
        None => return offers,
    };
    // sort_by is stable: equal keys keep their filtered order
    match sort.order {
        SortOrder::Asc => offers.sort_by(|a, b| key.compare(a, b)),
        SortOrder::Desc => offers.sort_by(|a, b| key.compare(b, a)),
    }
    offers
}

#[cfg(test)]
mod tests {
    use crate::query::filter::tests::{names, offer, sample_offers};
    use crate::query::sort::{sort_offers, SortKey, SortOrder, SortSpec};

    fn spec(key: &str, order: Option<&str>) -> SortSpec {
        SortSpec {
            key: key.parse::<SortKey>().ok(),
            order: SortOrder::parse(order),
        }
    }

    #[test]
    fn test_order_defaults_to_asc() {
        assert_eq!(SortOrder::parse(None), SortOrder::Asc);
        assert_eq!(SortOrder::parse(Some("DESC")), SortOrder::Asc);
        assert_eq!(SortOrder::parse(Some("desc")), SortOrder::Desc);
    }

    #[test]
    fn test_sort_by_price_desc_reverses_asc() {
        let ascending = sort_offers(sample_offers(), &spec("offeredPrice", Some("asc")));
        let descending = sort_offers(sample_offers(), &spec("offeredPrice", Some("desc")));
        let prices: Vec<f64> = ascending.iter().map(|offer| offer.offered_price).collect();
        assert_eq!(prices, vec![299.5, 337.5, 399.9, 500.0, 650.0, 1837.5]);
        let mut reversed = descending.clone();
        reversed.reverse();
        assert_eq!(ascending, reversed);
    }

    #[test]
    fn test_sort_by_course_name_ignores_case() {
        let offers = vec![
            offer("direito", "bacharelado", "presencial", 1.0, 1.0),
            offer("Biologia", "bacharelado", "presencial", 2.0, 2.0),
            offer("artes", "licenciatura", "ead", 3.0, 3.0),
        ];
        let sorted = sort_offers(offers, &spec("courseName", None));
        assert_eq!(names(&sorted), vec!["artes", "Biologia", "direito"]);
    }

    #[test]
    fn test_sort_by_rating_is_stable() {
        let offers = vec![
            offer("A", "bacharelado", "presencial", 1.0, 4.0),
            offer("B", "bacharelado", "presencial", 2.0, 3.0),
            offer("C", "bacharelado", "presencial", 3.0, 4.0),
            offer("D", "bacharelado", "presencial", 4.0, 3.0),
        ];
        let ascending = sort_offers(offers.clone(), &spec("rating", None));
        assert_eq!(names(&ascending), vec!["B", "D", "A", "C"]);
        let descending = sort_offers(offers, &spec("rating", Some("desc")));
        assert_eq!(names(&descending), vec!["A", "C", "B", "D"]);
    }

    #[test]
    fn test_unknown_key_keeps_order() {
        let sorted = sort_offers(sample_offers(), &spec("iesName", Some("desc")));
        assert_eq!(sorted, sample_offers());
    }
}
