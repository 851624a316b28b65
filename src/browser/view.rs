use crate::constants::NO_RESULTS_MESSAGE;
use crate::dtos::offer::{FormattedOffer, Pagination};
use std::fmt;

const MAX_STARS: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Blank,
    Offers(Vec<OfferCard>),
    NoResults,
    Error(String),
}

impl View {
    pub fn from_offers(offers: &[FormattedOffer]) -> View {
        if offers.is_empty() {
            View::NoResults
        } else {
            View::Offers(offers.iter().map(OfferCard::from_offer).collect())
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OfferCard {
    pub course_name: String,
    pub level: String,
    pub ies_name: String,
    pub ies_logo: Option<String>,
    pub kind: String,
    pub stars: String,
    pub rating: f64,
    pub full_price: String,
    pub offered_price: String,
    pub discount: String,
}

impl OfferCard {
    pub fn from_offer(offer: &FormattedOffer) -> OfferCard {
        OfferCard {
            course_name: offer.course_name.clone(),
            level: offer.level.clone(),
            ies_name: offer.ies_name.clone(),
            ies_logo: offer.ies_logo.clone(),
            kind: offer.kind.clone(),
            stars: stars(offer.rating),
            rating: offer.rating,
            full_price: offer.full_price.clone(),
            offered_price: offer.offered_price.clone(),
            discount: offer.discount.clone(),
        }
    }
}

pub fn stars(rating: f64) -> String {
    let filled = if rating.is_finite() {
        rating.floor().clamp(0.0, MAX_STARS as f64) as usize
    } else {
        0
    };
    format!("{}{}", "★".repeat(filled), "☆".repeat(MAX_STARS - filled))
}

#[derive(Debug, Clone, PartialEq)]
pub enum PagerItem {
    Previous { target: usize, enabled: bool },
    Page { number: usize, active: bool },
    Ellipsis,
    Next { target: usize, enabled: bool },
}

/// Page controls: first and last page, a window of two pages around the
/// current one, and an ellipsis marking each gap. No pager for a single page.
pub fn pager_items(pagination: &Pagination) -> Vec<PagerItem> {
    let current = pagination.current_page;
    let total = pagination.total_pages;
    if total <= 1 {
        return Vec::new();
    }

    let mut items = vec![PagerItem::Previous {
        target: current.saturating_sub(1),
        enabled: pagination.has_prev,
    }];
    for number in 1..=total {
        if number == current {
            items.push(PagerItem::Page { number, active: true });
        } else if number == 1 || number == total || number.abs_diff(current) <= 2 {
            items.push(PagerItem::Page { number, active: false });
        } else if number.abs_diff(current) == 3 {
            items.push(PagerItem::Ellipsis);
        }
    }
    items.push(PagerItem::Next {
        target: current + 1,
        enabled: pagination.has_next,
    });
    items
}

impl fmt::Display for OfferCard {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.course_name)?;
        writeln!(f, "  {}", self.level)?;
        match &self.ies_logo {
            Some(logo) => writeln!(f, "  {} ({})", self.ies_name, logo)?,
            None => writeln!(f, "  {}", self.ies_name)?,
        }
        writeln!(f, "  Modalidade: {}", self.kind)?;
        writeln!(f, "  Avaliação: {} {}", self.stars, self.rating)?;
        write!(f, "  De {} Por {} {}", self.full_price, self.offered_price, self.discount)
    }
}

impl fmt::Display for PagerItem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PagerItem::Previous { enabled: true, .. } => write!(f, "← Anterior"),
            PagerItem::Previous { enabled: false, .. } => write!(f, "(← Anterior)"),
            PagerItem::Page { number, active: true } => write!(f, "[{}]", number),
            PagerItem::Page { number, active: false } => write!(f, "{}", number),
            PagerItem::Ellipsis => write!(f, "..."),
            PagerItem::Next { enabled: true, .. } => write!(f, "Próxima →"),
            PagerItem::Next { enabled: false, .. } => write!(f, "(Próxima →)"),
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            View::Blank => Ok(()),
            View::NoResults => write!(f, "{}", NO_RESULTS_MESSAGE),
            View::Error(message) => write!(f, "{}", message),
            View::Offers(cards) => {
                for (index, card) in cards.iter().enumerate() {
                    if index > 0 {
                        writeln!(f)?;
                    }
                    writeln!(f, "{}", card)?;
                }
                Ok(())
            }
        }
    }
}
