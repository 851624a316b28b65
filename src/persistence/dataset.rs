use crate::entities::offer::{Dataset, Offer};
use crate::errors::CatalogError;
use log::{debug, error};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug)]
pub struct OfferRepository {
    data_path: PathBuf,
}

impl OfferRepository {
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        OfferRepository {
            data_path: data_path.into(),
        }
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    /// An unreadable or malformed dataset is logged and treated as empty.
    pub fn load_offers(&self) -> Vec<Offer> {
        match self.read_dataset() {
            Ok(offers) => offers,
            Err(load_error) => {
                error!("Could not load offers: {}", load_error);
                Vec::new()
            }
        }
    }

    fn read_dataset(&self) -> Result<Vec<Offer>, CatalogError> {
        let contents = match fs::read_to_string(&self.data_path) {
            Ok(contents) => contents,
            Err(io_error) => return Err(CatalogError::failure(
                format!("reading {}", self.data_path.display()), io_error.to_string())),
        };
        let dataset = match serde_json::from_str::<Dataset>(&contents) {
            Ok(dataset) => dataset,
            Err(json_error) => return Err(CatalogError::failure(
                format!("parsing {}", self.data_path.display()), json_error.to_string())),
        };
        debug!("Loaded {} offers from {}", dataset.offers.len(), self.data_path.display());
        Ok(dataset.offers)
    }
}

#[cfg(test)]
mod tests {
    use crate::persistence::dataset::OfferRepository;
    use std::fs;
    use std::path::PathBuf;

    fn bundled_dataset() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join("data.json")
    }

    fn scratch_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("offer_catalog_{}_{}.json", name, std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_loads_bundled_dataset() {
        let offers = OfferRepository::new(bundled_dataset()).load_offers();
        assert_eq!(offers.len(), 12);
        assert!(offers.iter().all(|offer| !offer.course_name.is_empty()));
    }

    #[test]
    fn test_missing_file_is_empty() {
        let repository = OfferRepository::new("/nonexistent/offer_catalog/data.json");
        assert!(repository.load_offers().is_empty());
    }

    #[test]
    fn test_malformed_file_is_empty() {
        let path = scratch_file("malformed", "{\"offers\": [ {\"courseName\": ");
        let offers = OfferRepository::new(&path).load_offers();
        fs::remove_file(&path).unwrap();
        assert!(offers.is_empty());
    }

    #[test]
    fn test_missing_logo_is_tolerated() {
        let path = scratch_file("no_logo", r#"{"offers": [{
            "courseName": "Pedagogia", "rating": 3.9, "fullPrice": 500.0, "offeredPrice": 420.5,
            "kind": "ead", "level": "licenciatura", "iesName": "Faculdade Y"
        }]}"#);
        let offers = OfferRepository::new(&path).load_offers();
        fs::remove_file(&path).unwrap();
        assert_eq!(offers.len(), 1);
        assert_eq!(offers[0].ies_logo, None);
        assert_eq!(offers[0].offered_price, 420.5);
    }
}
