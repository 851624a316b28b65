use crate::config::BrowserConfig;
use crate::constants::{FILTER_OPTIONS_PATH, OFFERS_PATH};
use crate::dtos::offer::{FilterOptions, FormattedOffer, OffersPage};
use crate::errors::CatalogError;
use log::debug;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use url::Url;

#[allow(async_fn_in_trait)]
pub trait OfferSource {
    async fn fetch_offers(&self, params: &[(String, String)]) -> Result<OffersPage<FormattedOffer>, CatalogError>;
    async fn fetch_filter_options(&self) -> Result<FilterOptions, CatalogError>;
}

pub struct OffersClient {
    client: Client,
    api_url: String,
}

impl OffersClient {
    pub fn new(config: &BrowserConfig) -> Result<Self, CatalogError> {
        let client = match Client::builder().build() {
            Ok(client) => client,
            Err(reqwest_error) => return Err(CatalogError::failure(
                "OffersClient::new Client::builder().build".to_string(), reqwest_error.to_string())),
        };
        let client = OffersClient {
            client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
        };
        client.get_url(OFFERS_PATH)?;
        Ok(client)
    }

    fn get_url(&self, region: &str) -> Result<Url, CatalogError> {
        let base_url = &self.api_url;
        let full_url = format!("{base_url}/{region}");
        match full_url.parse::<Url>() {
            Ok(url) => Ok(url),
            Err(parse_error) => Err(CatalogError::failure(format!("parsing url {}", full_url), parse_error.to_string())),
        }
    }

    async fn execute<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, CatalogError> {
        let response = match request.send().await {
            Ok(response) => response,
            Err(send_error) => return Err(CatalogError::failure("send".to_string(), send_error.to_string())),
        };
        let response = match response.error_for_status() {
            Ok(response) => response,
            Err(status_error) => return Err(CatalogError::failure("status".to_string(), status_error.to_string())),
        };
        match response.json::<T>().await {
            Ok(body) => Ok(body),
            Err(json_error) => Err(CatalogError::failure("json".to_string(), json_error.to_string())),
        }
    }
}

impl OfferSource for OffersClient {
    async fn fetch_offers(&self, params: &[(String, String)]) -> Result<OffersPage<FormattedOffer>, CatalogError> {
        let url = self.get_url(OFFERS_PATH)?;
        debug!("Fetching offers from {} with {:?}", url, params);
        Self::execute(self.client.get(url).query(params)).await
    }

    async fn fetch_filter_options(&self) -> Result<FilterOptions, CatalogError> {
        let url = self.get_url(FILTER_OPTIONS_PATH)?;
        debug!("Fetching filter options from {}", url);
        Self::execute(self.client.get(url)).await
    }
}
