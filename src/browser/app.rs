use crate::browser::offers_client::OfferSource;
use crate::browser::view::{pager_items, PagerItem, View};
use crate::constants::{DEFAULT_PAGE, LOAD_ERROR_MESSAGE};
use crate::dtos::offer::{FilterOptions, FormattedOffer, OffersPage, Pagination};
use crate::errors::CatalogError;
use log::{debug, error, info};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub struct FilterForm {
    pub search: String,
    pub level: String,
    pub kind: String,
    pub min_price: String,
    pub max_price: String,
    pub sort_by: String,
    pub order: String,
}

impl Default for FilterForm {
    fn default() -> Self {
        FilterForm {
            search: String::new(),
            level: String::new(),
            kind: String::new(),
            min_price: String::new(),
            max_price: String::new(),
            sort_by: String::new(),
            order: "asc".to_string(),
        }
    }
}

impl FilterForm {
    pub fn to_filters(&self) -> BTreeMap<String, String> {
        [
            ("search", &self.search),
            ("level", &self.level),
            ("kind", &self.kind),
            ("minPrice", &self.min_price),
            ("maxPrice", &self.max_price),
            ("sortBy", &self.sort_by),
            ("order", &self.order),
        ]
            .into_iter()
            .filter(|(_, value)| !value.trim().is_empty())
            .map(|(name, value)| (name.to_string(), value.trim().to_string()))
            .collect()
    }

    pub fn set(&mut self, name: &str, value: &str) -> bool {
        let input = match name {
            "search" => &mut self.search,
            "level" => &mut self.level,
            "kind" => &mut self.kind,
            "minPrice" => &mut self.min_price,
            "maxPrice" => &mut self.max_price,
            "sortBy" => &mut self.sort_by,
            "order" => &mut self.order,
            _ => return false,
        };
        *input = value.to_string();
        true
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QueryState {
    pub current_page: usize,
    pub items_per_page: usize,
    pub current_filters: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoadStatus {
    Idle,
    Loading,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadTicket {
    pub sequence: u64,
    pub params: Vec<(String, String)>,
}

pub struct OffersApp<S: OfferSource> {
    source: S,
    state: QueryState,
    form: FilterForm,
    status: LoadStatus,
    view: View,
    pager: Vec<PagerItem>,
    pagination: Option<Pagination>,
    last_issued: u64,
}

impl<S: OfferSource> OffersApp<S> {
    pub fn new(source: S, items_per_page: usize) -> Self {
        OffersApp {
            source,
            state: QueryState {
                current_page: DEFAULT_PAGE,
                items_per_page: items_per_page.max(1),
                current_filters: BTreeMap::new(),
            },
            form: FilterForm::default(),
            status: LoadStatus::Idle,
            view: View::Blank,
            pager: Vec::new(),
            pagination: None,
            last_issued: 0,
        }
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    pub fn form(&self) -> &FilterForm {
        &self.form
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn pager(&self) -> &[PagerItem] {
        &self.pager
    }

    pub fn pagination(&self) -> Option<&Pagination> {
        self.pagination.as_ref()
    }

    pub async fn initial_load(&mut self) {
        self.load().await;
    }

    pub async fn search(&mut self, form: FilterForm) {
        self.state.current_filters = form.to_filters();
        self.form = form;
        self.state.current_page = DEFAULT_PAGE;
        info!("Searching with {:?}", self.state.current_filters);
        self.load().await;
    }

    pub async fn clear_filters(&mut self) {
        self.form = FilterForm::default();
        self.state.current_filters.clear();
        self.state.current_page = DEFAULT_PAGE;
        self.load().await;
    }

    pub async fn go_to_page(&mut self, page: usize) {
        self.state.current_page = page.max(1);
        self.load().await;
    }

    pub async fn filter_options(&self) -> Result<FilterOptions, CatalogError> {
        self.source.fetch_filter_options().await
    }

    async fn load(&mut self) {
        let ticket = self.begin_load();
        let result = self.source.fetch_offers(&ticket.params).await;
        self.complete_load(&ticket, result);
    }

    pub fn begin_load(&mut self) -> LoadTicket {
        self.last_issued += 1;
        self.status = LoadStatus::Loading;
        let mut params = vec![
            ("page".to_string(), self.state.current_page.to_string()),
            ("limit".to_string(), self.state.items_per_page.to_string()),
        ];
        params.extend(self.state.current_filters.iter().map(|(name, value)| (name.clone(), value.clone())));
        LoadTicket {
            sequence: self.last_issued,
            params,
        }
    }

    /// Renders the outcome of `ticket`, unless a newer request has been issued
    /// since. Returns whether the outcome was rendered.
    pub fn complete_load(&mut self, ticket: &LoadTicket,
                         result: Result<OffersPage<FormattedOffer>, CatalogError>) -> bool {
        if ticket.sequence < self.last_issued {
            debug!("Discarding response {} superseded by {}", ticket.sequence, self.last_issued);
            return false;
        }
        self.status = LoadStatus::Idle;
        match result {
            Ok(page) => {
                self.view = View::from_offers(&page.data);
                self.pager = pager_items(&page.pagination);
                self.pagination = Some(page.pagination);
            }
            Err(load_error) => {
                error!("Could not load offers: {}", load_error);
                self.view = View::Error(LOAD_ERROR_MESSAGE.to_string());
            }
        }
        true
    }
}
