pub const APPLICATION_JSON: &str = "application/json";

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_LIMIT: usize = 10;

pub const SERVER_ERROR_MESSAGE: &str = "Erro interno do servidor";
pub const LOAD_ERROR_MESSAGE: &str = "Erro ao carregar ofertas";
pub const NO_RESULTS_MESSAGE: &str = "Nenhuma oferta encontrada";

pub const OFFERS_PATH: &str = "api/ofertas";
pub const FILTER_OPTIONS_PATH: &str = "api/ofertas/filtros";
