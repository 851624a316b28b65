use anyhow::anyhow;
use confik::{Configuration as _, EnvSource};
use dotenv::dotenv;
use env_logger::Env;
use log::{info, warn};
use offer_catalog::browser::app::{FilterForm, OffersApp};
use offer_catalog::browser::offers_client::{OfferSource, OffersClient};
use offer_catalog::config::BrowserConfig;
use tokio::io::{AsyncBufReadExt, BufReader};

const HELP: &str = "comandos: s chave=valor... | c | n | p | g N | f | q";

#[derive(Debug, PartialEq)]
enum Command {
    Search(FilterForm),
    Clear,
    Next,
    Previous,
    GoTo(usize),
    Facets,
    Quit,
    Unknown(String),
}

fn parse_command(line: &str) -> Command {
    let mut words = line.split_whitespace();
    let command = match words.next() {
        Some(command) => command,
        None => return Command::Unknown(String::new()),
    };
    match command {
        "s" => {
            let mut form = FilterForm::default();
            let mut search_words = Vec::new();
            for word in words {
                let assigned = match word.split_once('=') {
                    Some((name, value)) => form.set(name, value),
                    None => false,
                };
                if !assigned {
                    search_words.push(word);
                }
            }
            if !search_words.is_empty() {
                form.search = search_words.join(" ");
            }
            Command::Search(form)
        }
        "c" => Command::Clear,
        "n" => Command::Next,
        "p" => Command::Previous,
        "g" => match words.next().and_then(|page| page.parse::<usize>().ok()) {
            Some(page) if page >= 1 => Command::GoTo(page),
            _ => Command::Unknown(line.to_string()),
        },
        "f" => Command::Facets,
        "q" => Command::Quit,
        _ => Command::Unknown(line.to_string()),
    }
}

fn render<S: OfferSource>(app: &OffersApp<S>) {
    println!("{}", app.view());
    if !app.pager().is_empty() {
        let pager: Vec<String> = app.pager().iter().map(|item| item.to_string()).collect();
        println!("{}", pager.join("  "));
    }
}

#[actix_rt::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = match BrowserConfig::builder()
        .override_with(EnvSource::new())
        .try_build() {
        Ok(config) => config,
        Err(build_error) => return Err(anyhow!("Could not create BrowserConfig: {}", build_error)),
    };

    env_logger::init_from_env(Env::default().default_filter_or(config.log_level.clone()));
    info!("Browsing offers at {}", config.api_url);

    let client = OffersClient::new(&config)?;
    let mut app = OffersApp::new(client, config.items_per_page);
    app.initial_load().await;
    render(&app);
    println!("{}", HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let current_page = app.state().current_page;
        let (has_next, has_prev) = app.pagination()
            .map(|pagination| (pagination.has_next, pagination.has_prev))
            .unwrap_or((false, false));
        match parse_command(&line) {
            Command::Search(form) => app.search(form).await,
            Command::Clear => app.clear_filters().await,
            Command::Next if has_next => app.go_to_page(current_page + 1).await,
            Command::Previous if has_prev => app.go_to_page(current_page - 1).await,
            Command::Next | Command::Previous => continue,
            Command::GoTo(page) => app.go_to_page(page).await,
            Command::Facets => {
                match app.filter_options().await {
                    Ok(options) => println!("{}", serde_json::to_string_pretty(&options)?),
                    Err(options_error) => warn!("Could not load filter options: {}", options_error),
                }
                continue;
            }
            Command::Quit => break,
            Command::Unknown(input) => {
                if !input.trim().is_empty() {
                    warn!("Unknown command {:?}", input);
                }
                println!("{}", HELP);
                continue;
            }
        }
        render(&app);
    }
    Ok(())
}
