// crates/panel-trading-client/src/main.rs

mod app;
mod components;
mod config;
mod input;
mod logging;
mod refresh;
mod ui;

#[cfg(test)]
mod testkit;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    io,
    time::{Duration, Instant},
};
use tracing::{error, info};

use panel_exchange::{Exchange, ExchangeClient, ExchangeConfig};

use crate::app::App;
use crate::config::ClientConfig;
use crate::refresh::PriceRefresh;

#[tokio::main]
async fn main() -> Result<()> {
    // Credentials may come from a local .env file
    dotenvy::dotenv().ok();

    let config = ClientConfig::load()?;
    logging::init_file_logging(&config.log_file)?;
    info!("Starting order panel");

    // Connect and load symbols before taking over the terminal
    let exchange_config = ExchangeConfig::from_env()?;
    let client = ExchangeClient::connect(exchange_config).await;
    let symbols = client.list_symbols().await;
    info!("Loaded {} symbols", symbols.len());

    let app = App::new(symbols, &config.default_symbol, client.status().clone());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app, &client).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!("UI loop failed: {:?}", err);
    }
    info!("Order panel closed");

    res
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    exchange: &dyn Exchange,
) -> Result<()> {
    let mut refresh = PriceRefresh::default();

    app.refresh_price(exchange).await;
    refresh.mark(Instant::now());

    loop {
        // Draw UI
        terminal.draw(|f| ui::draw(f, &app))?;

        // Handle events with timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    input::handle_key(&mut app, exchange, key).await;
                }
            }
        }

        let now = Instant::now();
        if refresh.due(now) {
            app.refresh_price(exchange).await;
            refresh.mark(now);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
