//! formdesk - form-and-table desks over SQLite in the terminal
//!
//! This is the main entry point for the formdesk application.
//! It uses the Component Architecture pattern from ratatui.

mod action;
mod app;
mod component;
mod components;
mod config;
mod desk;
mod error;
mod logging;
mod model;
mod store;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::component::Component;
use crate::config::Config;
use crate::desk::{EmployeeDesk, JoinDesk, ProductDesk};
use crate::store::Store;
use crate::tui::Tui;
use anyhow::{Context, Result};
use crossterm::event::Event;
use std::path::Path;
use std::time::Duration;
use tracing::{error, info, warn};

fn main() -> Result<()> {
    let (config, problem) = Config::load_or_init();
    if let Err(err) = logging::init(&config) {
        eprintln!("Warning: logging disabled: {:#}", err);
    }
    if let Some(err) = problem {
        warn!(error = %format!("{:#}", err), "using default config");
    }
    info!(products = %config.products_db, employees = %config.employees_db, "starting");

    // Open stores before touching the terminal so failures print plainly
    let mut app = open_app(&config)?;

    // Setup terminal
    let mut tui = Tui::new()?.with_tick_rate(Duration::from_millis(100));
    tui.enter()?;

    app.init()?;

    // Main event loop
    let result = run_app(&mut tui, &mut app);

    // Cleanup terminal
    tui.exit()?;

    let closed = app.close();

    // Handle any errors
    if let Err(err) = result {
        error!(error = %err, "event loop failed");
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }
    closed.context("Failed to close the databases")?;

    info!("bye");
    Ok(())
}

fn open_app(config: &Config) -> Result<App> {
    let products = Store::open(Path::new(&config.products_db))
        .with_context(|| format!("Failed to open {}", config.products_db))?;
    let employees = Store::open(Path::new(&config.employees_db))
        .with_context(|| format!("Failed to open {}", config.employees_db))?;
    let demo = Store::open_in_memory().context("Failed to open the in-memory demo store")?;

    Ok(App::new(
        ProductDesk::open(products)?,
        EmployeeDesk::open(employees)?,
        JoinDesk::open(demo)?,
    ))
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        tui.draw(|frame| {
            if let Err(e) = app.draw(frame, frame.area()) {
                error!(error = %e, "draw failed");
            }
        })?;

        if let Some(event) = tui.next_event()? {
            let action = match event {
                Event::Key(key) => app.handle_key_event(key)?,
                Event::Resize(w, h) => Some(Action::Resize(w, h)),
                _ => None,
            };

            // Action might produce a follow-up action
            let mut current_action = action;
            while let Some(a) = current_action {
                current_action = app.update(a)?;
            }
        } else {
            // No event - send a tick
            app.update(Action::Tick)?;
        }
    }

    Ok(())
}
