//! RefData Desktop - Securities & Metrics Administration
//!
//! A desktop application for maintaining securities reference data and
//! their time-varying metrics through a REST backend.

pub mod backend;
pub mod commands;
pub mod config;
pub mod draft;
pub mod error;
pub mod grid;
pub mod schema;
pub mod services;
pub mod state;

use config::BackendConfig;
use services::RefreshService;
use state::AppState;
use tauri::Manager;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize and run the Tauri application
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "refdata_desktop=debug,tauri=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting RefData Desktop...");

    tauri::Builder::default()
        .plugin(tauri_plugin_shell::init())
        .setup(|app| {
            let config = BackendConfig::from_env()?;
            tracing::info!("Backend URL: {}", config.base_url);

            app.manage(AppState::new(config));

            // Initial unfiltered load of both grids
            let handle = app.handle().clone();
            tauri::async_runtime::spawn(async move {
                let state = handle.state::<AppState>();
                if let Err(e) = RefreshService::fetch_all(&state, None).await {
                    tracing::error!("Initial data load failed: {}", e);
                }
            });

            tracing::info!("Application state initialized");
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Securities commands
            commands::securities::fetch_securities,
            commands::securities::create_security,
            commands::securities::delete_security,
            commands::securities::update_security_draft,
            commands::securities::get_security_draft,
            commands::securities::set_security_delete_id,
            commands::securities::set_security_delete_date,
            // Metrics commands
            commands::metrics::fetch_metrics,
            commands::metrics::create_metric,
            commands::metrics::delete_metric,
            commands::metrics::update_metric_draft,
            commands::metrics::get_metric_draft,
            commands::metrics::set_metric_delete_name,
            commands::metrics::set_metric_delete_security_id,
            commands::metrics::metrics_largest_yield_change,
            // View commands
            commands::view::get_field_schema,
            commands::view::get_grid_data,
            commands::view::set_filter_date,
            commands::view::get_filter_date,
            commands::view::fetch_all,
            commands::view::get_app_status,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
