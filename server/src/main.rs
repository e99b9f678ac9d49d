mod routes;
mod services;
mod state;

use std::sync::Arc;

use services::mailer::{Mailer, ResendMailer};
use services::sheets::{ScriptSheetWriter, SheetWriter};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    // Outbound delivery paths are optional: a missing config disables that
    // path and the relay runs on whatever is left.
    let mailer: Option<Arc<dyn Mailer>> = match ResendMailer::from_env() {
        Ok(mailer) => {
            tracing::info!(to = mailer.to(), "enquiry mailer initialized");
            Some(Arc::new(mailer))
        }
        Err(e) => {
            tracing::warn!(error = %e, "mailer not configured — email delivery disabled");
            None
        }
    };

    let sheets: Option<Arc<dyn SheetWriter>> = match ScriptSheetWriter::from_env() {
        Ok(writer) => {
            tracing::info!("spreadsheet relay initialized");
            Some(Arc::new(writer))
        }
        Err(e) => {
            tracing::warn!(error = %e, "spreadsheet relay not configured — sheet writes disabled");
            None
        }
    };

    if mailer.is_none() && sheets.is_none() {
        tracing::warn!("no delivery path configured — enquiry submissions will be rejected");
    }

    let state = state::AppState::new(mailer, sheets);

    let app = routes::leptos_app(state).expect("router build failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "cedar court site listening");
    axum::serve(listener, app).await.expect("server failed");
}
