use std::{net::SocketAddr, sync::Arc};

use clap::Parser;
use menuart_api::{
    application::http::server::http_server::{router, state},
    args::{Args, LogArgs},
};
use menuart_core::domain::admin::ports::AuthService;
use menuart_core::domain::restaurant::ports::RestaurantService;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing(log: &LogArgs) {
    let filter = EnvFilter::try_new(&log.filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let (json, plain) = if log.json {
        (Some(fmt::layer().json()), None)
    } else {
        (None, Some(fmt::layer()))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(json)
        .with(plain)
        .init();
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());
    init_tracing(&args.log);

    let state = state(args.clone()).await?;

    match (&args.admin.email, &args.admin.password) {
        (Some(email), Some(password)) => {
            let created = state
                .service
                .seed_admin(email.clone(), password.clone())
                .await?;
            if created {
                info!(email = %email, "seeded admin account");
            }
        }
        (None, None) => {}
        _ => warn!("ADMIN_EMAIL and ADMIN_PASSWORD must both be set to seed an admin"),
    }

    if args.admin.seed_demo && !state.service.seed_demo().await? {
        info!("demo menu already present");
    }

    let app = router(state)?;

    let addr: SocketAddr = format!("{}:{}", args.server.host, args.server.port).parse()?;
    info!("listening on {}", addr);

    axum_server::bind(addr)
        .serve(app.into_make_service())
        .await?;

    Ok(())
}
