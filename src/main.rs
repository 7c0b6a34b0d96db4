use actix_web::{App, HttpServer, middleware, web};

use alumnos::config::{self, AppConfig};
use alumnos::{db, routes};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Before the logger, so RUST_LOG can come from .env
    let dotenv_path = config::load_dotenv();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Some(path) = dotenv_path {
        log::info!("Loaded environment from {}", path.display());
    }

    let config = AppConfig::from_env().map_err(std::io::Error::other)?;
    let pool = db::init_pool(&config).await.map_err(std::io::Error::other)?;

    log::info!("Listing students of course {}", config.listing_course_id);
    log::info!("Starting server at http://{}", config.bind_addr);

    let bind_addr = config.bind_addr.clone();
    let public_dir = config.public_dir.clone();
    let config = web::Data::new(config);
    let server_pool = pool.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(server_pool.clone()))
            .app_data(config.clone())
            .configure(routes::configure)
            // Static files last so the routes above take precedence
            .service(routes::static_files(&public_dir))
    })
    .bind(bind_addr)?
    .run()
    .await?;

    pool.close().await;
    log::info!("Database pool closed");
    Ok(())
}
