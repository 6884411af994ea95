use actix_files::{Files, NamedFile};
use actix_web::{App, HttpServer, middleware::Logger, web};
use anyhow::Context;

mod config;

use config::SiteConfig;

/// Any path the static handlers don't know goes to the SPA, so client-side
/// routes can be deep-linked.
async fn spa(cfg: web::Data<SiteConfig>) -> actix_web::Result<NamedFile> {
    Ok(NamedFile::open(cfg.index_file())?)
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cfg = SiteConfig::from_env()?;
    if !cfg.index_file().exists() {
        log::warn!("{} not found; build the ui with trunk first", cfg.index_file().display());
    }
    log::info!(
        "serving {} on http://{}:{}",
        cfg.dist_dir.display(),
        cfg.host,
        cfg.port
    );

    let bind = (cfg.host.clone(), cfg.port);
    let data = web::Data::new(cfg);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(data.clone())
            .service(Files::new("/assets", data.assets_dir.clone()))
            .service(
                Files::new("/", data.dist_dir.clone())
                    .index_file("index.html")
                    .default_handler(web::get().to(spa)),
            )
    })
    .bind(bind.clone())
    .with_context(|| format!("bind {}:{}", bind.0, bind.1))?
    .run()
    .await
    .context("http server")?;

    Ok(())
}
