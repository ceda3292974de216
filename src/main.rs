#[macro_use]
extern crate rocket;

use expense_splitter::{config, routes, store};

use rocket::fairing::AdHoc;
use rocket::fs::NamedFile;
use rocket::http::Method;
use rocket_cors::{AllowedHeaders, AllowedOrigins, CorsOptions};
use std::path::{Path, PathBuf};

// SPA fallback: serve index.html for any route not matched by API or static files
#[get("/<_path..>", rank = 100)]
async fn spa_fallback(_path: PathBuf) -> Option<NamedFile> {
    NamedFile::open("static/index.html").await.ok()
}

#[get("/", rank = 99)]
async fn index() -> Option<NamedFile> {
    NamedFile::open("static/index.html").await.ok()
}

#[launch]
fn rocket() -> _ {
    // Load .env file if it exists
    dotenvy::dotenv().ok();

    let cors = CorsOptions::default()
        .allowed_origins(AllowedOrigins::all())
        .allowed_methods(
            vec![Method::Get, Method::Post, Method::Put, Method::Delete, Method::Options]
                .into_iter()
                .map(From::from)
                .collect(),
        )
        .allowed_headers(AllowedHeaders::all())
        .to_cors()
        .expect("CORS configuration failed");

    rocket::build()
        .attach(cors)
        .attach(AdHoc::try_on_ignite("Initialize Config", |rocket| async {
            config::init_config(config::load_from_env());
            store::init_store();

            Ok(rocket)
        }))
        .mount("/api", routes::get_routes())
        .mount("/", routes![index, spa_fallback])
        .attach(AdHoc::on_ignite("Static Files", |rocket| async {
            if Path::new("static").is_dir() {
                rocket.mount("/", rocket::fs::FileServer::from("static").rank(10))
            } else {
                println!("No 'static' directory found — skipping static file serving");
                rocket
            }
        }))
}
