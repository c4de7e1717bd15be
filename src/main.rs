use crate::api::models::Category;
use crate::api::BackendClient;
use crate::controller::bridge::LogBridge;
use crate::controller::ListingPageController;
use std::env;

mod api;
mod controller;
mod flows;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    env_logger::init();

    // 1️⃣ Configuration from the environment
    let base_url = match env::var("BACKEND_URL") {
        Ok(v) => v,
        Err(_) => {
            eprintln!("❌ BACKEND_URL environment variable not set");
            std::process::exit(1);
        }
    };
    // Opaque host-issued token, forwarded as-is on every request.
    let init_data = env::var("TG_INIT_DATA").unwrap_or_default();

    // 2️⃣ Backend client
    let client = match BackendClient::new(&base_url, init_data) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("❌ Backend client init failed: {e}");
            std::process::exit(1);
        }
    };

    // 3️⃣ One of the three Mini-App screens
    let screen = env::var("PAGE").unwrap_or_else(|_| "listing".to_string());
    let bridge = LogBridge;

    match screen.as_str() {
        "invoice" => {
            let query = env::var("QUERY").unwrap_or_default();
            match flows::run_invoice_page(&client, &query, &bridge) {
                Ok(_) => {
                    let page = templates::pages::invoice_page("Opening payment…");
                    println!("{}", page.into_string());
                }
                Err(e) => {
                    log::error!("Invoice flow failed: {e}");
                    let page = templates::pages::invoice_page(flows::INVOICE_FAILED_MSG);
                    println!("{}", page.into_string());
                }
            }
        }
        "result" => {
            let search_id = env::var("SEARCH_ID").ok();
            match flows::fetch_result_count(&client) {
                Ok(total) => {
                    let page = templates::pages::result_page(search_id.as_deref(), total);
                    println!("{}", page.into_string());
                }
                Err(e) => {
                    eprintln!("❌ Count request failed: {e}");
                    std::process::exit(1);
                }
            }
        }
        _ => {
            let cat = Category::parse(&env::var("CAT").unwrap_or_default());
            let lang = env::var("APP_LANG").unwrap_or_else(|_| "en".to_string());

            let mut controller = ListingPageController::new(client, bridge, cat, lang);
            controller.start();
            println!("{}", controller.render().into_string());
        }
    }
}
