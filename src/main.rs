//! washcache CLI - browse the laundry service directory from a terminal.
//!
//! With no arguments the full service list is printed; pass a service id
//! for its details. `--refresh` drops the cache before fetching,
//! `--clear-cache` drops it and exits.

use std::io;
use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use washcache::{ApiClient, Config, FileStore, LaundryService, ServiceCache, ServicesStore};

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Set up logging with environment-based filter
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn print_service_list(services: &[LaundryService]) {
    if services.is_empty() {
        println!("No services available.");
        return;
    }
    for service in services {
        println!("{:<4} {}", service.id, service.summary());
    }
}

fn print_service_details(service: &LaundryService) {
    println!("{}", service.name);
    println!("  Rating:   {:.1} ({} reviews)", service.rating, service.review_count);
    println!("  Distance: {}", service.display_distance());
    println!("  Address:  {}", service.location.address);
    println!("  Phone:    {}", service.contact.phone);
    println!("  Email:    {}", service.contact.email);
    println!("  Hours:    {}", service.opening_hours);
    println!("  Delivery: {}", service.delivery_time);
    println!("  Status:   {}", if service.is_open { "open" } else { "closed" });
    println!("  Services:");
    for name in &service.services {
        let price = service
            .service_prices
            .get(name)
            .map(String::as_str)
            .unwrap_or("-");
        println!("    {:<20} {}", name, price);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    init_tracing();
    info!("washcache starting");

    let config = Config::load()?;
    let store = Arc::new(FileStore::new(config.cache_dir()?).await?);
    let client = Arc::new(ApiClient::new(&config)?);
    let cache = ServiceCache::new(store, client).with_builtin_data(config.use_builtin_data);
    let mut services = ServicesStore::new(cache);

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("--clear-cache") => {
            services.clear_cache().await;
            println!("Cache cleared.");
        }
        Some("--refresh") => {
            services.refresh_services().await;
            print_service_list(services.services());
        }
        Some(id) => match services.service_by_id(id).await {
            Some(service) => print_service_details(&service),
            None => {
                println!("No service with id '{}'.", id);
                std::process::exit(1);
            }
        },
        None => {
            services.fetch_services().await;
            print_service_list(services.services());
        }
    }

    if let Some(origin) = services.last_origin() {
        info!(origin = origin.label(), "Data served");
    }

    Ok(())
}
