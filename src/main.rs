mod catalog;
mod controller;
mod core;
mod loans;
mod members;
mod persistence;
mod utils;

use crate::core::domain::Configuration;
use crate::persistence::json_store::JsonFileStore;

fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .init();
}

fn main() {
    setup_tracing();

    let config = Configuration::new(".");
    let store = JsonFileStore::new(&config);
    let mut library = store.load();
    println!("Data loaded from files.");

    controller::run(&mut library, &store);
}
