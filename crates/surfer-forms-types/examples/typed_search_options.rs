//! Example: From Raw Form Snapshot to Typed Search Options
//!
//! Demonstrates the two-layer flow: the form pass flags fields for the UI,
//! and the typed layer produces crawler-ready options once the pass accepts.
//!
//! Run: cargo run --example typed_search_options

use surfer_forms_types::{Category, SearchOptions};
use surfer_forms_validation::{validate, FormInput};

fn main() {
    // What the category multi-select is populated from.
    println!(
        "catalog: {} categories, first = {}",
        Category::all().len(),
        Category::all()[0].name
    );

    // A snapshot as a front end would post it.
    let snapshot = FormInput {
        categories: vec!["7".to_string(), "15".to_string()],
        min_price: "5".to_string(),
        max_price: "25".to_string(),
        min_bsr: "100".to_string(),
        max_bsr: "5000".to_string(),
        min_reviews: "0".to_string(),
        max_reviews: "300".to_string(),
        max_length: "18".to_string(),
        max_width: "14".to_string(),
        max_height: "8".to_string(),
        max_weight: "2.5".to_string(),
        tolerance: "5".to_string(),
    };

    // Layer 1: the per-field report the UI styles from.
    let report = validate(&snapshot);
    println!("form valid: {}", report.is_valid());

    // Layer 2: typed options for the crawler.
    match SearchOptions::from_input(&snapshot) {
        Ok(opts) => {
            println!("searching {} categories", opts.categories.len());
            println!("price range: {} - {}", opts.min_price, opts.max_price);
            println!("max volume: {:.1} cubic inches", opts.max_volume());
        }
        Err(err) => println!("cannot build options: {err}"),
    }

    // An inverted range never reaches the typed layer.
    let mut bad = snapshot.clone();
    bad.min_price = "30".to_string();
    let report = validate(&bad);
    println!(
        "inverted range -> valid: {}, flagged: {:?}",
        report.is_valid(),
        report.invalid_fields()
    );
    if let Err(err) = SearchOptions::from_input(&bad) {
        println!("typed layer refuses: {err}");
    }
}
