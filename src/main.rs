//! Blueprint Catalog - Demo Driver
//!
//! Seeds a shared in-memory store with sample blueprints, then shows every
//! query twice: through a service bound to the redundancy filter and through
//! one bound to the subsampling filter. Both services share the same store,
//! so the two views differ only in filtering.

use std::sync::Arc;

use clap::Parser;

use blueprints::core::error::{BlueprintError, Result};
use blueprints::filters::{filter_for, FilterKind};
use blueprints::model::{Blueprint, Point};
use blueprints::persistence::{BlueprintsPersistence, InMemoryBlueprintPersistence};
use blueprints::services::BlueprintsServices;

#[derive(Parser, Debug)]
#[command(name = "blueprints")]
#[command(about = "In-memory blueprint catalog with pluggable result filters")]
struct Args {
    /// Author shown in the per-author catalog sections
    #[arg(long, default_value = "john")]
    author: String,

    /// Print query results as JSON instead of formatted text
    #[arg(long)]
    json: bool,

    /// Tracing filter directive
    #[arg(long, default_value = "blueprints=info")]
    log: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(args.log.as_str())
        .init();

    tracing::info!("Blueprint catalog starting...");

    // One store, two services differing only in their bound filter
    let store: Arc<dyn BlueprintsPersistence> = Arc::new(InMemoryBlueprintPersistence::new());
    let svc_redundancy =
        BlueprintsServices::new(Arc::clone(&store), filter_for(FilterKind::Redundancy));
    let svc_subsampling =
        BlueprintsServices::new(Arc::clone(&store), filter_for(FilterKind::Subsampling));

    // Registering through either service lands in the same store
    seed_catalog(&svc_redundancy)?;

    show_catalog("Redundancy filter view", &svc_redundancy, &args)?;
    show_catalog("Subsampling filter view", &svc_subsampling, &args)?;

    // An expected-absent lookup is a normal outcome for the demo; anything
    // other than a not-found error here is fatal.
    section("Missing blueprint lookup");
    match svc_redundancy.get_blueprint("noone", "nothing") {
        Err(BlueprintError::BlueprintNotFound { author, name }) => {
            println!("[OK] Not found (expected): {}:{}", author, name);
        }
        Ok(bp) => println!("Unexpected hit: {}", bp),
        Err(e) => return Err(e),
    }

    Ok(())
}

/// Register the sample blueprints used by the demo
fn seed_catalog(services: &BlueprintsServices) -> Result<()> {
    // Consecutive repeats, to show the redundancy filter at work
    let dups = Blueprint::new(
        "john",
        "dups",
        vec![
            Point::new(0, 0),
            Point::new(0, 0),
            Point::new(5, 5),
            Point::new(5, 5),
            Point::new(10, 10),
        ],
    );

    // Many distinct points, to show the subsampling filter at work
    let long = Blueprint::new(
        "mike",
        "long",
        vec![
            Point::new(0, 0),
            Point::new(1, 1),
            Point::new(2, 2),
            Point::new(3, 3),
            Point::new(4, 4),
            Point::new(5, 5),
        ],
    );

    let house = Blueprint::new("john", "house", vec![Point::new(0, 0), Point::new(10, 10)]);
    let car = Blueprint::new("john", "car", vec![Point::new(5, 5), Point::new(15, 15)]);
    let garden = Blueprint::new("anna", "garden", vec![Point::new(3, 3), Point::new(7, 7)]);

    for bp in [house, car, garden, dups, long] {
        services.add_new_blueprint(bp)?;
    }

    tracing::info!("Seeded demo catalog");
    Ok(())
}

/// Print every query the demo exercises through one service
fn show_catalog(title: &str, services: &BlueprintsServices, args: &Args) -> Result<()> {
    section(title);

    println!("-- ALL --");
    render(&services.get_all_blueprints()?, args)?;

    println!("\n-- BY AUTHOR: {} --", args.author);
    render(&services.get_blueprints_by_author(&args.author)?, args)?;

    for (author, name) in [("john", "dups"), ("mike", "long")] {
        println!("\n-- SPECIFIC: {}:{} --", author, name);
        render(&[services.get_blueprint(author, name)?], args)?;
    }

    Ok(())
}

fn render(blueprints: &[Blueprint], args: &Args) -> Result<()> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(blueprints)?);
    } else {
        for bp in blueprints {
            println!("{}", points_of(bp));
        }
    }
    Ok(())
}

fn section(title: &str) {
    println!("\n=== {} ===", title);
}

/// One-line rendering of a blueprint and its point sequence
fn points_of(bp: &Blueprint) -> String {
    let coords: Vec<String> = bp.points().iter().map(|p| p.to_string()).collect();
    format!("{} -> [{}] ({} pts)", bp, coords.join(", "), bp.point_count())
}
