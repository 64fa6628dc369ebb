use anyhow::{Context, Result, bail};
use catalog::{
    Amenity, Atmosphere, Catalog, Category, Coordinate, Entity, EntityId, OperatingHours,
    PriceTier, load_snapshots,
};
use chrono::{Local, NaiveTime};
use clap::{Parser, Subcommand};
use colored::Colorize;
use discovery::{
    CertificationType, FilterState, PriceRange, Selected, SortOrder, select, sort_results,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::debug;
use trending::{Direction, TrendingEntry, TrendingScorer, TrendingWeights, compare};

/// DineDiscover - restaurant filtering, search and trending
#[derive(Parser)]
#[command(name = "dine-discover")]
#[command(about = "Filter, search and rank restaurants from local JSON data", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter and search a catalog
    Search {
        /// Path to the catalog JSON file (array of entities)
        #[arg(short, long, default_value = "data/catalog.json")]
        catalog: PathBuf,

        /// Free-text query matched against name, category and address
        #[arg(short, long, default_value = "")]
        query: String,

        /// Category (e.g. korean, cafe, 한식)
        #[arg(long)]
        category: Option<Category>,

        /// Price range, e.g. "2", "1-3" or "₩₩..₩₩₩"
        #[arg(long)]
        price: Option<PriceRange>,

        /// Only entities open at the reference time
        #[arg(long)]
        open_now: bool,

        /// Reference time as HH:MM (defaults to the local time of day)
        #[arg(long, value_parser = parse_time)]
        at: Option<NaiveTime>,

        /// Atmosphere tag (e.g. cozy, romantic)
        #[arg(long)]
        atmosphere: Option<Atmosphere>,

        /// Amenity tag (e.g. parking, wifi)
        #[arg(long)]
        amenity: Option<Amenity>,

        /// Certification type: all, official, peer or taste-match
        #[arg(long, default_value = "all")]
        certification: CertificationType,

        /// Viewer latitude
        #[arg(long, requires = "lng", allow_negative_numbers = true)]
        lat: Option<f64>,

        /// Viewer longitude
        #[arg(long, requires = "lat", allow_negative_numbers = true)]
        lng: Option<f64>,

        /// Maximum distance from the viewer in meters
        #[arg(long, requires = "lat")]
        radius: Option<f64>,

        /// Minimum rating (0-5)
        #[arg(long)]
        min_rating: Option<f32>,

        /// Result order: input, distance, rating or name
        #[arg(long, default_value = "input")]
        sort: SortOrder,

        /// Maximum number of results to print
        #[arg(long, default_value = "20")]
        limit: usize,
    },

    /// Rank two snapshot files and show rank movement
    Trending {
        /// Earlier snapshot file (array of engagement snapshots)
        #[arg(long)]
        previous: Option<PathBuf>,

        /// Current snapshot file
        #[arg(long)]
        current: PathBuf,

        /// Weights config (JSON); defaults are used when omitted
        #[arg(long)]
        weights: Option<PathBuf>,

        /// Catalog used to show entity names
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// Number of rows to print
        #[arg(long, default_value = "10")]
        limit: usize,
    },

    /// Run benchmark to test selection performance
    Benchmark {
        /// Size of the generated catalog
        #[arg(long, default_value = "10000")]
        entities: usize,

        /// Number of selections to time
        #[arg(long, default_value = "200")]
        iterations: usize,

        /// Seed for the generated catalog
        #[arg(long, default_value = "42")]
        seed: u64,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Search {
            catalog,
            query,
            category,
            price,
            open_now,
            at,
            atmosphere,
            amenity,
            certification,
            lat,
            lng,
            radius,
            min_rating,
            sort,
            limit,
        } => {
            let mut filter = FilterState::new()
                .with_query(query)
                .with_open_now(open_now)
                .with_certification(certification);
            filter.category = category;
            filter.price = price;
            filter.atmosphere = atmosphere;
            filter.amenity = amenity;
            filter.min_rating = min_rating;
            filter.max_distance_m = radius;
            if let (Some(lat), Some(lng)) = (lat, lng) {
                filter = filter.with_viewer(Coordinate::new(lat, lng));
            }
            let at = at.unwrap_or_else(|| Local::now().time());
            handle_search(&catalog, &filter, at, sort, limit)?
        }
        Commands::Trending {
            previous,
            current,
            weights,
            catalog,
            limit,
        } => handle_trending(
            previous.as_deref(),
            &current,
            weights.as_deref(),
            catalog.as_deref(),
            limit,
        )?,
        Commands::Benchmark {
            entities,
            iterations,
            seed,
        } => handle_benchmark(entities, iterations, seed)?,
    }

    Ok(())
}

fn parse_time(s: &str) -> std::result::Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M")
        .map_err(|e| format!("expected HH:MM, got '{s}': {e}"))
}

fn load_catalog(path: &Path) -> Result<Catalog> {
    let start = Instant::now();
    let catalog = Catalog::load_from_file(path)
        .with_context(|| format!("Failed to load catalog from {}", path.display()))?;
    println!(
        "{} Loaded {} entities in {:?}",
        "✓".green(),
        catalog.len(),
        start.elapsed()
    );
    Ok(catalog)
}

/// Handle the 'search' command
fn handle_search(
    path: &Path,
    filter: &FilterState,
    at: NaiveTime,
    sort: SortOrder,
    limit: usize,
) -> Result<()> {
    let catalog = load_catalog(path)?;
    debug!(?filter, "Built filter from flags");

    let selection = select(catalog.entities(), filter, at).context("Invalid filter")?;
    let mut results = selection.to_vec();
    sort_results(&mut results, sort);

    let title = if filter.query.is_empty() {
        "Results".to_string()
    } else {
        format!("Results for '{}'", filter.query)
    };
    println!(
        "{} ({} of {} at {})",
        title.bold().blue(),
        results.len(),
        catalog.len(),
        at.format("%H:%M")
    );
    for (i, selected) in results.iter().take(limit).enumerate() {
        print_result(i + 1, selected);
    }
    if results.len() > limit {
        println!("  ... {} more", results.len() - limit);
    }
    Ok(())
}

fn print_result(position: usize, selected: &Selected<'_>) {
    let entity = selected.entity;
    let distance = match selected.distance_m {
        Some(m) if m >= 1000.0 => format!(" {:.1} km", m / 1000.0),
        Some(m) => format!(" {:.0} m", m),
        None => String::new(),
    };
    println!(
        "{}. {} [{} · {}] ★{:.1}{}",
        position.to_string().green(),
        entity.name.bold(),
        entity.category.label(),
        entity.price.symbol(),
        entity.rating,
        distance.cyan()
    );
    if !entity.address.is_empty() {
        println!("   {}", entity.address.dimmed());
    }
}

/// Handle the 'trending' command
fn handle_trending(
    previous: Option<&Path>,
    current: &Path,
    weights: Option<&Path>,
    catalog: Option<&Path>,
    limit: usize,
) -> Result<()> {
    let weights = match weights {
        Some(path) => TrendingWeights::load_from_file(path)
            .with_context(|| format!("Failed to load weights from {}", path.display()))?,
        None => TrendingWeights::default(),
    };
    let scorer = TrendingScorer::new(weights)?;
    let names = catalog.map(load_catalog).transpose()?;

    let current = scorer.rank(
        &load_snapshots(current)
            .with_context(|| format!("Failed to load snapshots from {}", current.display()))?,
    )?;
    let previous = match previous {
        Some(path) => {
            let ranking = scorer.rank(
                &load_snapshots(path)
                    .with_context(|| format!("Failed to load snapshots from {}", path.display()))?,
            )?;
            if ranking.timestamp() >= current.timestamp() && !current.is_empty() {
                bail!(
                    "Previous snapshot ({}) is not older than current snapshot ({})",
                    ranking.timestamp(),
                    current.timestamp()
                );
            }
            Some(ranking)
        }
        None => None,
    };

    let rows = compare(previous.as_ref(), &current);
    println!("{}", "Trending now:".bold().blue());
    for row in rows.iter().take(limit) {
        print_trending(row, names.as_ref());
    }
    Ok(())
}

fn print_trending(row: &TrendingEntry, names: Option<&Catalog>) {
    let name = entity_name(row.entry.entity_id, names);
    let movement = match row.delta.direction {
        Direction::Up => format!("{} {}", row.delta.direction.symbol(), row.delta.magnitude).green(),
        Direction::Down => {
            format!("{} {}", row.delta.direction.symbol(), -row.delta.magnitude).red()
        }
        Direction::Stable => row.delta.direction.symbol().normal(),
        Direction::New => row.delta.direction.symbol().yellow(),
    };
    println!(
        "{:>3}. {:<32} {:>10.1}  {}",
        row.entry.current_rank.to_string().green(),
        name,
        row.score,
        movement
    );
}

fn entity_name(id: EntityId, names: Option<&Catalog>) -> String {
    names
        .and_then(|c| c.get(id))
        .map(|e| e.name.clone())
        .unwrap_or_else(|| format!("#{id}"))
}

/// Handle the 'benchmark' command
fn handle_benchmark(entities: usize, iterations: usize, seed: u64) -> Result<()> {
    if iterations == 0 {
        bail!("iterations must be at least 1");
    }

    let start = Instant::now();
    let catalog = Catalog::from_entities(generate_catalog(entities, seed)?)?;
    println!(
        "{} Generated {} entities in {:?}",
        "✓".green(),
        catalog.len(),
        start.elapsed()
    );

    let viewer = Coordinate::new(37.5665, 126.9780);
    let filters = [
        FilterState::new(),
        FilterState::new()
            .with_category(Category::Korean)
            .with_open_now(true),
        FilterState::new()
            .with_amenity(Amenity::Parking)
            .with_query("gang"),
        FilterState::new()
            .with_viewer(viewer)
            .with_max_distance(3_000.0)
            .with_min_rating(4.0),
    ];
    let at = NaiveTime::from_hms_opt(19, 30, 0).unwrap_or_default();

    let mut timings: Vec<Duration> = Vec::with_capacity(iterations);
    let mut matched = 0usize;
    for i in 0..iterations {
        let filter = &filters[i % filters.len()];
        let start = Instant::now();
        let mut results = select(catalog.entities(), filter, at)?.to_vec();
        sort_results(&mut results, SortOrder::Distance);
        timings.push(start.elapsed());
        matched += results.len();
    }

    let total_time: Duration = timings.iter().sum();
    let avg_latency = total_time / timings.len() as u32;
    timings.sort();
    let percentile = |p: f64| timings[((timings.len() - 1) as f64 * p) as usize];
    let throughput = iterations as f64 / total_time.as_secs_f64();

    println!("{}", "Benchmark results:".bold().blue());
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", percentile(0.50));
    println!("P95 latency: {:?}", percentile(0.95));
    println!("P99 latency: {:?}", percentile(0.99));
    println!("Throughput: {:.2} selections/second", throughput);
    println!("Average matches: {:.1}", matched as f64 / iterations as f64);

    Ok(())
}

const NAME_PARTS: [&str; 8] = [
    "Gangnam", "Hongdae", "Itaewon", "Jongno", "Mapo", "Seongsu", "Yeonnam", "Euljiro",
];
const ATMOSPHERES: [Atmosphere; 4] = [
    Atmosphere::Cozy,
    Atmosphere::Lively,
    Atmosphere::Romantic,
    Atmosphere::Quiet,
];
const AMENITIES: [Amenity; 4] = [
    Amenity::Parking,
    Amenity::Wifi,
    Amenity::Reservation,
    Amenity::Takeout,
];

/// Random restaurants scattered around central Seoul
fn generate_catalog(count: usize, seed: u64) -> Result<Vec<Entity>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut entities = Vec::with_capacity(count);

    for i in 0..count {
        let id = EntityId::try_from(i + 1).context("catalog too large")?;
        let category = Category::ALL[rng.random_range(0..Category::ALL.len())];
        let price = PriceTier::try_from(rng.random_range(1..=4u8))?;
        let location = Coordinate::new(
            rng.random_range(37.45..37.65),
            rng.random_range(126.85..127.15),
        );
        let part = NAME_PARTS[rng.random_range(0..NAME_PARTS.len())];
        let open = rng.random_range(6..12u32);
        let close = rng.random_range(18..27u32) % 24;

        let mut entity = Entity::restaurant(
            id,
            format!("{part} {} {i}", category.label()),
            category,
            price,
            location,
        )
        .with_rating((rng.random_range(25..=50u32) as f32) / 10.0)
        .with_hours(OperatingHours::single(
            format!("{open:02}:00"),
            format!("{close:02}:00"),
        ))
        .with_atmosphere(ATMOSPHERES[rng.random_range(0..ATMOSPHERES.len())])
        .with_address(format!("{part}-ro {}", rng.random_range(1..300u32)));
        for amenity in AMENITIES {
            if rng.random_bool(0.3) {
                entity = entity.with_amenity(amenity);
            }
        }
        entities.push(entity);
    }
    Ok(entities)
}
