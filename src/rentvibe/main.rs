use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use rentvibe::api::{CmdMessage, ConfigAction, MessageLevel, RentApi, RentPaths};
use rentvibe::catalog_store::PropertyDetail;
use rentvibe::config::RentConfig;
use rentvibe::error::{RentError, Result};
use rentvibe::filter::FilterSpec;
use rentvibe::model::{Credentials, PropertyRecord};
use rentvibe::sort::SortOrder;
use rentvibe::store::fs::FileStore;
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::EnvFilter;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

const HOME_ENV: &str = "RENTVIBE_HOME";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let mut api = init_api()?;

    match cli.command {
        Some(Commands::List { sort }) => handle_list(&api, sort),
        Some(Commands::Search {
            q,
            location,
            min_price,
            max_price,
            bedrooms,
            bathrooms,
            property_type,
            amenities,
            query_string,
            sort,
        }) => {
            if let Some(query) = query_string {
                handle_search_query(&mut api, &query, sort)
            } else {
                let mut spec = FilterSpec::new()
                    .with_price_range(min_price, max_price)
                    .with_amenities(amenities);
                if let Some(q) = q {
                    spec = spec.with_search_query(q);
                }
                if let Some(location) = location {
                    spec = spec.with_location(location);
                }
                if let Some(raw) = bedrooms {
                    spec = spec.with_bedrooms_input(&raw);
                }
                if let Some(raw) = bathrooms {
                    spec = spec.with_bathrooms_input(&raw);
                }
                if let Some(property_type) = property_type {
                    spec = spec.with_property_type(property_type);
                }
                handle_search(&mut api, &spec, sort)
            }
        }
        Some(Commands::View { id }) => handle_view(&api, &id),
        Some(Commands::Favorite { id }) => handle_favorite(&mut api, &id),
        Some(Commands::Favorites) => handle_favorites(&api),
        Some(Commands::Register { email, password }) => {
            let result = api.register(&Credentials::new(email, password))?;
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Login { email, password }) => {
            let result = api.login(&Credentials::new(email, password))?;
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Logout) => {
            print_messages(&api.logout()?.messages);
            Ok(())
        }
        Some(Commands::Me) => {
            print_messages(&api.me()?.messages);
            Ok(())
        }
        Some(Commands::Config { key, value }) => handle_config(&api, key, value),
        None => handle_list(&api, None),
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "rentvibe", "rentvibe")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            RentError::Config(format!(
                "Could not determine data dir; set {} instead",
                HOME_ENV
            ))
        })
}

fn init_api() -> Result<RentApi<FileStore>> {
    let data_dir = data_dir()?;
    let config = RentConfig::load(&data_dir).unwrap_or_else(|e| {
        warn!(error = %e, "config unreadable, using defaults");
        RentConfig::default()
    });
    let store = FileStore::new(data_dir.clone());
    RentApi::from_config(store, config, RentPaths { data_dir })
}

fn handle_list(api: &RentApi<FileStore>, sort: Option<SortOrder>) -> Result<()> {
    let result = api.list(sort)?;
    print_properties(api, &result.listed_properties);
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(
    api: &mut RentApi<FileStore>,
    spec: &FilterSpec,
    sort: Option<SortOrder>,
) -> Result<()> {
    let result = api.search(spec, sort)?;
    print_properties(api, &result.listed_properties);
    print_messages(&result.messages);
    Ok(())
}

fn handle_search_query(
    api: &mut RentApi<FileStore>,
    query: &str,
    sort: Option<SortOrder>,
) -> Result<()> {
    let result = api.search_query(query, sort)?;
    print_properties(api, &result.listed_properties);
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(api: &RentApi<FileStore>, id: &str) -> Result<()> {
    let result = api.view(id)?;
    if let Some(detail) = &result.detail {
        print_detail(api, detail);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_favorite(api: &mut RentApi<FileStore>, id: &str) -> Result<()> {
    let result = api.toggle_favorite(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_favorites(api: &RentApi<FileStore>) -> Result<()> {
    let result = api.favorites()?;
    if !result.listed_properties.is_empty() {
        print_properties(api, &result.listed_properties);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(
    api: &RentApi<FileStore>,
    key: Option<String>,
    value: Option<String>,
) -> Result<()> {
    let show_all = key.is_none();
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            for key in RentConfig::KEYS {
                if let Some(value) = config.get(key) {
                    println!("{} = {}", key, value);
                }
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const LINE_WIDTH: usize = 100;
const PRICE_WIDTH: usize = 14;
const FAVORITE_MARKER: &str = "♥";

fn print_properties(api: &RentApi<FileStore>, properties: &[PropertyRecord]) {
    for property in properties {
        let idx_str = format!("{}. ", property.id);
        let marker = if api.catalog_store().is_favorite(&property.id) {
            format!("{} ", FAVORITE_MARKER)
        } else {
            "  ".to_string()
        };
        let price = format!(
            "{:>width$}",
            format!("{}/mo", format_price(property.price)),
            width = PRICE_WIDTH
        );

        let summary = format!(
            "{} · {} · {} bd {} ba · {}",
            property.title,
            property.location,
            property.bedrooms,
            property.bathrooms,
            property.property_type
        );

        let fixed_width = marker.width() + idx_str.width() + PRICE_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let summary_display = truncate_to_width(&summary, available);
        let padding = available.saturating_sub(summary_display.width());

        println!(
            "{}{}{}{}{}",
            marker.red(),
            idx_str.yellow(),
            summary_display,
            " ".repeat(padding),
            price.bold()
        );
    }
}

fn print_detail(api: &RentApi<FileStore>, detail: &PropertyDetail) {
    let property = &detail.property;
    let heading = if detail.is_favorite {
        format!("{} {}", FAVORITE_MARKER.red(), property.title.bold())
    } else {
        property.title.bold().to_string()
    };
    println!("{}", heading);
    println!("{}", property.location.dimmed());
    println!("--------------------------------");
    println!(
        "{}/mo · {} bd · {} ba · {} sq ft · {}",
        format_price(property.price),
        property.bedrooms,
        property.bathrooms,
        property.area,
        property.property_type
    );
    println!();
    println!("{}", property.description);
    if !property.amenities.is_empty() {
        println!();
        println!("Amenities: {}", property.amenities.join(", "));
    }
    if let Some(cover) = property.cover_image() {
        println!("{}", cover.dimmed());
    }

    if !detail.related.is_empty() {
        println!("\nSimilar properties");
        print_properties(api, &detail.related);
    }
}

/// `45000` becomes `₹45,000`.
fn format_price(price: u64) -> String {
    let digits = price.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("₹{}", grouped)
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_grouping() {
        assert_eq!(format_price(0), "₹0");
        assert_eq!(format_price(999), "₹999");
        assert_eq!(format_price(45_000), "₹45,000");
        assert_eq!(format_price(120_000), "₹120,000");
        assert_eq!(format_price(1_500_000), "₹1,500,000");
    }

    #[test]
    fn truncation_respects_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        let cut = truncate_to_width("a much longer line of text", 10);
        assert!(cut.ends_with('…'));
        assert!(cut.width() <= 10);
    }
}
