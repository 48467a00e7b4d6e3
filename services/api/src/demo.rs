use crate::infra::{demo_content, demo_properties};
use clap::Args;
use coastline_stays::discovery::recommendation::{CuratedMap, RecommendationEngine};
use coastline_stays::discovery::seasonal::{select_seasonal_content, Season};
use coastline_stays::error::AppError;

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Guide slug to recommend properties for
    #[arg(long)]
    pub(crate) slug: String,
    /// Maximum number of recommendations
    #[arg(long, default_value_t = 3)]
    pub(crate) limit: usize,
}

#[derive(Args, Debug)]
pub(crate) struct SeasonalArgs {
    /// Calendar month (1-12)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub(crate) month: u32,
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let mut catalog = demo_properties();
    catalog.sort_by(|a, b| a.title.cmp(&b.title));
    let content = demo_content();

    println!("Property recommendations demo");

    let Some(guide) = content.iter().find(|c| c.slug == args.slug) else {
        println!("No guide with slug '{}' in the demo data.", args.slug);
        println!("\nAvailable guides:");
        for item in &content {
            println!("- {} ({})", item.title, item.slug);
        }
        return Ok(());
    };

    let engine = RecommendationEngine::with_limit(CuratedMap::standard(), args.limit);
    let picks = engine.recommend(guide, &catalog);

    println!("Guide: {} ({})", guide.title, guide.slug);

    if picks.is_empty() {
        println!("\nNo matching properties in the demo catalog.");
        return Ok(());
    }

    println!("\nRecommended properties");
    for pick in &picks {
        println!(
            "- {} | {} bedroom(s), sleeps {} | {}",
            pick.property.title, pick.property.bedrooms, pick.property.guests, pick.reason
        );
    }

    Ok(())
}

pub(crate) fn run_seasonal(args: SeasonalArgs) -> Result<(), AppError> {
    let profile = Season::from_month(args.month).profile();
    let content = demo_content();
    let picks = select_seasonal_content(profile, &content, 3);

    println!("Seasonal digest demo");
    println!("Month {} -> {}", args.month, profile.label);

    println!("\nWhat's great this season");
    for activity in &profile.activities {
        println!("- {}: {}", activity.title, activity.description);
    }

    if picks.is_empty() {
        println!("\nSeasonal guides: none yet, more coming soon");
    } else {
        println!("\nSeasonal guides");
        for item in &picks {
            println!("- {} ({})", item.title, item.slug);
        }
    }

    Ok(())
}
