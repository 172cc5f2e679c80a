use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use tracing::info;
use waypoint_core::display::{
    budget_text, completion_text, format_long_date, rating_text, traveler_text,
};
use waypoint_core::{
    Dashboard, Destination, NewDestination, NewTrip, PlannerConfig, PlannerConfigExt, Priority,
    TripId, TripOverview, load_export, load_form, parse_instant, prepare_destinations,
    prepare_trip, price_range_label, priority_of, trip_type_name,
};

use crate::{CliContext, CliError};

pub fn load(path: Option<&str>, ctx: &mut CliContext) -> Result<(), CliError> {
    let path = PathBuf::from(path.unwrap_or(ctx.config.data_path.as_str()));
    let index = load_export(&path)?;
    println!("Loaded {} trips from {}", index.len(), path.display());
    ctx.set_index(index);
    Ok(())
}

pub fn list(favorites: bool, ctx: &CliContext) -> Result<(), CliError> {
    let index = ctx.index()?;
    let dashboard = if favorites {
        index.favorites_dashboard(ctx.now())
    } else {
        index.dashboard(ctx.now())
    };
    if dashboard.trips.is_empty() {
        println!("{}", if favorites { "No favorite trips" } else { "No trips" });
        return Ok(());
    }
    print!("{}", render_dashboard(&dashboard));
    Ok(())
}

pub fn show(id: TripId, ctx: &CliContext) -> Result<(), CliError> {
    let index = ctx.index()?;
    let overview = index.overview(id, ctx.now())?;
    print!("{}", render_overview(&overview, index.destinations(id)));
    Ok(())
}

pub fn destinations(id: TripId, ctx: &CliContext) -> Result<(), CliError> {
    let index = ctx.index()?;
    let ordered = index.ordered_destinations(id)?;
    if ordered.is_empty() {
        println!("No destinations for trip {id}");
        return Ok(());
    }
    print!("{}", render_destinations(&ordered));
    Ok(())
}

/// Prepare the payloads for a saved new-trip form without submitting them.
pub fn draft(path: &str, trip_id: Option<TripId>, ctx: &CliContext) -> Result<(), CliError> {
    let form = load_form(Path::new(path))?;
    let trip = prepare_trip(&form.trip)?;
    let trip_id = trip_id.unwrap_or_else(|| ctx.index().map_or(1, |index| index.next_trip_id()));
    let destinations = prepare_destinations(trip_id, &form.destinations);
    print!("{}", render_draft(trip_id, &trip, &destinations));
    Ok(())
}

pub fn now(set: Option<&str>, clear: bool, ctx: &mut CliContext) -> Result<(), CliError> {
    if clear {
        ctx.clear_now();
        info!("Unpinned current instant");
    } else if let Some(value) = set {
        let instant = parse_instant(value)?;
        ctx.pin_now(instant);
        info!(%instant, "Pinned current instant");
    }

    let source = if ctx.pinned_now().is_some() { "pinned" } else { "clock" };
    println!("now: {} ({source})", format_instant(ctx.now()));
    Ok(())
}

pub fn configure(
    data_path: Option<String>,
    use_utc: Option<bool>,
    ctx: &mut CliContext,
) -> Result<(), CliError> {
    if data_path.is_some() || use_utc.is_some() {
        if let Some(path) = data_path {
            ctx.config.data_path = path;
        }
        if let Some(utc) = use_utc {
            ctx.config.use_utc = utc;
        }
        ctx.config.save()?;
        info!("Configuration saved");
    }
    print!("{}", render_config(&ctx.config));
    Ok(())
}

pub fn exit() {
    write!(std::io::stdout(), "quitting...").expect("error exiting");
    std::io::stdout().flush().expect("error flushing stdout");
}

// ─────────────────────────────────────────────────────────────────────────────
// Rendering
// ─────────────────────────────────────────────────────────────────────────────

pub fn render_dashboard(dashboard: &Dashboard<'_>) -> String {
    let mut out = format!(
        "{:<6} {:<28} {:<12} {:<12} {:<10} {:<16} {}\n",
        "ID", "Title", "Start", "End", "Status", "Countdown", "Progress"
    );
    out.push_str(&"-".repeat(96));
    out.push('\n');

    for overview in &dashboard.trips {
        let trip = overview.trip;
        out.push_str(&format!(
            "{:<6} {:<28} {:<12} {:<12} {:<10} {:<16} {}%\n",
            trip.id,
            truncate(&trip.title, 28),
            trip.start_date.format("%Y-%m-%d").to_string(),
            trip.end_date.format("%Y-%m-%d").to_string(),
            overview.status.status,
            overview.status.days_text,
            overview.progress,
        ));
    }

    let counts = &dashboard.counts;
    out.push_str(&format!(
        "\n{} upcoming, {} ongoing, {} completed\n",
        counts.upcoming, counts.ongoing, counts.completed
    ));
    out
}

pub fn render_overview(overview: &TripOverview<'_>, destinations: &[Destination]) -> String {
    let trip = overview.trip;
    let mut out = String::new();

    let favorite = if trip.is_favorite { " *" } else { "" };
    out.push_str(&format!("{}{favorite}\n", trip.title));

    let location: Vec<&str> = [trip.city.as_deref(), trip.country.as_deref()]
        .into_iter()
        .flatten()
        .filter(|s| !s.is_empty())
        .collect();
    if !location.is_empty() {
        out.push_str(&format!("  {}\n", location.join(", ")));
    }

    out.push_str(&format!(
        "  {} | {}\n",
        trip_type_name(trip.trip_type.as_deref()),
        traveler_text(trip.traveler_count)
    ));
    out.push_str(&format!("  From:     {}\n", format_long_date(trip.start_date)));
    out.push_str(&format!("  To:       {}\n", format_long_date(trip.end_date)));
    out.push_str(&format!("  Duration: {}\n", overview.duration));
    out.push_str(&format!(
        "  Status:   {} ({})\n",
        overview.status.status, overview.status.days_text
    ));
    out.push_str(&format!("  Budget:   {}\n", budget_text(trip.budget)));
    if let Some(rating) = rating_text(trip.trip_rating) {
        out.push_str(&format!("  Rating:   {rating}\n"));
    }
    if overview.total > 0 {
        out.push_str(&format!(
            "  Progress: {}% ({})\n",
            overview.progress,
            completion_text(destinations)
        ));
    }
    if let Some(notes) = trip.notes.as_deref().filter(|n| !n.trim().is_empty()) {
        out.push_str(&format!("  Notes:    {notes}\n"));
    }
    out
}

pub fn render_destinations(ordered: &[&Destination]) -> String {
    let mut out = String::new();
    for destination in ordered {
        let mark = if destination.is_completed { "[x]" } else { "[ ]" };
        out.push_str(&format!(
            "{mark} {:<28} {}\n",
            truncate(&destination.name, 28),
            priority_of(destination).label()
        ));

        let mut details: Vec<String> = Vec::new();
        if let Some(kind) = destination.destination_type.as_deref() {
            details.push(kind.to_string());
        }
        if let Some(price) = destination.price_range.as_deref() {
            match price_range_label(price) {
                Some(label) => details.push(format!("{price} {label}")),
                None => details.push(price.to_string()),
            }
        }
        if let Some(visit) = destination.visit_date {
            let time = destination.visit_time.as_deref().unwrap_or("");
            details.push(format!("{} {time}", visit.format("%Y-%m-%d")).trim_end().to_string());
        }
        if let Some(address) = destination.address.as_deref() {
            details.push(address.to_string());
        }
        if !details.is_empty() {
            out.push_str(&format!("    {}\n", details.join(" | ")));
        }
    }
    out
}

pub fn render_draft(trip_id: TripId, trip: &NewTrip, destinations: &[NewDestination]) -> String {
    let mut out = format!("Trip {trip_id}: {}\n", trip.title);
    out.push_str(&format!(
        "  {} | {}\n",
        trip_type_name(Some(&trip.trip_type)),
        traveler_text(trip.traveler_count)
    ));
    out.push_str(&format!(
        "  {} to {}\n",
        trip.start_date.format("%Y-%m-%d"),
        trip.end_date.format("%Y-%m-%d")
    ));
    out.push_str(&format!("  Budget:   {}\n", budget_text(trip.budget)));

    if destinations.is_empty() {
        out.push_str("  No destinations\n");
    }
    for destination in destinations {
        out.push_str(&format!(
            "  {:>2}. {:<28} {}\n",
            destination.order_index,
            truncate(&destination.name, 28),
            Priority::from_level(destination.priority_level).label()
        ));
    }
    out
}

pub fn render_config(config: &PlannerConfig) -> String {
    format!(
        "data_path: {}\nuse_utc:   {}\n",
        config.data_path, config.use_utc
    )
}

fn format_instant(now: NaiveDateTime) -> String {
    now.format("%Y-%m-%d %H:%M:%S").to_string()
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut cut: String = value.chars().take(width.saturating_sub(1)).collect();
    cut.push('~');
    cut
}

#[cfg(test)]
mod tests {
    use super::*;
    use waypoint_core::{DestinationDraft, TripDraft, TripIndex, parse_export};

    const EXPORT: &str = r#"{
        "trips": [
            {
                "id": 1, "start_date": "2025-06-10", "end_date": "2025-06-15",
                "title": "Lisbon", "city": "Lisbon", "country": "Portugal",
                "trip_type": "vacation", "budget": 2500, "traveler_count": 2,
                "trip_rating": 5, "is_favorite": true
            }
        ],
        "destinations": [
            {"id": 10, "trip_id": 1, "order_index": 1, "priority_level": 3, "name": "Alfama"},
            {"id": 11, "trip_id": 1, "order_index": 2, "priority_level": 1, "name": "Belem",
             "is_completed": true, "price_range": "$$", "visit_date": "2025-06-11", "visit_time": "10:00"}
        ]
    }"#;

    fn index() -> TripIndex {
        TripIndex::from_export(parse_export(EXPORT).unwrap()).unwrap()
    }

    #[test]
    fn dashboard_rows_include_status_and_progress() {
        let index = index();
        let now = parse_instant("2025-06-12").unwrap();
        let text = render_dashboard(&index.dashboard(now));
        assert!(text.contains("Lisbon"));
        assert!(text.contains("ongoing"));
        assert!(text.contains("3 days left"));
        assert!(text.contains("50%"));
        assert!(text.contains("0 upcoming, 1 ongoing, 0 completed"));
    }

    #[test]
    fn overview_lists_trip_details() {
        let index = index();
        let now = parse_instant("2025-06-01").unwrap();
        let overview = index.overview(1, now).unwrap();
        let text = render_overview(&overview, index.destinations(1));
        assert!(text.starts_with("Lisbon *\n"));
        assert!(text.contains("Lisbon, Portugal"));
        assert!(text.contains("Vacation | 2 travelers"));
        assert!(text.contains("Tuesday, June 10, 2025"));
        assert!(text.contains("6 days"));
        assert!(text.contains("upcoming (9 days to go)"));
        assert!(text.contains("$2,500"));
        assert!(text.contains("5 out of 5 stars"));
        assert!(text.contains("1 of 2 destinations completed"));
    }

    #[test]
    fn destinations_render_in_display_order() {
        let index = index();
        let ordered = index.ordered_destinations(1).unwrap();
        let text = render_destinations(&ordered);
        let belem = text.find("Belem").unwrap();
        let alfama = text.find("Alfama").unwrap();
        assert!(belem < alfama);
        assert!(text.contains("[x] Belem"));
        assert!(text.contains("Must See"));
        assert!(text.contains("$$ Moderate | 2025-06-11 10:00"));
    }

    #[test]
    fn draft_lists_trip_and_kept_destinations() {
        let trip = prepare_trip(&TripDraft {
            title: "Kyoto".to_string(),
            start_date: "2025-10-01".to_string(),
            end_date: "2025-10-05".to_string(),
            budget: "1250.50".to_string(),
            traveler_count: "2".to_string(),
            ..TripDraft::default()
        })
        .unwrap();
        let drafts = vec![
            DestinationDraft::named("Gion"),
            DestinationDraft::default(),
            DestinationDraft {
                priority_level: "1".to_string(),
                ..DestinationDraft::named("Fushimi Inari")
            },
        ];
        let destinations = prepare_destinations(4, &drafts);
        let text = render_draft(4, &trip, &destinations);

        assert!(text.starts_with("Trip 4: Kyoto\n"));
        assert!(text.contains("Vacation | 2 travelers"));
        assert!(text.contains("2025-10-01 to 2025-10-05"));
        assert!(text.contains("$1,250.5"));
        assert!(text.contains(" 1. Gion"));
        assert!(text.contains(" 3. Fushimi Inari"));
        assert!(text.contains("Must See"));
        assert!(!text.contains(" 2. "));
    }

    #[test]
    fn favorites_dashboard_keeps_only_favorites() {
        let export = parse_export(EXPORT).unwrap();
        let mut trips = export.trips.clone();
        let mut other = trips[0].clone();
        other.id = 2;
        other.title = "Porto".to_string();
        other.is_favorite = false;
        trips.push(other);
        let index = TripIndex::new(trips, export.destinations).unwrap();

        let now = parse_instant("2025-06-12").unwrap();
        let text = render_dashboard(&index.favorites_dashboard(now));
        assert!(text.contains("Lisbon"));
        assert!(!text.contains("Porto"));
        assert!(render_dashboard(&index.dashboard(now)).contains("Porto"));
    }

    #[test]
    fn truncate_long_titles() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long trip title", 10), "a very lo~");
    }
}
