// Booking Timeline
// Prints the month timeline layout for a JSON booking file

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Parser;

use booking_timeline::models::booking::{BookingStatus, TimelineBooking};
use booking_timeline::models::layout::RenderSegment;
use booking_timeline::services::booking_import::load_bookings;
use booking_timeline::services::settings::{default_settings_path, load_settings};
use booking_timeline::services::timeline::lanes::layout_order;
use booking_timeline::services::timeline::{TimelineLayout, TimelineView};

#[derive(Debug, Parser)]
#[command(name = "booking-timeline", about = "Month timeline layout for a booking file")]
struct Args {
    /// JSON file holding an array of bookings
    bookings: PathBuf,
    /// Month to lay out (YYYY-MM); defaults to the current month
    #[arg(value_parser = parse_month)]
    month: Option<NaiveDate>,
    /// Print the full layout as JSON instead of a text preview
    #[arg(long)]
    json: bool,
}

fn parse_month(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(&format!("{}-01", value), "%Y-%m-%d")
        .map_err(|_| format!("invalid month '{}', expected YYYY-MM", value))
}

/// Bar end markers: `<`/`>` continue off-grid, `[`/`]` start/end, `-` continues in another row.
fn bar_ends(segment: &RenderSegment) -> (char, char) {
    let open = match (segment.is_clipped_start, segment.is_row_start) {
        (true, _) => '<',
        (false, true) => '[',
        (false, false) => '-',
    };
    let close = match (segment.is_clipped_end, segment.is_row_end) {
        (true, _) => '>',
        (false, true) => ']',
        (false, false) => '-',
    };
    (open, close)
}

fn print_preview(layout: &TimelineLayout, bookings: &[TimelineBooking]) {
    let statuses: HashMap<&str, BookingStatus> =
        layout_order(layout.grid_start, layout.grid_end, bookings)
            .into_iter()
            .map(|booking| (booking.id.as_str(), booking.status))
            .collect();

    println!(
        "{}  ({} to {})",
        layout.reference_date.format("%B %Y"),
        layout.grid_start,
        layout.grid_end
    );
    for (week_row, week) in layout.days.chunks(7).enumerate() {
        let dates: Vec<String> = week
            .iter()
            .map(|day| {
                let marker = if day.is_today { '*' } else { ' ' };
                if day.is_in_displayed_month {
                    format!("{:>2}{}", day.day_number(), marker)
                } else {
                    format!("({:>2})", day.day_number())
                }
            })
            .collect();
        println!("week {}: {}", week_row, dates.join(" "));

        for segment in layout.segments_in_row(week_row) {
            let (open, close) = bar_ends(segment);
            let status = statuses
                .get(segment.booking_id.as_str())
                .copied()
                .unwrap_or_default();
            let checkmark = if segment.is_row_end && status.shows_checkmark() {
                " ✓"
            } else {
                ""
            };
            println!(
                "    lane {} cols {}-{} {}{}{} ({}{})  top={} left={} width={}",
                segment.lane,
                segment.first_col,
                segment.last_col,
                open,
                segment.booking_id,
                close,
                status.label(),
                checkmark,
                segment.top_px,
                segment.left_px,
                segment.width_px
            );
        }
    }
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    let settings = match default_settings_path() {
        Some(path) => load_settings(&path)?,
        None => Default::default(),
    };
    let bookings = load_bookings(&args.bookings)?;
    log::info!("Loaded {} bookings from {}", bookings.len(), args.bookings.display());

    let today = Local::now().date_naive();
    let view = TimelineView::new(args.month.unwrap_or(today), settings);
    let layout = view.layout(&bookings, today);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&layout)?);
    } else {
        print_preview(&layout, &bookings);
    }
    Ok(())
}
