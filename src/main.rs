mod browse;
mod clock;
mod config;
mod error;
mod prefs;
mod render;
mod state;

use std::io;
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use serde::Serialize;
use slots::{Cursor, DaySlotTable, SlotKey, TimeOfWeek, jump_to, jump_to_now, meetings_at, parse_day};

use crate::config::AppConfig;
use crate::error::AppError;
use crate::prefs::Prefs;
use crate::render::{MeetingDetails, SlotView, search_hits, search_text};
use crate::state::AppContext;

#[derive(Parser, Debug)]
#[command(name = "meetingfinder", about = "Browse a weekly meeting list by day and start time")]
struct Cli {
    /// Meeting feed JSON file.
    #[arg(long, env = "MEETINGS_FEED")]
    feed: Option<PathBuf>,

    /// Preferences JSON file.
    #[arg(long, env = "MEETINGS_PREFS")]
    prefs: Option<PathBuf>,

    /// Only show meetings marked as attended.
    #[arg(long)]
    attended: bool,

    /// Print JSON instead of text.
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the slot nearest the current time.
    Now,
    /// Show the slot nearest a day and time, e.g. `slot wed 19:00`.
    Slot { day: String, time: String },
    /// Step from a slot position without any saved state.
    Step {
        day: String,
        slot: usize,
        #[arg(long)]
        back: bool,
        #[arg(long, default_value_t = 1)]
        count: usize,
    },
    /// Show meetings in progress right now.
    Live,
    /// Find meetings by name.
    Search { text: String },
    /// Show details for one meeting.
    Show { id: u64 },
    /// Mark a meeting as attended.
    Attend { id: u64 },
    /// Clear a meeting's attended mark.
    Unattend { id: u64 },
    /// Hide or show business/service meetings.
    ExcludeService {
        #[arg(action = ArgAction::Set)]
        exclude: bool,
    },
    /// Interactive browsing on stdin.
    Browse,
}

fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();
    let config = AppConfig::from_env()?.with_paths(cli.feed, cli.prefs);

    // Preference toggles that do not depend on the feed.
    if let Command::ExcludeService { exclude } = cli.command {
        let mut prefs = Prefs::load(&config.prefs_path)?;
        if prefs.set_exclude_service(exclude) {
            prefs.save(&config.prefs_path)?;
            tracing::info!(exclude, "service meeting preference updated");
        }
        println!("service meetings {}", if exclude { "hidden" } else { "shown" });
        return Ok(());
    }

    let mut ctx = AppContext::load(config, cli.attended)?;
    let now = clock::resolve_now(ctx.config().now_override);

    match cli.command {
        Command::Now => {
            let table = ctx.table();
            print_slot(&ctx, &table, jump_to_now(&table, now), now, cli.json)
        }
        Command::Slot { day, time } => {
            let table = ctx.table();
            let day = parse_day(&day).ok_or(AppError::InvalidDay(day))?;
            let key = SlotKey::parse(&time).ok_or(AppError::InvalidTime(time))?;
            let cursor = jump_to(&table, day, key).ok_or_else(|| AppError::InvalidDay(day.to_string()))?;
            print_slot(&ctx, &table, cursor, now, cli.json)
        }
        Command::Step { day, slot, back, count } => {
            let table = ctx.table();
            let day = parse_day(&day).ok_or(AppError::InvalidDay(day))?;
            let mut cursor = Cursor::new(day, slot).ok_or_else(|| AppError::InvalidDay(day.to_string()))?;
            for _ in 0..count {
                cursor = if back { slots::previous(&table, cursor) } else { slots::next(&table, cursor) };
            }
            print_slot(&ctx, &table, cursor, now, cli.json)
        }
        Command::Live => {
            let table = ctx.table();
            print_slot(&ctx, &table, Cursor::in_progress(), now, cli.json)
        }
        Command::Search { text } => {
            let hits = search_hits(&ctx.search(&text), &ctx.filter());
            if cli.json {
                print_json(&hits)
            } else {
                println!("{}", search_text(&hits));
                Ok(())
            }
        }
        Command::Show { id } => {
            let table = ctx.table();
            let meeting = ctx.meeting(id).ok_or(AppError::UnknownMeeting(id))?;
            let details = MeetingDetails {
                meeting,
                attended: ctx.prefs().attended.contains(&id),
                cursor: state::deep_link(&table, meeting),
            };
            if cli.json {
                print_json(&details)
            } else {
                println!("{details}");
                Ok(())
            }
        }
        Command::Attend { id } => set_attendance(&mut ctx, id, true),
        Command::Unattend { id } => set_attendance(&mut ctx, id, false),
        Command::Browse => {
            let stdin = io::stdin();
            let mut out = browse::run_browse(&mut ctx, stdin.lock(), io::stdout())?;
            io::Write::flush(&mut out)?;
            Ok(())
        }
        Command::ExcludeService { .. } => Ok(()),
    }
}

fn print_slot(ctx: &AppContext, table: &DaySlotTable, cursor: Cursor, now: TimeOfWeek, json: bool) -> Result<(), AppError> {
    let meetings = meetings_at(table, cursor, now);
    let view = SlotView::new(cursor, &meetings, &ctx.filter());
    if json {
        print_json(&view)
    } else {
        println!("{view}");
        Ok(())
    }
}

fn set_attendance(ctx: &mut AppContext, id: u64, attended: bool) -> Result<(), AppError> {
    let changed = ctx.set_attendance(id, attended)?;
    let state = if attended { "attended" } else { "not attended" };
    if changed {
        println!("meeting #{id} marked {state}");
    } else {
        println!("meeting #{id} already {state}");
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
