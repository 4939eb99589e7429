//! Line-driven interactive browsing on top of [`Navigator`].
//!
//! DESIGN
//! ======
//! Each input line is one key. The navigator reports every move to a
//! [`TerminalObserver`], which prints the slot. A refresh request only sets a
//! flag on the observer; the loop, which owns the [`AppContext`], notices the
//! flag, reloads, and hands the rebuilt table back to the navigator. A failed
//! reload keeps the current table on screen.

use std::io::{BufRead, Write};

use meetings::Meeting;
use slots::{Cursor, MeetingFilter, Navigator, SlotKey, SlotObserver, parse_day};

use crate::clock;
use crate::error::AppError;
use crate::render::SlotView;
use crate::state::AppContext;

const HELP: &str = "keys: n (next), p (previous), now, <day> HH:MM, r (refresh), q (quit)";

pub struct TerminalObserver<W> {
    out: W,
    filter: MeetingFilter,
    refresh_pending: bool,
}

impl<W: Write> TerminalObserver<W> {
    pub fn new(out: W, filter: MeetingFilter) -> Self {
        Self { out, filter, refresh_pending: false }
    }

    pub fn set_filter(&mut self, filter: MeetingFilter) {
        self.filter = filter;
    }

    /// Clear and return the pending-refresh flag.
    pub fn take_refresh(&mut self) -> bool {
        std::mem::take(&mut self.refresh_pending)
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{text}") {
            tracing::warn!(error = %e, "failed to write to terminal");
        }
    }
}

impl<W: Write> SlotObserver for TerminalObserver<W> {
    fn on_slot_changed(&mut self, cursor: Cursor, meetings: &[&Meeting]) {
        let view = SlotView::new(cursor, meetings, &self.filter);
        self.write_line(&view.to_string());
    }

    fn on_refresh_requested(&mut self) {
        self.refresh_pending = true;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Key {
    Next,
    Previous,
    Now,
    Jump(u8, SlotKey),
    Refresh,
    Help,
    Quit,
    Blank,
    Unknown,
}

fn parse_key(line: &str) -> Key {
    let line = line.trim();
    match line.to_ascii_lowercase().as_str() {
        "" => Key::Blank,
        "n" | "next" => Key::Next,
        "p" | "prev" | "previous" => Key::Previous,
        "now" => Key::Now,
        "r" | "refresh" => Key::Refresh,
        "h" | "help" | "?" => Key::Help,
        "q" | "quit" => Key::Quit,
        _ => line
            .split_once(char::is_whitespace)
            .and_then(|(day, time)| Some(Key::Jump(parse_day(day)?, SlotKey::parse(time)?)))
            .unwrap_or(Key::Unknown),
    }
}

/// Run the browse loop until `q` or end of input, returning the writer.
///
/// # Errors
///
/// Returns [`AppError::Output`] when reading input fails.
pub fn run_browse<R: BufRead, W: Write>(ctx: &mut AppContext, input: R, out: W) -> Result<W, AppError> {
    let now = clock::resolve_now(ctx.config().now_override);
    let observer = TerminalObserver::new(out, ctx.filter());
    let mut navigator = Navigator::new(ctx.table(), now, observer);

    for line in input.lines() {
        match parse_key(&line?) {
            Key::Next => {
                navigator.next();
            }
            Key::Previous => {
                navigator.previous();
            }
            Key::Now => {
                navigator.jump_to_now(clock::resolve_now(ctx.config().now_override));
            }
            Key::Jump(day, time) => {
                navigator.jump_to(day, time);
            }
            Key::Refresh => {
                navigator.request_refresh();
                if navigator.observer_mut().take_refresh() {
                    match ctx.reload() {
                        Ok(()) => {
                            navigator.observer_mut().set_filter(ctx.filter());
                            navigator.replace_table(ctx.table());
                        }
                        Err(e) => tracing::warn!(error = %e, "refresh failed, keeping current meetings"),
                    }
                }
            }
            Key::Help => navigator.observer_mut().write_line(HELP),
            Key::Unknown => navigator.observer_mut().write_line(&format!("unrecognized input; {HELP}")),
            Key::Blank => {}
            Key::Quit => break,
        }
    }

    Ok(navigator.into_observer().into_inner())
}

#[cfg(test)]
#[path = "browse_test.rs"]
mod tests;
