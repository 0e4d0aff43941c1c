//! Colorful console output for grouping runs.
//!
//! Provides a custom `tracing` layer that formats engine events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Run lifecycle (grouping start/end)
//! - **DEBUG**: Algorithm milestones (clustering path, draft, refinement)
//! - **TRACE**: Individual refinement passes

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

const DEFAULT_DIRECTIVE: &str = "groupforge_solver=info";

/// Initializes the console output.
///
/// Safe to call multiple times - only the first call has effect. The
/// `RUST_LOG` environment variable overrides the default `info` level.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let mut builder = EnvFilter::builder();
        if let Ok(directive) = DEFAULT_DIRECTIVE.parse::<Directive>() {
            builder = builder.with_default_directive(directive);
        }
        let filter = builder.from_env_lossy();

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(GroupingConsoleLayer)
            .try_init();
    });
}

fn print_banner() {
    let banner = r#"
  ____                       _____
 / ___|_ __ ___  _   _ _ __ |  ___|__  _ __ __ _  ___
| |  _| '__/ _ \| | | | '_ \| |_ / _ \| '__/ _` |/ _ \
| |_| | | | (_) | |_| | |_) |  _| (_) | | | (_| |  __/
 \____|_|  \___/ \__,_| .__/|_|  \___/|_|  \__, |\___|
                      |_|                  |___/
"#;

    let version_line = format!(
        "                   v{} - Deterministic Grouping Engine\n",
        env!("CARGO_PKG_VERSION")
    );

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats grouping events with colors.
pub struct GroupingConsoleLayer;

impl<S: Subscriber> Layer<S> for GroupingConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("groupforge_solver") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    kind: Option<String>,
    path: Option<String>,
    entries: Option<u64>,
    groups: Option<u64>,
    teams: Option<u64>,
    duration_ms: Option<u64>,
    pass: Option<u64>,
    passes: Option<u64>,
    swaps: Option<u64>,
    limit: Option<u64>,
    cost: Option<f64>,
    initial_cost: Option<f64>,
    final_cost: Option<f64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        match field.name() {
            "event" => self.event = Some(s.trim_matches('"').to_string()),
            "kind" => self.kind = Some(s.trim_matches('"').to_string()),
            "path" => self.path = Some(s.trim_matches('"').to_string()),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "entries" => self.entries = Some(value),
            "groups" => self.groups = Some(value),
            "teams" => self.teams = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "pass" => self.pass = Some(value),
            "passes" => self.passes = Some(value),
            "swaps" => self.swaps = Some(value),
            "limit" => self.limit = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value as u64);
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        match field.name() {
            "cost" => self.cost = Some(value),
            "initial_cost" => self.initial_cost = Some(value),
            "final_cost" => self.final_cost = Some(value),
            _ => {}
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "kind" => self.kind = Some(value.to_string()),
            "path" => self.path = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    match v.event.as_deref().unwrap_or("") {
        "grouping_start" => format_grouping_start(v),
        "grouping_end" => format_grouping_end(v),
        "clustering_path" => format_clustering_path(v),
        "draft_complete" => format_draft_complete(v),
        "refinement_skipped" => format_refinement_skipped(v),
        "refinement_end" => format_refinement_end(v),
        "refinement_pass" if level == Level::TRACE => format_refinement_pass(v),
        _ => String::new(),
    }
}

fn format_grouping_start(v: &EventVisitor) -> String {
    let kind = v.kind.as_deref().unwrap_or("unknown");
    let entries = v.entries.unwrap_or(0);

    format!(
        "{} {} {} Grouping {} entries",
        timestamp().bright_black(),
        "INFO".bright_green(),
        format!("[{}]", kind).bright_cyan(),
        entries.to_formatted_string(&Locale::en).bright_yellow(),
    )
}

fn format_grouping_end(v: &EventVisitor) -> String {
    let kind = v.kind.as_deref().unwrap_or("unknown");
    let groups = v.groups.unwrap_or(0);
    let duration_ms = v.duration_ms.unwrap_or(0);

    format!(
        "{} {} {} Grouping ended: {} groups, time spent ({})",
        timestamp().bright_black(),
        "INFO".bright_green(),
        format!("[{}]", kind).bright_cyan(),
        groups.to_formatted_string(&Locale::en).bright_magenta().bold(),
        format_duration_ms(duration_ms).yellow(),
    )
}

fn format_clustering_path(v: &EventVisitor) -> String {
    let path = v.path.as_deref().unwrap_or("unknown");
    let entries = v.entries.unwrap_or(0);
    let groups = v.groups.unwrap_or(0);

    format!(
        "    {} {} clustering: {} entries into {} groups",
        "->".bright_blue(),
        path.white().bold(),
        entries.to_formatted_string(&Locale::en).white(),
        groups.to_formatted_string(&Locale::en).white(),
    )
}

fn format_draft_complete(v: &EventVisitor) -> String {
    format!(
        "    {} Snake draft: {} entries into {} teams",
        "->".bright_blue(),
        v.entries.unwrap_or(0).to_formatted_string(&Locale::en).white(),
        v.teams.unwrap_or(0).to_formatted_string(&Locale::en).white(),
    )
}

fn format_refinement_skipped(v: &EventVisitor) -> String {
    format!(
        "    {} Refinement skipped: {} entries exceed limit {}",
        "->".bright_blue(),
        v.entries.unwrap_or(0).to_formatted_string(&Locale::en).yellow(),
        v.limit.unwrap_or(0).to_formatted_string(&Locale::en).white(),
    )
}

fn format_refinement_end(v: &EventVisitor) -> String {
    format!(
        "    {} Refinement: {} passes, {} swaps, cost {} -> {}",
        "->".bright_blue(),
        v.passes.unwrap_or(0).to_formatted_string(&Locale::en).white(),
        v.swaps.unwrap_or(0).to_formatted_string(&Locale::en).white(),
        format_cost(v.initial_cost.unwrap_or(0.0)),
        format_cost(v.final_cost.unwrap_or(0.0)),
    )
}

fn format_refinement_pass(v: &EventVisitor) -> String {
    format!(
        "      {} Pass {:>4} | {} swaps | cost {}",
        ".".bright_black(),
        v.pass.unwrap_or(0).to_string().bright_black(),
        v.swaps.unwrap_or(0).to_string().bright_black(),
        format_cost(v.cost.unwrap_or(0.0)),
    )
}

fn timestamp() -> String {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| {
            let secs = d.as_secs() % 100000;
            let millis = d.subsec_millis();
            format!("{:5}.{:03}", secs, millis)
        })
        .unwrap_or_else(|_| "    0.000".to_string())
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}

fn format_cost(cost: f64) -> String {
    let s = format!("{:.4}", cost);
    if cost <= 1e-9 {
        s.bright_green().to_string()
    } else {
        s.yellow().to_string()
    }
}
