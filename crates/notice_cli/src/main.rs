//! Command-line view over the notification center.
//!
//! # Responsibility
//! - Seed a center, apply the requested mutations, print one projection.
//! - Keep all business rules in `notice_core`; this binary only renders.
//!
//! # Invariants
//! - Mutations run in a fixed order: add, toggle read, toggle pin,
//!   mark all read, select, open calendar day.
//! - Malformed flags (unknown kind, add fields without a title) fail argument
//!   parsing before any action runs.
//! - Inputs rejected by the core are reported on stderr and do not abort the run.

mod render;

use anyhow::{anyhow, Context, Result};
use chrono::{Local, NaiveDate, TimeZone, Utc};
use clap::{Parser, Subcommand};
use log::{info, warn};
use notice_core::{
    default_log_level, init_logging, init_stderr_logging, load_seed_file, NewNotification,
    NotificationCenter, NotificationId, NotificationKind, ProjectId, ViewMode,
};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "notice", version, about = "In-memory notification center")]
struct Cli {
    /// JSON seed file; the built-in dataset is used when omitted.
    #[arg(long, global = true)]
    seed: Option<PathBuf>,

    /// Log level (trace|debug|info|warn|error). Enables stderr logging
    /// unless `--log-dir` is set.
    #[arg(long, global = true, env = "NOTICE_LOG_LEVEL")]
    log_level: Option<String>,

    /// Absolute directory for rolling log files.
    #[arg(long, global = true, env = "NOTICE_LOG_DIR")]
    log_dir: Option<String>,

    /// Group calendar days in UTC instead of local time.
    #[arg(long, global = true)]
    utc: bool,

    #[command(flatten)]
    actions: Actions,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, clap::Args)]
struct Actions {
    /// Title of a notification to add.
    #[arg(long, requires = "add_short")]
    add_title: Option<String>,
    /// Short text of the notification to add.
    #[arg(long, requires = "add_title")]
    add_short: Option<String>,
    /// Optional long text of the notification to add.
    #[arg(long, requires = "add_title")]
    add_long: Option<String>,
    /// Kind of the notification to add (bug|update|version|maintenance|security|info).
    #[arg(long, default_value = "info", value_parser = parse_kind)]
    add_kind: NotificationKind,
    /// Project id of the notification to add.
    #[arg(long, default_value_t = 1)]
    add_to_project: ProjectId,
    /// Pin the added notification.
    #[arg(long, requires = "add_title")]
    add_pinned: bool,

    /// Toggle read state of a notification (repeatable).
    #[arg(long = "read")]
    toggle_read: Vec<String>,
    /// Toggle pin state of a notification (repeatable).
    #[arg(long = "pin")]
    toggle_pin: Vec<String>,
    /// Mark every notification read.
    #[arg(long)]
    mark_all_read: bool,
    /// Select a notification for the detail pane (marks it read).
    #[arg(long)]
    select: Option<String>,
    /// Open a calendar day (YYYY-MM-DD): selects its representative.
    #[arg(long)]
    open_day: Option<NaiveDate>,

    /// Add a project to the catalog.
    #[arg(long)]
    new_project: Option<String>,
    /// Add a notification type to the catalog.
    #[arg(long)]
    new_type: Option<String>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print notifications in list order, with the selected one expanded.
    List,
    /// Print calendar days and their representative notification.
    Calendar,
    /// Walk through version notifications.
    WhatsNew,
    /// Print the project catalog.
    Projects,
    /// Print the notification type catalog.
    Types,
    /// Print core linkage information.
    Ping,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_cli_logging(&cli)?;

    if let Command::Ping = cli.command {
        println!("notice_core ping={}", notice_core::ping());
        println!("notice_core version={}", notice_core::core_version());
        return Ok(());
    }

    let mut center = match &cli.seed {
        Some(path) => {
            let seed = load_seed_file(path)
                .with_context(|| format!("loading seed `{}`", path.display()))?;
            NotificationCenter::from_seed(seed)?
        }
        None => NotificationCenter::from_builtin_seed()?,
    };
    info!(
        "event=cli_start module=cli status=ok count={}",
        center.notifications().len()
    );

    if cli.utc {
        run(&mut center, &cli, &Utc)
    } else {
        run(&mut center, &cli, &Local)
    }
}

fn run<Tz>(center: &mut NotificationCenter, cli: &Cli, tz: &Tz) -> Result<()>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    apply_actions(center, &cli.actions, tz)?;

    match cli.command {
        Command::List => {
            center.set_view_mode(ViewMode::List);
            print!("{}", render::list_view(center, tz));
        }
        Command::Calendar => {
            center.set_view_mode(ViewMode::Calendar);
            print!("{}", render::calendar_view(center, tz));
        }
        Command::WhatsNew => print!("{}", render::whats_new_view(center, tz)),
        Command::Projects => print!("{}", render::projects_view(center)),
        Command::Types => print!("{}", render::types_view(center)),
        Command::Ping => {}
    }
    Ok(())
}

fn apply_actions<Tz: TimeZone>(
    center: &mut NotificationCenter,
    actions: &Actions,
    tz: &Tz,
) -> Result<()> {
    if let Some(title) = &actions.add_title {
        let input = NewNotification {
            kind: actions.add_kind,
            project: actions.add_to_project,
            title: title.clone(),
            short_text: actions.add_short.clone().unwrap_or_default(),
            long_text: actions.add_long.clone(),
            is_pinned: actions.add_pinned,
        };
        match center.notifications_mut().add_notification(input) {
            Ok(added) => eprintln!("added {}", added.id),
            Err(err) => eprintln!("notification not added: {err}"),
        }
    }

    for id in &actions.toggle_read {
        let outcome = center
            .notifications_mut()
            .toggle_read(&NotificationId::new(id.as_str()));
        report_missing(outcome, id);
    }
    for id in &actions.toggle_pin {
        let outcome = center
            .notifications_mut()
            .toggle_pin(&NotificationId::new(id.as_str()));
        report_missing(outcome, id);
    }
    if actions.mark_all_read {
        center.notifications_mut().mark_all_read();
    }
    if let Some(id) = &actions.select {
        report_missing(center.select(&NotificationId::new(id.as_str())), id);
    }
    if let Some(date) = actions.open_day {
        if center.open_calendar_day(date, tz).is_none() {
            eprintln!("no notifications on {date}");
        }
    }

    if let Some(name) = &actions.new_project {
        match center.catalog_mut().add_project(name) {
            Ok(project) => eprintln!("added project {} ({})", project.id, project.name),
            Err(err) => eprintln!("project not added: {err}"),
        }
    }
    if let Some(name) = &actions.new_type {
        match center.catalog_mut().add_notification_type(name) {
            Ok(entry) => eprintln!("added type {} ({})", entry.id, entry.name),
            Err(err) => eprintln!("type not added: {err}"),
        }
    }
    Ok(())
}

fn parse_kind(value: &str) -> Result<NotificationKind, String> {
    NotificationKind::parse(value).ok_or_else(|| format!("unknown notification kind `{value}`"))
}

fn report_missing<T>(outcome: Option<T>, id: &str) {
    if outcome.is_none() {
        warn!("event=cli_action module=cli status=noop reason=not_found id={id}");
        eprintln!("no notification with id `{id}`");
    }
}

fn init_cli_logging(cli: &Cli) -> Result<()> {
    let result = match (&cli.log_dir, &cli.log_level) {
        (Some(dir), level) => init_logging(level.as_deref().unwrap_or(default_log_level()), dir),
        (None, Some(level)) => init_stderr_logging(level),
        (None, None) => return Ok(()),
    };
    result.map_err(|err| anyhow!(err))
}

#[cfg(test)]
mod tests {
    use super::{apply_actions, Cli, Command};
    use chrono::Utc;
    use clap::Parser;
    use notice_core::{NotificationCenter, NotificationId, NotificationKind};

    #[test]
    fn actions_apply_in_fixed_order() {
        let cli = Cli::try_parse_from([
            "notice",
            "--read",
            "1",
            "--pin",
            "2",
            "--select",
            "4",
            "--add-title",
            "Deploy",
            "--add-short",
            "rolled out",
            "--add-kind",
            "update",
            "list",
        ])
        .unwrap();
        assert!(matches!(cli.command, Command::List));

        let mut center = NotificationCenter::from_builtin_seed().unwrap();
        apply_actions(&mut center, &cli.actions, &Utc).unwrap();

        let service = center.notifications();
        assert_eq!(service.len(), 7);
        assert!(service.get(&NotificationId::new("1")).unwrap().is_read);
        assert!(service.get(&NotificationId::new("2")).unwrap().is_pinned);
        assert_eq!(center.selected().unwrap().id.as_str(), "4");
    }

    #[test]
    fn add_title_requires_short_text() {
        let parsed = Cli::try_parse_from(["notice", "--add-title", "x", "list"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn unknown_kind_is_rejected_before_any_action_runs() {
        let parsed = Cli::try_parse_from([
            "notice",
            "--add-title",
            "x",
            "--add-short",
            "y",
            "--add-kind",
            "newsletter",
            "list",
        ]);
        let err = parsed.unwrap_err();
        assert!(err.to_string().contains("unknown notification kind `newsletter`"));
    }

    #[test]
    fn add_kind_accepts_any_case() {
        let cli = Cli::try_parse_from([
            "notice",
            "--add-title",
            "x",
            "--add-short",
            "y",
            "--add-kind",
            "Security",
            "list",
        ])
        .unwrap();
        assert_eq!(cli.actions.add_kind, NotificationKind::Security);
    }

    #[test]
    fn add_fields_require_a_title() {
        for args in [
            ["notice", "--add-short", "y", "list"],
            ["notice", "--add-long", "z", "list"],
        ] {
            assert!(Cli::try_parse_from(args).is_err(), "accepted {args:?}");
        }
        assert!(Cli::try_parse_from(["notice", "--add-pinned", "list"]).is_err());
    }
}
