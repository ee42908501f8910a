//! Plain-text rendering of center snapshots.

use chrono::TimeZone;
use notice_core::{
    CalendarDay, Notification, NotificationCenter, NotificationRepository, WhatsNewCursor,
};
use std::fmt::Display;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

pub fn list_view<R, Tz>(center: &NotificationCenter<R>, tz: &Tz) -> String
where
    R: NotificationRepository,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let snapshot = center.snapshot(tz);
    let mut out = format!(
        "Notifications: {} total, {} unread\n",
        snapshot.total, snapshot.unread_count
    );
    if snapshot.items.is_empty() {
        out.push_str("  (no notifications)\n");
        return out;
    }

    for item in &snapshot.items {
        let selected = snapshot.selected.as_ref() == Some(&item.id);
        push_line(&mut out, &summary_line(item, tz, selected));
        if selected {
            write_detail(&mut out, center, item);
        }
    }
    out
}

pub fn calendar_view<R, Tz>(center: &NotificationCenter<R>, tz: &Tz) -> String
where
    R: NotificationRepository,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let snapshot = center.snapshot(tz);
    let mut out = format!("Calendar: {} day(s)\n", snapshot.calendar.len());
    for day in snapshot.calendar.values() {
        push_line(&mut out, &day_line(day));
    }
    out
}

pub fn whats_new_view<R, Tz>(center: &NotificationCenter<R>, tz: &Tz) -> String
where
    R: NotificationRepository,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut cursor = WhatsNewCursor::new(center.notifications().version_notifications());
    let mut out = String::new();
    if cursor.is_empty() {
        out.push_str("Nothing new.\n");
        return out;
    }

    loop {
        if let (Some(item), Some((position, total))) = (cursor.current(), cursor.position()) {
            push_line(
                &mut out,
                &format!(
                    "[{position}/{total}] {} ({})",
                    item.title,
                    item.created_at.with_timezone(tz).format(TIME_FORMAT)
                ),
            );
            let body = item.long_text.as_deref().unwrap_or(&item.short_text);
            push_line(&mut out, &format!("    {body}"));
        }
        if !cursor.next() {
            break;
        }
    }
    out
}

pub fn projects_view<R: NotificationRepository>(center: &NotificationCenter<R>) -> String {
    let mut out = String::new();
    for project in center.catalog().projects() {
        push_line(&mut out, &format!("{:>4}  {}", project.id, project.name));
    }
    out
}

pub fn types_view<R: NotificationRepository>(center: &NotificationCenter<R>) -> String {
    let mut out = String::new();
    for entry in center.catalog().notification_types() {
        push_line(&mut out, &format!("{:<16}{}", entry.id, entry.name));
    }
    out
}

fn summary_line<Tz>(item: &Notification, tz: &Tz, selected: bool) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!(
        "{}{}{} {:<6} {:<14} {}  {}: {}",
        if selected { '>' } else { ' ' },
        if item.is_pinned { 'P' } else { ' ' },
        if item.is_read { ' ' } else { '*' },
        item.id,
        item.kind.label(),
        item.created_at.with_timezone(tz).format(TIME_FORMAT),
        item.title,
        item.short_text
    )
}

fn write_detail<R: NotificationRepository>(
    out: &mut String,
    center: &NotificationCenter<R>,
    item: &Notification,
) {
    let project = center
        .catalog()
        .project_name(item.project)
        .map(str::to_string)
        .unwrap_or_else(|| format!("project #{}", item.project));
    push_line(out, &format!("      project: {project}"));
    if let Some(long_text) = &item.long_text {
        push_line(out, &format!("      {long_text}"));
    }
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

fn day_line(day: &CalendarDay) -> String {
    format!(
        "{}  {}{:>2}  {} {}",
        day.date,
        if day.has_version { 'V' } else { ' ' },
        day.count,
        if day.representative.is_read { ' ' } else { '*' },
        day.representative.title
    )
}
