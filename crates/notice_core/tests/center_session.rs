use chrono::{NaiveDate, Utc};
use notice_core::{load_seed_file, NotificationCenter, NotificationId, SeedError, ViewMode};
use std::io::Write;

fn jan(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
}

#[test]
fn builtin_center_starts_in_list_mode_without_selection() {
    let center = NotificationCenter::from_builtin_seed().unwrap();
    let snapshot = center.snapshot(&Utc);

    assert_eq!(snapshot.view_mode, ViewMode::List);
    assert_eq!(snapshot.total, 6);
    assert_eq!(snapshot.unread_count, 3);
    assert_eq!(snapshot.selected, None);

    let order: Vec<&str> = snapshot.items.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(order, vec!["1", "3", "5", "2", "4", "6"]);
}

#[test]
fn toggle_view_mode_alternates() {
    let mut center = NotificationCenter::from_builtin_seed().unwrap();
    assert_eq!(center.toggle_view_mode(), ViewMode::Calendar);
    assert_eq!(center.toggle_view_mode(), ViewMode::List);
}

#[test]
fn select_records_selection_and_marks_read() {
    let mut center = NotificationCenter::from_builtin_seed().unwrap();
    let id = NotificationId::new("1");

    center.select(&id).unwrap();
    assert_eq!(center.selected().unwrap().id, id);
    assert!(center.selected().unwrap().is_read);
    assert_eq!(center.snapshot(&Utc).unread_count, 2);

    // Unknown ids keep the current selection.
    assert!(center.select(&NotificationId::new("missing")).is_none());
    assert_eq!(center.selected().unwrap().id, id);
}

#[test]
fn selected_view_follows_later_toggles() {
    let mut center = NotificationCenter::from_builtin_seed().unwrap();
    let id = NotificationId::new("1");
    center.select(&id).unwrap();

    center.notifications_mut().toggle_read(&id);
    assert!(!center.selected().unwrap().is_read);
}

#[test]
fn opening_calendar_day_selects_representative_in_list_mode() {
    let mut center = NotificationCenter::from_builtin_seed().unwrap();
    center.set_view_mode(ViewMode::Calendar);

    let opened = center.open_calendar_day(jan(11), &Utc).unwrap();
    assert_eq!(opened.id.as_str(), "5");
    assert!(opened.is_read);
    assert_eq!(center.view_mode(), ViewMode::List);
    assert_eq!(center.snapshot(&Utc).selected, Some(NotificationId::new("5")));
}

#[test]
fn opening_empty_calendar_day_changes_nothing() {
    let mut center = NotificationCenter::from_builtin_seed().unwrap();
    center.set_view_mode(ViewMode::Calendar);

    assert!(center.open_calendar_day(jan(1), &Utc).is_none());
    assert_eq!(center.view_mode(), ViewMode::Calendar);
    assert!(center.selected().is_none());
}

#[test]
fn center_loads_seed_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{"id":"a","type":"version","project":4,"title":"v1","shortText":"first",
            "createdAt":"2024-03-01T08:00:00Z"}}]"#
    )
    .unwrap();

    let seed = load_seed_file(file.path()).unwrap();
    let center = NotificationCenter::from_seed(seed).unwrap();

    assert_eq!(center.notifications().len(), 1);
    assert_eq!(center.notifications().version_notifications().len(), 1);
    assert_eq!(center.catalog().project_name(4), None);
}

#[test]
fn missing_seed_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_seed_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, SeedError::Io { .. }));
}
