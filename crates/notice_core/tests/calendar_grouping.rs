use chrono::{NaiveDate, TimeZone, Utc};
use notice_core::{
    group_by_day, seed_notifications, InMemoryNotificationRepository, Notification,
    NotificationId, NotificationKind, NotificationService,
};
use proptest::prelude::*;

fn on_jan_13(id: &str, hour: u32, read: bool) -> Notification {
    Notification {
        id: NotificationId::new(id),
        kind: NotificationKind::Update,
        project: 1,
        title: format!("title {id}"),
        short_text: "short".to_string(),
        long_text: None,
        created_at: Utc.with_ymd_and_hms(2024, 1, 13, hour, 0, 0).unwrap(),
        is_pinned: false,
        is_read: read,
    }
}

fn jan(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
}

#[test]
fn unread_second_notification_represents_the_day() {
    let items = vec![on_jan_13("first", 8, true), on_jan_13("second", 12, false)];
    let days = group_by_day(&items, &Utc);

    assert_eq!(days.len(), 1);
    assert_eq!(days[&jan(13)].representative.id.as_str(), "second");
}

#[test]
fn unread_is_preferred_regardless_of_insertion_order() {
    let read_first = vec![on_jan_13("read", 8, true), on_jan_13("unread", 12, false)];
    let unread_first = vec![on_jan_13("unread", 12, false), on_jan_13("read", 8, true)];

    for items in [read_first, unread_first] {
        let days = group_by_day(&items, &Utc);
        assert_eq!(days[&jan(13)].representative.id.as_str(), "unread");
    }
}

#[test]
fn service_calendar_covers_seed_days() {
    let service = NotificationService::with_seed(
        InMemoryNotificationRepository::new(),
        seed_notifications().unwrap(),
    )
    .unwrap();

    let days = service.calendar(&Utc);
    let dates: Vec<NaiveDate> = days.keys().copied().collect();
    assert_eq!(dates, (10..=15).map(jan).collect::<Vec<_>>());
    assert!(days[&jan(13)].has_version);
    assert!(days.values().all(|day| day.count == 1));
}

#[test]
fn calendar_reflects_read_state_changes() {
    let seed = vec![on_jan_13("a", 8, false), on_jan_13("b", 12, true)];
    let mut service =
        NotificationService::with_seed(InMemoryNotificationRepository::new(), seed).unwrap();

    // List order is newest first, so "b" is seen first but "a" is unread.
    assert_eq!(service.calendar(&Utc)[&jan(13)].representative.id.as_str(), "a");

    service.mark_all_read();
    assert_eq!(service.calendar(&Utc)[&jan(13)].representative.id.as_str(), "b");
}

proptest! {
    #[test]
    fn representative_is_first_unread_or_first_overall(reads in prop::collection::vec(any::<bool>(), 1..12)) {
        let items: Vec<Notification> = reads
            .iter()
            .enumerate()
            .map(|(idx, read)| on_jan_13(&idx.to_string(), 0, *read))
            .collect();

        let days = group_by_day(&items, &Utc);
        let expected = items
            .iter()
            .find(|n| !n.is_read)
            .unwrap_or(&items[0]);
        prop_assert_eq!(&days[&jan(13)].representative.id, &expected.id);
        prop_assert_eq!(days[&jan(13)].count, items.len());
    }
}
