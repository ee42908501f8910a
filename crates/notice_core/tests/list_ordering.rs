use chrono::{DateTime, TimeZone, Utc};
use notice_core::{
    sort_for_list, InMemoryNotificationRepository, Notification, NotificationId, NotificationKind,
    NotificationService,
};
use proptest::prelude::*;

fn record(id: &str, created_at: DateTime<Utc>, pinned: bool, read: bool) -> Notification {
    Notification {
        id: NotificationId::new(id),
        kind: NotificationKind::Info,
        project: 1,
        title: format!("title {id}"),
        short_text: "short".to_string(),
        long_text: None,
        created_at,
        is_pinned: pinned,
        is_read: read,
    }
}

#[test]
fn pinned_first_rule_dominates_recency() {
    let seed = vec![
        record(
            "2",
            Utc.with_ymd_and_hms(2024, 1, 14, 14, 15, 0).unwrap(),
            false,
            true,
        ),
        record(
            "1",
            Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap(),
            true,
            false,
        ),
    ];
    let service =
        NotificationService::with_seed(InMemoryNotificationRepository::new(), seed).unwrap();

    let ids: Vec<String> = service
        .sorted()
        .iter()
        .map(|n| n.id.to_string())
        .collect();
    assert_eq!(ids, vec!["1", "2"]);
}

#[test]
fn pinning_an_old_notification_moves_it_to_the_top() {
    let seed = vec![
        record("new", Utc.with_ymd_and_hms(2024, 2, 1, 9, 0, 0).unwrap(), false, false),
        record("old", Utc.with_ymd_and_hms(2023, 2, 1, 9, 0, 0).unwrap(), false, false),
    ];
    let mut service =
        NotificationService::with_seed(InMemoryNotificationRepository::new(), seed).unwrap();
    assert_eq!(service.sorted()[0].id.as_str(), "new");

    service.toggle_pin(&NotificationId::new("old"));
    assert_eq!(service.sorted()[0].id.as_str(), "old");
}

fn arb_notifications() -> impl Strategy<Value = Vec<Notification>> {
    // Small timestamp range so equal timestamps occur and stability is exercised.
    prop::collection::vec((0i64..20, any::<bool>(), any::<bool>()), 0..40).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(idx, (minute, pinned, read))| {
                let created_at = Utc.timestamp_opt(1_704_067_200 + minute * 60, 0).unwrap();
                record(&idx.to_string(), created_at, pinned, read)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn pinned_always_precede_unpinned(items in arb_notifications()) {
        let sorted = sort_for_list(&items);
        let first_unpinned = sorted.iter().position(|n| !n.is_pinned).unwrap_or(sorted.len());
        prop_assert!(sorted[first_unpinned..].iter().all(|n| !n.is_pinned));
    }

    #[test]
    fn equal_pin_status_is_newest_first_and_stable(items in arb_notifications()) {
        let sorted = sort_for_list(&items);
        prop_assert_eq!(sorted.len(), items.len());
        for pair in sorted.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            if a.is_pinned == b.is_pinned {
                prop_assert!(a.created_at >= b.created_at);
                if a.created_at == b.created_at {
                    // Ids are input indexes, so input order is numeric order.
                    let a_idx: usize = a.id.as_str().parse().unwrap();
                    let b_idx: usize = b.id.as_str().parse().unwrap();
                    prop_assert!(a_idx < b_idx);
                }
            }
        }
    }
}
