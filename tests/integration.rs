// SPDX-License-Identifier: MPL-2.0
//! End-to-end toast lifecycle scenarios driven by a manual clock.

use iced_toasts::config::{self, ToastConfig};
use iced_toasts::diagnostics::{DiagnosticEventKind, DiagnosticsCollector, DismissReason};
use iced_toasts::notifications::{NotificationManager, Severity, ToastId, ToastOptions};
use iced_toasts::page::{Document, Page};
use iced_toasts::timing::ManualClock;
use tempfile::tempdir;

type Manager = NotificationManager<Document, ManualClock>;

fn setup() -> (Manager, ManualClock) {
    let clock = ManualClock::new();
    let manager = NotificationManager::new(Document::new(), clock.clone(), ToastConfig::default());
    (manager, clock)
}

fn elapse(manager: &mut Manager, clock: &ManualClock, millis: u64) {
    clock.advance_millis(millis);
    manager.tick();
}

fn is_toast_id(text: &str) -> bool {
    text.strip_prefix("toast-")
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}

#[test]
fn active_list_never_exceeds_capacity() {
    let (mut manager, clock) = setup();
    for i in 0..40 {
        manager.show(ToastOptions::new(format!("toast {i}")));
        assert!(manager.active_count() <= 5);
        if i % 7 == 0 {
            elapse(&mut manager, &clock, 150);
        }
    }
    assert_eq!(manager.active_count(), 5);
}

#[test]
fn oldest_toast_is_evicted_first() {
    let (mut manager, _) = setup();
    let ids: Vec<ToastId> = ["a", "b", "c", "d", "e"]
        .into_iter()
        .map(|m| manager.show(ToastOptions::new(m)))
        .collect();
    let f = manager.show(ToastOptions::new("f"));

    assert!(!manager.is_active(ids[0]));
    assert_eq!(manager.active_ids(), vec![ids[1], ids[2], ids[3], ids[4], f]);
}

#[test]
fn dismissing_twice_matches_dismissing_once() {
    let (mut once, clock_once) = setup();
    let (mut twice, clock_twice) = setup();
    let a = once.info("x", None);
    let b = twice.info("x", None);

    once.dismiss(a);
    twice.dismiss(b);
    twice.dismiss(b);
    assert_eq!(once.active_count(), twice.active_count());
    assert_eq!(once.leaving_count(), twice.leaving_count());
    assert_eq!(once.pending_timers(), twice.pending_timers());

    elapse(&mut once, &clock_once, 300);
    elapse(&mut twice, &clock_twice, 300);
    assert_eq!(once.leaving_count(), 0);
    assert_eq!(twice.leaving_count(), 0);
    assert_eq!(
        once.page().children(once.container()).len(),
        twice.page().children(twice.container()).len()
    );
}

#[test]
fn severity_wrappers_keep_toasts_for_their_durations() {
    let (mut manager, clock) = setup();
    let error = manager.error("boom", None);
    let warning = manager.warning("careful", None);
    let plain = manager.show(ToastOptions::new("plain"));
    let sticky = manager.show(ToastOptions::new("sticky").duration_ms(0));

    elapse(&mut manager, &clock, 2999);
    assert!(manager.is_active(plain));
    elapse(&mut manager, &clock, 1);
    assert!(!manager.is_active(plain));

    elapse(&mut manager, &clock, 999);
    assert!(manager.is_active(warning));
    elapse(&mut manager, &clock, 1);
    assert!(!manager.is_active(warning));

    elapse(&mut manager, &clock, 999);
    assert!(manager.is_active(error));
    elapse(&mut manager, &clock, 1);
    assert!(!manager.is_active(error));

    elapse(&mut manager, &clock, 24 * 60 * 60 * 1000);
    assert!(manager.is_active(sticky));
    assert_eq!(manager.active_ids(), vec![sticky]);
}

#[test]
fn loading_dismiss_leaves_no_spinner() {
    let (mut manager, _) = setup();
    let handle = manager.loading(Some("X"));
    assert!(manager.is_active(handle.id()));

    handle.dismiss(&mut manager);
    assert!(!manager.is_active(handle.id()));
    assert_eq!(manager.active_count(), 0);
}

#[test]
fn loading_update_swaps_in_one_success_toast() {
    let (mut manager, clock) = setup();
    let handle = manager.loading(Some("X"));
    let replacement = handle.update(&mut manager, "Y", Some(Severity::parse("success")));

    assert!(!manager.is_active(handle.id()));
    assert_eq!(manager.active_ids(), vec![replacement]);
    let record = manager.get(replacement).expect("replacement record");
    assert_eq!(record.message(), "Y");
    assert_eq!(record.severity(), Severity::Success);
    assert!(manager.page().has_class(record.element(), "toast-success"));

    elapse(&mut manager, &clock, 300);
    assert!(manager.get(handle.id()).is_none());
}

#[test]
fn dismiss_all_drains_for_any_count() {
    for count in [0, 1, 5] {
        let (mut manager, clock) = setup();
        for i in 0..count {
            manager.show(ToastOptions::new(format!("toast {i}")).persistent());
        }
        manager.dismiss_all();
        elapse(&mut manager, &clock, 300);

        assert_eq!(manager.active_count(), 0, "count {count}");
        assert_eq!(manager.leaving_count(), 0, "count {count}");
        assert!(manager.page().children(manager.container()).is_empty());
    }
}

#[test]
fn saved_toast_scenario() {
    let (mut manager, clock) = setup();
    let before = manager.active_count();

    let id = manager.show(ToastOptions::new("Saved").severity(Severity::Success));
    assert!(is_toast_id(&id.to_string()), "unexpected id {id}");
    assert_eq!(manager.active_count(), before + 1);

    elapse(&mut manager, &clock, 3000);
    elapse(&mut manager, &clock, 300);
    assert_eq!(manager.active_count(), before);
    assert!(manager.page().get_element_by_id(&id.to_string()).is_none());
}

#[test]
fn diagnostics_record_eviction_reason() {
    let (mut manager, _) = setup();
    let mut collector = DiagnosticsCollector::default();
    manager.set_diagnostics(collector.handle());

    let first = manager.info("first", None);
    for i in 0..5 {
        manager.info(format!("more {i}"), None);
    }
    collector.process_pending();

    assert!(collector
        .iter()
        .any(|e| e.kind == DiagnosticEventKind::dismissed(first, DismissReason::Evicted)));
    let json = collector.export_json().expect("export");
    assert!(json.contains("evicted"));
}

#[test]
fn config_round_trip_changes_behaviour() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("nested").join("toasts.toml");
    let config = ToastConfig {
        max_toasts: 2,
        default_duration_ms: 1000,
        ..ToastConfig::default()
    };
    config::save_to_path(&config, &path).expect("save");
    let loaded = config::load_from_path(&path).expect("load");
    assert_eq!(loaded, config);

    let clock = ManualClock::new();
    let mut manager = NotificationManager::new(Document::new(), clock.clone(), loaded);
    for i in 0..4 {
        manager.show(ToastOptions::new(format!("toast {i}")));
    }
    assert_eq!(manager.active_count(), 2);

    elapse(&mut manager, &clock, 1000);
    assert_eq!(manager.active_count(), 0);
}
