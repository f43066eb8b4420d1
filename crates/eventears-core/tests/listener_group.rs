use eventears_core::{listeners, Emitter, Listener, ListenerGroup, ListenerMap, Payload, Symbol};
use parking_lot::Mutex;
use std::sync::Arc;

type Log = Arc<Mutex<Vec<String>>>;

fn recorder(log: &Log, tag: &'static str) -> impl Fn(&[Payload]) + Send + Sync + 'static {
    let log = log.clone();
    move |args: &[Payload]| log.lock().push(format!("{}:{}", tag, args.len()))
}

#[test]
fn test_emission_reaches_matching_callback_only() {
    let emitter = Arc::new(Emitter::<Payload>::new());
    let log: Log = Arc::default();

    let _group = ListenerGroup::new(
        emitter.clone(),
        listeners! {
            "data" => recorder(&log, "data"),
            "end" => recorder(&log, "end"),
        },
    );

    emitter.emit("data", &[Payload::from(1), Payload::from(2)]);
    emitter.emit("end", &[]);
    emitter.emit("data", &[Payload::from(3)]);

    assert_eq!(*log.lock(), vec!["data:2", "end:0", "data:1"]);
}

#[test]
fn test_cleanup_silences_every_callback() {
    let emitter = Arc::new(Emitter::<Payload>::new());
    let log: Log = Arc::default();
    let closed = Symbol::new("closed");

    let group = ListenerGroup::new(
        emitter.clone(),
        ListenerMap::new()
            .on("data", recorder(&log, "data"))
            .on(closed.clone(), recorder(&log, "closed")),
    );
    group.cleanup();

    assert!(!emitter.emit("data", &[]));
    assert!(!emitter.emit(closed, &[]));
    assert!(log.lock().is_empty());
}

#[test]
fn test_double_cleanup_is_safe() {
    let emitter = Arc::new(Emitter::<Payload>::new());
    let log: Log = Arc::default();

    let group = ListenerGroup::new(emitter.clone(), listeners! { "data" => recorder(&log, "data") });
    group.cleanup();
    group.cleanup();

    assert_eq!(emitter.listener_count("data"), 0);
}

#[test]
fn test_shared_listener_under_two_events() {
    let emitter = Arc::new(Emitter::<Payload>::new());
    let log: Log = Arc::default();
    let shared = Listener::new(recorder(&log, "any"));

    let group = ListenerGroup::new(
        emitter.clone(),
        ListenerMap::new()
            .with_listener("open", shared.clone())
            .with_listener("close", shared),
    );

    emitter.emit("open", &[]);
    emitter.emit("close", &[]);
    group.cleanup();
    emitter.emit("open", &[]);

    assert_eq!(*log.lock(), vec!["any:0", "any:0"]);
    assert!(emitter.event_names().is_empty());
}

#[test]
fn test_cleanup_keeps_listeners_of_other_groups() {
    let emitter = Arc::new(Emitter::<Payload>::new());
    let log: Log = Arc::default();

    let first = ListenerGroup::new(emitter.clone(), listeners! { "data" => recorder(&log, "first") });
    let _second = ListenerGroup::new(emitter.clone(), listeners! { "data" => recorder(&log, "second") });

    first.cleanup();
    emitter.emit("data", &[]);

    assert_eq!(*log.lock(), vec!["second:0"]);
}
