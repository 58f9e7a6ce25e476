//! Ordered List - Demo Binary
//!
//! Builds a small schedule of named steps and walks through the list
//! operations. Set `RUST_LOG=ordered_list=trace` to see every mutation.

use ordered_list::{OrderedEntry, OrderedList};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("ordered_list=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn log_list(label: &str, list: &OrderedList<&str>) {
    let rendered: Vec<String> = list
        .iter()
        .map(|entry| format!("({}, {})", entry.order, entry.element))
        .collect();
    info!(len = list.len(), "{label}: [{}]", rendered.join(", "));
}

fn main() {
    init_logging();

    let mut steps = OrderedList::with_default_order(50);
    steps
        .add(20, "physics")
        .add(10, "input")
        .add(30, "render")
        .add(20, "audio")
        .push("scripts");
    log_list("initial", &steps);

    let key = steps.insert(40, "debug-overlay");
    if let Ok(old) = steps.set_order(key, 0) {
        info!(old, new = 0, "moved debug-overlay");
    }
    log_list("after reorder", &steps);

    steps.remove_at(20).remove_element(&"missing");
    log_list("after remove_at(20)", &steps);

    steps.remove_all_where(|name| name.starts_with('d'));
    log_list("after remove_all_where", &steps);

    let steps = OrderedList::difference_entry(Some(steps), &OrderedEntry::new(30, "render"));
    let steps = OrderedList::union(Some(steps), "present");
    log_list("after difference/union", &steps);

    let orphan = OrderedList::union(None, "standalone");
    log_list("from absent list", &orphan);
}
