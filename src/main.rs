//! TabFinder: console demo.
//!
//! Loads a fixed set of tabs into a popup session and walks through a few
//! queries and key presses, printing what the popup would show.

use tabfinder::logging::init_logging;
use tabfinder::managers::tab_index::TabIndex;
use tabfinder::managers::timestamp_store::MemoryTimestampStore;
use tabfinder::services::browser_api::{QueuedActivator, SnapshotTabSource};
use tabfinder::services::row_renderer::{PopupView, RowRenderer, ViewBody};
use tabfinder::session::{Key, PopupSession};
use tabfinder::types::tab::RawTab;

fn tab(id: i64, title: &str, url: &str, window_id: i64) -> RawTab {
    RawTab {
        id,
        title: title.to_string(),
        url: url.to_string(),
        window_id,
        fav_icon_url: None,
        audible: false,
        pinned: false,
    }
}

fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

fn print_view(view: &PopupView) {
    println!("  query: {:?}   {}", view.query, view.count_label);
    match &view.body {
        ViewBody::Rows(rows) => {
            for row in rows {
                let marker = if row.selected { ">" } else { " " };
                println!(
                    "  {} {:<28} {:<34} {} · {}",
                    marker, row.title, row.url, row.window_label, row.opened_label
                );
            }
        }
        ViewBody::Empty(msg) | ViewBody::Error(msg) => println!("  {}", msg),
        ViewBody::Loading => println!("  Loading..."),
    }
    println!();
}

fn main() {
    init_logging("warn");

    let mut pinned = tab(4, "Rust Documentation", "https://doc.rust-lang.org/std", 2);
    pinned.pinned = true;
    let source = SnapshotTabSource::new(vec![
        tab(1, "GitHub", "https://github.com", 1),
        tab(2, "Google", "https://google.com", 1),
        tab(3, "Hacker News", "https://news.ycombinator.com", 1),
        pinned,
    ]);

    let renderer = RowRenderer::default();
    let mut session = PopupSession::new(Box::new(MemoryTimestampStore::new()));
    let mut activator = QueuedActivator::new();

    section("All tabs");
    if let Err(e) = session.refresh(&source) {
        println!("  {}", e);
    }
    print_view(&session.view(&renderer, TabIndex::now()));

    for query in ["gh", "rust", "zzz"] {
        section(&format!("Query {:?}", query));
        session.set_query(query);
        print_view(&session.view(&renderer, TabIndex::now()));
    }

    section("Escape, Down, Enter");
    session.handle_key(Key::Escape, &mut activator);
    session.handle_key(Key::ArrowDown, &mut activator);
    let outcome = session.handle_key(Key::Enter, &mut activator);
    print_view(&session.view(&renderer, TabIndex::now()));
    println!("  outcome: {:?}", outcome);
    println!("  activation requests: {:?}", activator.pending());
}
