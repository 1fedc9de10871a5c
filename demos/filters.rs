//! Filters: view modes, counts, and clearing completed tasks.
//!
//! Uses the in-memory backend, so nothing touches the filesystem.
//!
//! Run with: cargo run --example filters

use eyre::Result;
use taskpad::{Filter, MemoryBackend, TaskService};

fn print_view(label: &str, tasks: &[&taskpad::Task]) {
    println!("   {label}:");
    if tasks.is_empty() {
        println!("      (none)");
    }
    for task in tasks {
        let mark = if task.completed { "x" } else { " " };
        match task.category {
            Some(cat) => println!("      [{mark}] {} (category {cat})", task.text),
            None => println!("      [{mark}] {}", task.text),
        }
    }
}

fn main() -> Result<()> {
    let mut service = TaskService::open(MemoryBackend::new());

    println!("Taskpad Filters");
    println!("===============\n");

    // Seed a small list and complete a couple of entries.
    service.add("Water the plants", Some(1));
    service.add("File taxes", None);
    service.add("Call the plumber", Some(1));
    service.add("Back up photos", Some(3));
    for id in [service.tasks()[1].id.clone(), service.tasks()[3].id.clone()] {
        service.toggle_completed(&id);
    }

    println!("1. VIEWS - One collection, three projections...");
    print_view("All", &service.filtered_view(Filter::All));
    print_view("Active", &service.filtered_view(Filter::Active));
    print_view("Completed", &service.filtered_view(Filter::Completed));
    println!();

    println!("2. CURRENT FILTER - The service remembers one view mode...");
    service.set_filter(Filter::Active);
    println!("   Filter set to: {}", service.filter());
    print_view("Visible", &service.visible_tasks());
    println!();

    println!("3. COUNTS - Footer-style tally...");
    let counts = service.counts();
    println!(
        "   {} total / {} active / {} completed\n",
        counts.total, counts.active, counts.completed
    );

    println!("4. CLEAR - Dropping completed tasks...");
    let removed = service.clear_completed();
    println!("   Removed {removed} task(s).");
    print_view("All", &service.filtered_view(Filter::All));
    println!();

    // Filter names round-trip through from_name, e.g. for query strings.
    println!("5. NAMES - Filters parse from their names...");
    for name in ["all", "active", "completed", "garbage"] {
        println!("   \"{}\" -> {}", name, Filter::from_name(name));
    }

    println!("\nFilters demo complete!");
    Ok(())
}
