//! Quickstart: add, complete, edit, and delete tasks.
//!
//! This walkthrough drives a TaskService over a file backend in a temporary
//! directory, then reopens it to show that the collection survives.
//!
//! Run with: cargo run --example quickstart

use eyre::Result;
use taskpad::{FileBackend, TaskService};

fn main() -> Result<()> {
    // Surface the library's warnings (e.g. unreadable stored data) on stderr.
    tracing_subscriber::fmt::init();

    // A real embedder would use FileBackend::open_default(); the demo keeps
    // its data in a throwaway directory instead.
    let temp_dir = tempfile::tempdir()?;
    let data_dir = temp_dir.path().to_path_buf();

    println!("Taskpad Quickstart");
    println!("==================\n");
    println!("Data directory: {}\n", data_dir.display());

    let mut service = TaskService::open(FileBackend::open(&data_dir)?);
    println!("Opened with {} stored task(s).\n", service.tasks().len());

    // ADD
    println!("1. ADD - Creating three tasks...");
    service.add("Buy milk", None);
    service.add("Paint the fence", Some(2));
    let read_id = service
        .add("Read a book", None)
        .map(|task| task.id.clone())
        .unwrap_or_default();
    for task in service.tasks() {
        println!("   - [{}] {}", task.id, task.text);
    }
    println!();

    // TOGGLE
    println!("2. TOGGLE - Completing \"Read a book\"...");
    service.toggle_completed(&read_id);
    let counts = service.counts();
    println!(
        "   {} total, {} active, {} completed\n",
        counts.total, counts.active, counts.completed
    );

    // EDIT
    println!("3. EDIT - Rewording the first task...");
    let first_id = service.tasks()[0].id.clone();
    service.edit(&first_id, "Buy oat milk");
    println!("   Now reads: {}\n", service.tasks()[0].text);

    // DELETE
    println!("4. DELETE - Removing the completed task...");
    service.delete(&read_id);
    println!("   {} task(s) remain.\n", service.tasks().len());

    // REOPEN
    println!("5. REOPEN - Loading a fresh service from the same directory...");
    drop(service);
    let service = TaskService::open(FileBackend::open(&data_dir)?);
    for task in service.tasks() {
        let mark = if task.completed { "x" } else { " " };
        println!("   [{}] {}", mark, task.text);
    }
    println!("\nQuickstart complete!");
    Ok(())
}
