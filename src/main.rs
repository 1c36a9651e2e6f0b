//! Contact Book - demo entry point
//!
//! Walks an address book through its full lifecycle: populate it with two
//! contacts, list the entries, edit a phone through a name lookup, search
//! for a phone, and delete a record. Rendered records go to stdout;
//! operational chatter goes to `tracing` on stderr.

use anyhow::Result;
use contact_book::{AddressBook, Record};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize logging (stderr only, stdout is reserved for the rendered
    // records). RUST_LOG overrides the default level; .env is honored.
    let _ = dotenvy::dotenv();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Creating a new address book
    let mut book = AddressBook::new();

    // Create a record for John with two phones
    let mut john = Record::new("John");
    john.add_phone("1234567890")?;
    john.add_phone("5555555555")?;
    book.add_record(john);

    // Create and add a new record for Jane
    let mut jane = Record::new("Jane");
    jane.add_phone("9876543210")?;
    book.add_record(jane);

    info!("Book populated with {} record(s)", book.len());

    // Output of all entries in the book
    for (id, record) in book.entries() {
        println!("{}: {}", id, record);
    }

    // Find and edit John's phone
    let (john_id, john) = book
        .find_by_name_mut("John")
        .ok_or_else(|| anyhow::anyhow!("John is missing from the book"))?;
    john.edit_phone("1234567890", "1112223333")?;
    println!("{}", john);

    // Search for a specific phone in John's record
    let found = john.find_phone("5555555555")?;
    println!("{}: {}", john.name(), found);

    // Deleting Jane's record
    book.delete_by_name("Jane");
    info!("{} record(s) remain", book.len());

    // John stays reachable under his original id
    let remaining = book
        .get(john_id)
        .ok_or_else(|| anyhow::anyhow!("John's id vanished"))?;
    println!("{}", remaining);

    Ok(())
}
