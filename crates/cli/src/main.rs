//! Interactive menu driver over the two dictionary stores.
//!
//! The driver owns everything user-facing: prompting, echoing, and
//! rendering results as text. Storage decisions live in [`filestore`];
//! this binary only forwards list/search/add/delete commands to the
//! selected store and keeps the loop going on every reported error.

use std::fs::OpenOptions;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use dictfile::Entry;
use filestore::{FileStore, StoreError};
use keyfmt::KeyFormat;

const FOUR_LETTER_FILE: &str = "four_letter.txt";
const FIVE_DIGIT_FILE: &str = "five_digit.txt";

/// Two small persistent dictionaries behind a numbered menu.
#[derive(Debug, Parser)]
#[command(name = "dict", version, about)]
struct Args {
    /// Directory holding the dictionary files.
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    bootstrap(&args.data_dir)?;
    log::info!("using data directory {}", args.data_dir.display());

    let four = FileStore::open(args.data_dir.join(FOUR_LETTER_FILE), KeyFormat::FourLetter);
    let five = FileStore::open(args.data_dir.join(FIVE_DIGIT_FILE), KeyFormat::FiveDigit);

    let stdin = io::stdin();
    run(&mut stdin.lock(), four, five)
}

/// Creates the data directory and empty dictionary files on first run.
///
/// The stores accept a missing file on their own; creating the files up
/// front just makes the on-disk layout visible from the first launch.
fn bootstrap(data_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("creating data directory {}", data_dir.display()))?;

    for name in [FOUR_LETTER_FILE, FIVE_DIGIT_FILE] {
        let path = data_dir.join(name);
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("creating dictionary file {}", path.display()))?;
    }
    Ok(())
}

/// Outer loop: pick a dictionary, drive its menu, repeat until quit or EOF.
fn run(input: &mut impl BufRead, mut four: FileStore, mut five: FileStore) -> Result<()> {
    loop {
        println!();
        println!("Pick a dictionary:");
        println!(
            "  1. Four-letter keys ({})",
            KeyFormat::FourLetter.describe()
        );
        println!("  2. Five-digit keys ({})", KeyFormat::FiveDigit.describe());
        println!("  0. Quit");

        let Some(choice) = prompt(input, "> ")? else {
            return Ok(());
        };
        match choice.as_str() {
            "0" => return Ok(()),
            "1" => dictionary_menu(input, &mut four)?,
            "2" => dictionary_menu(input, &mut five)?,
            _ => println!("Invalid choice, try again."),
        }
    }
}

/// Inner loop over one dictionary until the user backs out.
fn dictionary_menu(input: &mut impl BufRead, store: &mut FileStore) -> Result<()> {
    loop {
        println!();
        println!("{} dictionary:", store.format());
        println!("  1. List entries");
        println!("  2. Search by key");
        println!("  3. Add entry");
        println!("  4. Delete entry");
        println!("  0. Back");

        let Some(choice) = prompt(input, "> ")? else {
            return Ok(());
        };
        match choice.as_str() {
            "0" => return Ok(()),
            "1" => list_entries(store),
            "2" => search_entry(input, store)?,
            "3" => add_entry(input, store)?,
            "4" => delete_entry(input, store)?,
            _ => println!("Invalid choice, try again."),
        }
    }
}

fn list_entries(store: &FileStore) {
    let entries = store.read_all();
    if entries.is_empty() {
        println!("The dictionary is empty.");
        return;
    }

    println!("{} entries:", entries.len());
    for (key, value) in entries {
        println!("  {}", Entry::new(key, value));
    }
}

fn search_entry(input: &mut impl BufRead, store: &FileStore) -> Result<()> {
    let Some(key) = prompt(input, "Key: ")? else {
        return Ok(());
    };
    match store.search(&key) {
        Some(value) => println!("{}", Entry::new(key, value)),
        None => println!("No entry for {key:?}."),
    }
    Ok(())
}

fn add_entry(input: &mut impl BufRead, store: &mut FileStore) -> Result<()> {
    let Some(key) = prompt(input, "Key: ")? else {
        return Ok(());
    };
    let Some(value) = prompt(input, "Value: ")? else {
        return Ok(());
    };

    match store.add(key, value) {
        Ok(()) => println!("Added."),
        Err(e @ StoreError::InvalidKey { .. }) => println!("{e}"),
        // The entry is live in memory; only the file write failed.
        Err(e) => println!("Could not save the dictionary: {e}"),
    }
    Ok(())
}

fn delete_entry(input: &mut impl BufRead, store: &mut FileStore) -> Result<()> {
    let Some(key) = prompt(input, "Key: ")? else {
        return Ok(());
    };
    match store.delete(&key) {
        Ok(true) => println!("Deleted."),
        Ok(false) => println!("No entry for {key:?}."),
        Err(e) => println!("Could not save the dictionary: {e}"),
    }
    Ok(())
}

/// Prints `text`, flushes, and reads one trimmed line. `None` on EOF.
fn prompt(input: &mut impl BufRead, text: &str) -> Result<Option<String>> {
    print!("{text}");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
