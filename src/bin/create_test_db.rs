use std::error::Error;
use std::path::Path;
use std::process::exit;
use std::sync::{Arc, Mutex};

use clap::Parser;
use rusqlite::Connection;
use time::{Duration, OffsetDateTime};

use finance_tracker::{
    EXPENSE_CATEGORIES, INCOME_CATEGORIES, NewTransaction, SQLiteTransactionStore,
    TransactionStore, initialize_db,
};

/// A utility for creating a test database for the REST API server of finance_tracker.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,

    /// The number of months of sample transactions to create.
    #[arg(long, short, default_value_t = 3)]
    months: u16,
}

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    let store = SQLiteTransactionStore::new(Arc::new(Mutex::new(conn)));
    let today = OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date();

    println!("Creating sample transactions...");
    let mut count = 0;

    for month in 0..args.months {
        let month_start = today - Duration::days(30 * i64::from(month));

        store.create(
            NewTransaction::income(INCOME_CATEGORIES[0], 4500.0, &month_start.to_string())
                .description("Monthly salary"),
        )?;
        count += 1;

        for (index, category) in EXPENSE_CATEGORIES.iter().enumerate() {
            let day = month_start - Duration::days(index as i64 * 3);
            let amount = 25.0 + 17.5 * index as f64;

            store.create(NewTransaction::expense(category, amount, &day.to_string()))?;
            count += 1;
        }
    }

    println!("Created {count} transactions.");
    println!("Success!");

    Ok(())
}
