use std::error::Error;
use std::path::Path;
use std::process::exit;
use std::sync::{Arc, Mutex};

use clap::Parser;
use rusqlite::Connection;

use finance_tracker::{SQLiteTransactionStore, Summary, TransactionStore, summarize};

/// Print the balance, totals and expense breakdown for a finance_tracker database.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to the application SQLite database.
    #[arg(long)]
    db_path: String,

    /// Print the summary as JSON instead of a table.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let db_path = Path::new(&args.db_path);
    if !db_path.is_file() {
        eprintln!("File does not exist at {db_path:#?}!");
        exit(1);
    }

    let conn = Connection::open(db_path)?;
    let store = SQLiteTransactionStore::new(Arc::new(Mutex::new(conn)));
    let transactions = store.list()?;
    let summary = summarize(&transactions);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(transactions.len(), &summary);
    }

    Ok(())
}

fn print_summary(transaction_count: usize, summary: &Summary) {
    println!("Transactions:   {transaction_count}");
    println!("Total income:   {:>12.2}", summary.total_income);
    println!("Total expenses: {:>12.2}", summary.total_expenses);
    println!("Balance:        {:>12.2}", summary.balance);

    if summary.category_breakdown.is_empty() {
        println!("\nNo expenses recorded.");
        return;
    }

    println!("\nExpenses by category:");
    for (category, total) in summary.category_breakdown.iter() {
        let share = if summary.total_expenses == 0.0 {
            0.0
        } else {
            total / summary.total_expenses * 100.0
        };
        println!("  {category:<16} {total:>12.2} {share:>6.1}%");
    }
}
