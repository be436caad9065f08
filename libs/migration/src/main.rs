//! Schema migration CLI for the bookkeeping database.
//!
//! Reads `DATABASE_URL`; `cargo run -p migration -- up` applies the users and
//! categories tables, `down` reverts them.

use migration::Migrator;
use sea_orm_migration::cli;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
