use sea_orm_migration::prelude::*;

use ascent_fitness_migration::Migrator;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
