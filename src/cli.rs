use crate::*;
use clap::Parser;

/// Swap a foreign table for a local copy under the same name, refresh the
/// copy, or swap back.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// What to do with the table.
    #[arg(value_enum, default_value_t = Action::Create)]
    pub action: Action,

    #[arg(long)]
    pub database: String,
    #[arg(long)]
    pub user: String,
    #[arg(long)]
    pub password: String,
    #[arg(long)]
    pub host: String,
    #[arg(long)]
    pub port: u16,

    /// Schema holding the table.
    #[arg(long)]
    pub schema: String,
    /// Table name, as the foreign table is currently called.
    #[arg(long)]
    pub table: String,

    /// Print each statement to stdout before running it.
    #[arg(long)]
    pub verbose: bool,
    /// Print the statements without connecting.
    #[arg(long)]
    pub dry_run: bool,
}

impl Args {
    pub fn params(&self) -> Params {
        Params {
            host: self.host.clone(),
            port: self.port,
            database: self.database.clone(),
            user: self.user.clone(),
            password: self.password.clone(),
        }
    }
    pub fn target(&self) -> Result<Target, Error> {
        Target::new(self.schema.as_str(), self.table.as_str())
    }
    pub fn level(&self) -> log::LevelFilter {
        match self.verbose {
            true => log::LevelFilter::Debug,
            false => log::LevelFilter::Info,
        }
    }

    pub async fn run(self) -> Result<(), Error> {
        let ref target = self.target()?;
        match self.dry_run {
            true => Ok(self
                .action
                .plan(target)
                .iter()
                .for_each(|sql| println!("{}", sql))),
            false => execute(self.action, target, &self.params(), self.verbose).await,
        }
    }
}
