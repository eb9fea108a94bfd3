//! Command-line surface of the driver.
use clap::Parser;
use std::fmt;

#[derive(Parser, Debug)]
#[command(name = "nodeflow", version, about = "Run the increment → double → sqrt node pipeline")]
pub struct Cli {
    #[command(flatten)]
    pub connection: ConnectionArgs,
}

/// Remote connection options. Accepted and logged; the pipeline does not use them.
#[derive(clap::Args, Clone, Default)]
pub struct ConnectionArgs {
    #[arg(long)]
    pub host: Option<String>,

    #[arg(long)]
    pub username: Option<String>,

    #[arg(long)]
    pub password: Option<String>,
}

impl fmt::Debug for ConnectionArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionArgs")
            .field("host", &self.host)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .finish()
    }
}
