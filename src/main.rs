pub use error::Error;
mod command;
mod conf;
mod domain;
mod error;
mod log;
mod model;
mod provider;
mod rest;
#[cfg(test)]
mod test;
mod view;
use conf::Conf;
use std::env;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[actix_web::main]
async fn main() -> Result<()> {
    log::init_logging();

    let conf = Conf::from_env()?;

    let args: Vec<String> = env::args().collect();

    let command = match args.get(1) {
        Some(some) => some,
        None => Err(Error::CLI("No actions passed".into()))?,
    };

    match command.as_str() {
        "server" => command::server::run(conf).await?,
        "export" => command::export::run(&args[2..], &conf)?,
        first_arg => Err(Error::CLI(format!("Unknown command: {first_arg}")))?,
    }

    Ok(())
}
