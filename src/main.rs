mod cli;
mod conf;
mod controller;
mod model;
mod provider;
mod service;
#[cfg(test)]
mod test;

use crate::{conf::Conf, service::QuoteService};
use rocket::{catchers, routes, Build, Rocket};
use std::{env, process::exit};
use tracing::error;

#[rocket::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().skip(1).collect();

    if let Err(e) = cli::run(&args).await {
        error!(error = ?e, "Exiting with error");
        exit(1);
    }
}

pub fn prepare(rocket: Rocket<Build>, conf: Conf, quotes: QuoteService) -> Rocket<Build> {
    rocket
        .mount("/", routes![controller::quotes::get])
        .register("/", catchers![controller::catcher::default])
        .manage(conf)
        .manage(quotes)
}
