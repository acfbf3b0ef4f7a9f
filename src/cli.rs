use crate::{
    conf::Conf,
    prepare,
    provider::AwesomeApi,
    service::{quotes::parse_codes, QuoteService},
};
use anyhow::{anyhow, Result};
use std::process::exit;
use tracing::error;

pub async fn run(args: &[String]) -> Result<()> {
    let conf = Conf::new()?;
    let quotes = QuoteService::new(Box::new(AwesomeApi::new(&conf.quotes)?));

    match args.first().map(String::as_str) {
        None | Some("serve") => serve(conf, quotes).await,
        Some("quotes") => print_quotes(&args[1..], &quotes).await,
        Some(_) => {
            error!(?args, "Unknown argument");
            exit(1);
        }
    }
}

async fn serve(conf: Conf, quotes: QuoteService) -> Result<()> {
    if let Err(e) = prepare(rocket::build(), conf, quotes).launch().await {
        return Err(anyhow!("Failed to launch server: {}", e));
    }

    Ok(())
}

async fn print_quotes(args: &[String], quotes: &QuoteService) -> Result<()> {
    let codes: Vec<String> = args.iter().flat_map(|arg| parse_codes(arg)).collect();
    let res = quotes.fetch_quotes(&codes).await;
    println!("{}", serde_json::to_string_pretty(&res)?);

    if res.error().is_some() {
        exit(1);
    }

    Ok(())
}
