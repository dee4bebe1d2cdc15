use std::io::Write;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use strategist::config::Config;
use strategist::logger;
use strategist::services::{BriefingClient, BriefingRequest, BriefingStatus};
use strategist::Strategist;

type Input = Lines<BufReader<Stdin>>;

#[tokio::main]
async fn main() -> Result<()> {
    logger::init();
    log::info!("🚀 Strategist started");

    let config = Config::default();
    log::info!("📁 Configuration loaded");

    let strategist = Strategist::from_config(&config);
    let briefing = BriefingClient::new(config.briefing_endpoint.clone());

    println!("Consult the Strategist.");
    println!("Input your organizational friction points. /briefing to request a briefing, /quit to exit.");
    if !strategist.is_live() {
        println!("(offline: answers come from the canned briefing library)");
    }

    let mut input = BufReader::new(tokio::io::stdin()).lines();
    loop {
        prompt("> ")?;
        let Some(line) = input.next_line().await? else {
            break;
        };

        match line.trim() {
            "" => continue,
            "/quit" | "/exit" => break,
            "/briefing" => request_briefing(&briefing, &mut input).await?,
            _ => {
                let answer = strategist.consult(&line).await;
                println!("\n\"{}\"\n", answer.text);
            }
        }
    }

    log::info!("👋 Strategist stopped");
    Ok(())
}

fn prompt(label: &str) -> Result<()> {
    print!("{}", label);
    std::io::stdout().flush()?;
    Ok(())
}

async fn ask(input: &mut Input, label: &str) -> Result<Option<String>> {
    prompt(label)?;
    Ok(input.next_line().await?.map(|s| s.trim().to_string()))
}

async fn request_briefing(client: &BriefingClient, input: &mut Input) -> Result<()> {
    println!("Request a Strategy Briefing");

    let mut request = BriefingRequest::default();
    let fields: [(&str, &mut String); 5] = [
        ("Full Name*: ", &mut request.name),
        ("Work Email*: ", &mut request.email),
        ("Company*: ", &mut request.company),
        ("Role / Title: ", &mut request.role),
        ("Describe Your Challenge*: ", &mut request.message),
    ];
    for (label, slot) in fields {
        match ask(input, label).await? {
            Some(value) => *slot = value,
            None => return Ok(()),
        }
    }

    log::debug!("Briefing status: {:?}", BriefingStatus::Submitting);
    println!("Submitting...");

    let result = client.submit(&request).await;
    log::debug!("Briefing status: {:?}", BriefingStatus::after(&result));

    match result {
        Ok(()) => println!(
            "Briefing Requested. A member of the LeverageWorks team will respond within one business day."
        ),
        Err(e) => {
            log::warn!("⚠️ Briefing failed: {}", e);
            println!("Something went wrong ({}). Please try again or email us directly.", e);
        }
    }
    Ok(())
}
