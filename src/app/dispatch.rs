use crate::cli::commands::{Cli, Commands};
use anyhow::{Result, anyhow};
use referent::article::ExtractionResult;
use referent::error::ReferentError;
use referent::prompt::ActionId;
use referent::{Config, Pipeline};
use strum::IntoEnumIterator;

/// Log the full detail and turn `err` into the localized one-line message.
fn report_failure(err: &ReferentError, locale: &str) -> anyhow::Error {
    let report = err.classify(locale);
    tracing::error!(
        kind = %report.kind,
        status = report.status,
        detail = %report.detail,
        "command failed"
    );
    anyhow!("{} [{}]", report.message, report.kind)
}

fn print_article(article: &ExtractionResult, locale: &str) {
    println!("{}: {}", t!("cli.title", locale = locale), article.title);
    println!("{}: {}", t!("cli.date", locale = locale), article.date);
    println!();
    println!("{}:", t!("cli.content", locale = locale));
    println!("{}", article.content);
}

fn print_actions() {
    for action in ActionId::iter() {
        let config = action.config();
        println!(
            "{:<10} {:<24} max_tokens={:<5} max_input_chars={:<6} {}",
            action.as_str(),
            config.model_id,
            config.max_output_tokens,
            config.max_input_chars,
            action.description()
        );
    }
}

pub async fn dispatch(cli: Cli, config: Config) -> Result<()> {
    let locale = config.resolved_locale();

    match cli.command {
        Commands::Serve { host, port } => {
            let host = host.unwrap_or_else(|| config.gateway.host.clone());
            let port = port.unwrap_or(config.gateway.port);
            referent::gateway::run_gateway(&host, port, config).await
        }

        Commands::Parse { url, json } => {
            let pipeline = Pipeline::from_config(&config)?;
            let article = pipeline
                .extract(&url)
                .await
                .map_err(|e| report_failure(&e, &locale))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&article)?);
            } else {
                print_article(&article, &locale);
            }
            Ok(())
        }

        Commands::Generate { action, url, json } => {
            let pipeline = Pipeline::from_config(&config)?;
            let digest = pipeline
                .extract_and_generate(&url, &action)
                .await
                .map_err(|e| report_failure(&e, &locale))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&digest)?);
            } else {
                println!("{}", digest.result);
            }
            Ok(())
        }

        Commands::Actions => {
            print_actions();
            Ok(())
        }
    }
}
