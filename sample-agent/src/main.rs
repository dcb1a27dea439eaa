// ABOUTME: Runs the summary agent once on a fixed sample and prints its answer.
// ABOUTME: Demonstrates wiring the count_words tool into an agent with scribe.

use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use scribe::prelude::*;

const SAMPLE_INPUT: &str = "Generative AI has the potential to transform how organizations automate work, \
                            extract insights, and interact with data. It can also boost productivity.";

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run_sample(settings: &Settings) -> Result<RunResult, ScribeError> {
    let agent = summary_agent_with_tools().await.with_settings(settings);
    let client: Arc<dyn LlmClient> = Arc::new(OpenAIClient::from_settings(settings));
    let runner = Runner::new(client);

    info!(agent = %agent.name, model = %agent.model, "Running sample");
    Ok(runner.run(&agent, SAMPLE_INPUT).await?)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();
    init_tracing();

    let settings = Settings::from_env()?;
    let result = Trace::new("Running sample agent")
        .run(run_sample(&settings))
        .await?;

    println!("✅ Agent response:");
    println!("{}", result);
    Ok(())
}
