mod chat;
mod display;

use clap::Parser;
use lexfind_client::{FeedbackClient, MetadataClient, QaClient};
use lexfind_core::Annotator;

use chat::ChatLoop;

/// Lexfind: assistente conversazionale sul diritto tributario.
#[derive(Parser, Debug)]
#[command(name = "lexfind", version, about)]
struct Args {
    /// Base URL of the QA service.
    #[arg(long, env = "LEXFIND_API_URL", default_value = "https://chat-api-1087014169033.europe-west1.run.app")]
    api_url: String,

    /// Base URL of the source-metadata service.
    #[arg(long, env = "LEXFIND_METADATA_URL", default_value = "http://localhost:8080")]
    metadata_url: String,

    /// Base URL of the feedback delivery relay.
    #[arg(long, env = "LEXFIND_FEEDBACK_URL", default_value = "http://localhost:9000")]
    feedback_url: String,

    /// Recipient address for user feedback.
    #[arg(long, env = "LEXFIND_FEEDBACK_TO", default_value = "feedback@lexfind.it")]
    feedback_to: String,

    /// Inter-word delay of the simulated answer stream, in milliseconds.
    #[arg(long, env = "LEXFIND_STREAM_DELAY_MS", default_value_t = 50)]
    stream_delay_ms: u64,

    /// Require whole-word citation keyword matches instead of substrings.
    #[arg(long)]
    strict: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    tracing::info!("lexfind v{}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();

    let chat = ChatLoop::new(
        QaClient::new(args.api_url),
        MetadataClient::new(args.metadata_url),
        FeedbackClient::new(args.feedback_url),
        Annotator::new().strict(args.strict),
        args.feedback_to,
        args.stream_delay_ms,
    );

    chat.run().await
}
