use folio::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let client = ChatApiClient::new(ChatConfig::from_env())?;
    let store = ThreadStore::new(FileBackend::new(std::env::temp_dir().join("folio-demo"))?);
    let mut session = ChatSession::new(client, store);

    if !session.state().messages.is_empty() {
        println!("Resuming a stored conversation:");
        for message in &session.state().messages {
            println!("  {:?}: {}", message.sender, message.content);
        }
    }

    let state = session.send("Which chapter introduces inverse kinematics?").await;
    for message in &state.messages {
        println!("{:?}: {}", message.sender, message.content);
    }

    // Run the example again to see the thread restored from disk.
    Ok(())
}
