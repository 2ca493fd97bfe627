use anyhow::Result;
use folio_client::{ChatApiClient, ChatConfig};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let client = ChatApiClient::new(ChatConfig::from_env())?;

    if !client.health_check().await {
        println!("Backend unreachable - set CHAT_API_BASE_URL and try again");
        return Ok(());
    }

    let response = client
        .send_message("What does chapter 2 cover?", None)
        .await?;

    println!("Answer: {}", response.answer);
    println!("Thread: {}", response.thread_id);

    if let Some(sources) = response.sources {
        println!("Sources:");
        for source in sources {
            println!("  [{:.2}] {}", source.score, source.text);
        }
    }

    Ok(())
}
