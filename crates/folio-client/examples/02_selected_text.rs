use anyhow::Result;
use folio_client::{ChatApiClient, ChatConfig};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let client = ChatApiClient::new(ChatConfig::from_env())?;

    let excerpt = "Inverse kinematics maps a desired end-effector pose back \
                   to the joint angles that achieve it.";

    let response = client
        .send_selected_text_message("Can you explain this in simpler terms?", excerpt, None)
        .await?;
    println!("Answer: {}", response.answer);

    // Follow up on the same conversation using the adopted thread id.
    let follow_up = client
        .send_message("And why is it hard to compute?", Some(&response.thread_id))
        .await?;
    println!("Follow-up: {}", follow_up.answer);

    Ok(())
}
