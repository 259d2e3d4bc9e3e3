//! History browsing commands.

use std::sync::Arc;

use anyhow::Result;
use lede_application::HistoryBrowser;
use lede_core::conversation::MessageRole;
use lede_infrastructure::JsonConversationRepository;

fn browser() -> Result<HistoryBrowser> {
    Ok(HistoryBrowser::new(Arc::new(
        JsonConversationRepository::new()?,
    )))
}

pub async fn list(search: Option<&str>, stats: bool) -> Result<()> {
    let browser = browser()?;

    if stats {
        let stats = browser.stats().await?;
        println!("Conversations: {}", stats.total_conversations);
        println!("Messages:      {}", stats.total_messages);
        println!(
            "Avg per conv:  {:.1}",
            stats.avg_messages_per_conversation
        );
        return Ok(());
    }

    let rows = match search {
        Some(query) => browser.search(query).await?,
        None => browser.list().await?,
    };

    if rows.is_empty() {
        match search {
            Some(query) => println!("No conversations match '{query}'."),
            None => println!("No saved conversations yet."),
        }
        return Ok(());
    }

    for row in rows {
        println!("{}  {}  ({} messages, {})", row.id, row.title, row.message_count, row.age);
        if !row.first_question_preview.is_empty() {
            println!("    ❓ {}", row.first_question_preview);
        }
    }

    Ok(())
}

pub async fn show(id: &str) -> Result<()> {
    let conversation = browser()?.open(id).await?;

    println!("📄 {}", conversation.article_title);
    println!("   {}", conversation.article_url);
    println!();

    for message in &conversation.messages {
        let speaker = match message.role {
            MessageRole::User => "You",
            MessageRole::Assistant => "Lede",
        };
        println!("{speaker}: {}", message.content);
        println!();
    }

    Ok(())
}
