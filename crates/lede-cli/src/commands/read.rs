//! Summarize and ask commands.

use std::sync::Arc;

use anyhow::{Context, Result};
use lede_application::{FormattedReply, ReadingSession, SessionController, SessionRequest};
use lede_core::extract::extract_article;
use lede_core::LedeError;
use lede_infrastructure::JsonConversationRepository;
use lede_interaction::{AssistantClient, PageFetcher};

pub async fn summarize(url: &str, key_points: bool) -> Result<()> {
    let request = if key_points {
        SessionRequest::KeyPoints
    } else {
        SessionRequest::Summarize
    };
    run_exchange(url, request, key_points).await
}

pub async fn ask(url: &str, question: &str) -> Result<()> {
    run_exchange(url, SessionRequest::Ask(question.to_string()), false).await
}

async fn run_exchange(url: &str, request: SessionRequest, as_list: bool) -> Result<()> {
    let client = AssistantClient::from_config();
    let controller = SessionController::new(
        Arc::new(client.clone()),
        Arc::new(JsonConversationRepository::new()?),
    );

    let mut session = open_session(&controller, url).await?;
    println!("📄 {}", session.article.title);
    if !session.article.author.is_empty() {
        println!("   by {}", session.article.author);
    }
    if session.is_resumed() {
        println!("   (continuing today's conversation)");
    }
    println!();

    match controller.dispatch(&mut session, request).await {
        Ok(reply) => {
            print_reply(&reply, as_list);
            Ok(())
        }
        Err(err @ LedeError::Api { status: None, .. }) => {
            // The service never answered; check whether it is up at all
            if !client.health().await.unwrap_or(false) {
                eprintln!(
                    "The Lede service at {} is not reachable. Start it and try again.",
                    client.base_url()
                );
            }
            Err(err.into())
        }
        Err(err) => Err(err.into()),
    }
}

async fn open_session(controller: &SessionController, url: &str) -> Result<ReadingSession> {
    let fetcher = PageFetcher::new()?;
    let html = fetcher.fetch(url).await?;
    let article = extract_article(&html, url)?;
    tracing::debug!(
        title = %article.title,
        words = article.length,
        "Extracted article"
    );

    controller
        .open(article)
        .await
        .context("Failed to open reading session")
}

fn print_reply(reply: &str, as_list: bool) {
    match FormattedReply::from_reply(reply, as_list) {
        FormattedReply::List(items) => {
            for item in items {
                println!(" • {item}");
            }
        }
        FormattedReply::Paragraphs(paragraphs) => {
            let mut first = true;
            for paragraph in paragraphs {
                if !first {
                    println!();
                }
                println!("{paragraph}");
                first = false;
            }
        }
    }
}
