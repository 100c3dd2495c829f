use kushti_post::config::Config;
use kushti_post::generator::{ContentGenerator, GeminiClient};
use kushti_post_common::{Language, PostingInput};

#[tokio::test]
async fn gemini_generation_integration() {
    let api_key = match std::env::var("GEMINI_API_KEY") {
        Ok(key) if !key.trim().is_empty() => key,
        _ => {
            eprintln!("GEMINI_API_KEY not set; skipping integration test");
            return;
        }
    };

    let config = Config {
        api_key: Some(api_key),
        ..Default::default()
    };
    let client = GeminiClient::from_config(&config).expect("client");

    let input = PostingInput {
        primary_keyword: "Maharashtra Kesari".into(),
        location: Some("Kolhapur".into()),
        language: Language::Marathi,
        ..Default::default()
    };

    let content = client.generate(&input).await.expect("generation failed");
    assert!(!content.youtube.title.is_empty());
    assert!(!content.youtube.tags.is_empty());
    assert!(!content.facebook.caption.is_empty());
    assert!(!content.instagram.hashtags.is_empty());
    assert!(!content.whatsapp.status_text.is_empty());
}
