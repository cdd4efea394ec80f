mod helpers;

use std::sync::Mutex;

use serde_json::json;

use scribe_relay::application::ports::{TranslationError, Translator};
use scribe_relay::application::services::{attach_translation, translate_or_original};
use scribe_relay::domain::{TRANSLATED_TRANSCRIPT_FIELD, TranscriptionResult};
use scribe_relay::infrastructure::translation::{ChatCompletionTranslator, GoogleTranslator};

use helpers::start_mock_vendor;

struct RecordingTranslator {
    calls: Mutex<Vec<(String, String, String)>>,
}

impl RecordingTranslator {
    fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<(String, String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Translator for RecordingTranslator {
    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, TranslationError> {
        self.calls.lock().unwrap().push((
            text.to_string(),
            source_language.to_string(),
            target_language.to_string(),
        ));
        Ok(format!("[{target_language}] {text}"))
    }
}

struct FailingTranslator;

#[async_trait::async_trait]
impl Translator for FailingTranslator {
    async fn translate(
        &self,
        _text: &str,
        _source_language: &str,
        _target_language: &str,
    ) -> Result<String, TranslationError> {
        Err(TranslationError::ApiRequestFailed("connection reset".to_string()))
    }
}

fn deepgram_result(language: &str) -> TranscriptionResult {
    TranscriptionResult::new(json!({
        "results": {
            "channels": [{
                "detected_language": language,
                "alternatives": [{ "transcript": "bonjour tout le monde" }]
            }]
        }
    }))
}

#[tokio::test]
async fn given_failing_translator_when_translating_then_returns_original_text() {
    let text = translate_or_original(&FailingTranslator, "hola", "es", "en").await;
    assert_eq!(text, "hola");
}

#[tokio::test]
async fn given_non_english_transcript_when_attaching_then_translated_field_is_added() {
    let translator = RecordingTranslator::new();
    let mut result = deepgram_result("fr");

    let attached = attach_translation(&mut result, &translator, "en").await;

    assert!(attached);
    assert_eq!(
        result.translated_transcript(),
        Some("[en] bonjour tout le monde")
    );
    assert_eq!(
        translator.calls(),
        vec![(
            "bonjour tout le monde".to_string(),
            "fr".to_string(),
            "en".to_string()
        )]
    );
}

#[tokio::test]
async fn given_english_transcript_when_attaching_then_field_is_absent_and_no_call_made() {
    let translator = RecordingTranslator::new();
    let mut result = deepgram_result("en");

    let attached = attach_translation(&mut result, &translator, "en").await;

    assert!(!attached);
    let alternative = &result.as_value()["results"]["channels"][0]["alternatives"][0];
    assert!(alternative.get(TRANSLATED_TRANSCRIPT_FIELD).is_none());
    assert!(translator.calls().is_empty());
}

#[tokio::test]
async fn given_failing_translator_when_attaching_then_field_holds_original_transcript() {
    let mut result = deepgram_result("fr");

    let attached = attach_translation(&mut result, &FailingTranslator, "en").await;

    assert!(attached);
    assert_eq!(result.translated_transcript(), Some("bonjour tout le monde"));
}

#[tokio::test]
async fn given_response_without_detected_language_when_attaching_then_result_is_untouched() {
    let translator = RecordingTranslator::new();
    let original = json!({ "text": "ciao", "language": "italian" });
    let mut result = TranscriptionResult::new(original.clone());

    let attached = attach_translation(&mut result, &translator, "en").await;

    assert!(!attached);
    assert_eq!(result.as_value(), &original);
    assert!(translator.calls().is_empty());
}

#[tokio::test]
async fn given_google_translate_success_when_translating_then_returns_translated_text() {
    let vendor = start_mock_vendor(
        "/language/translate/v2",
        200,
        r#"{"data":{"translations":[{"translatedText":"hello everyone"}]}}"#,
    )
    .await;
    let translator = GoogleTranslator::new(
        reqwest::Client::new(),
        Some(vendor.url("/language/translate/v2")),
        "t-key".to_string(),
    );

    let translated = translator.translate("hola a todos", "es", "en").await.unwrap();

    assert_eq!(translated, "hello everyone");
    let request = vendor.single_request();
    assert_eq!(request.query.get("key").map(String::as_str), Some("t-key"));
    assert_eq!(
        request.json(),
        json!({ "q": "hola a todos", "source": "es", "target": "en", "format": "text" })
    );
}

#[tokio::test]
async fn given_google_translate_rate_limit_when_translating_then_returns_rate_limited() {
    let vendor = start_mock_vendor("/language/translate/v2", 429, r#"{"error":{}}"#).await;
    let translator = GoogleTranslator::new(
        reqwest::Client::new(),
        Some(vendor.url("/language/translate/v2")),
        "t-key".to_string(),
    );

    let result = translator.translate("hola", "es", "en").await;

    assert!(matches!(result, Err(TranslationError::RateLimited)));
}

#[tokio::test]
async fn given_chat_completion_when_translating_then_returns_trimmed_content() {
    let vendor = start_mock_vendor(
        "/v1/chat/completions",
        200,
        r#"{"choices":[{"message":{"role":"assistant","content":"  hello everyone \n"}}]}"#,
    )
    .await;
    let translator = ChatCompletionTranslator::new(
        reqwest::Client::new(),
        &vendor.url("/v1"),
        "sk-chat".to_string(),
        "gpt-4o-mini".to_string(),
    );

    let translated = translator.translate("hola a todos", "es", "en").await.unwrap();

    assert_eq!(translated, "hello everyone");
    let request = vendor.single_request();
    assert_eq!(request.header("authorization"), Some("Bearer sk-chat"));
    let body = request.json();
    assert_eq!(body["model"], "gpt-4o-mini");
    assert_eq!(body["messages"][0]["role"], "system");
    assert_eq!(body["messages"][1]["content"], "hola a todos");
}

#[tokio::test]
async fn given_chat_completion_with_no_choices_when_translating_then_returns_invalid_response() {
    let vendor = start_mock_vendor("/v1/chat/completions", 200, r#"{"choices":[]}"#).await;
    let translator = ChatCompletionTranslator::new(
        reqwest::Client::new(),
        &vendor.url("/v1"),
        "sk-chat".to_string(),
        "gpt-4o-mini".to_string(),
    );

    let result = translator.translate("hola", "es", "en").await;

    assert!(matches!(result, Err(TranslationError::InvalidResponse(_))));
}

#[tokio::test]
async fn given_blank_detected_language_when_attaching_then_translator_is_not_called() {
    let translator = RecordingTranslator::new();
    let mut result = deepgram_result("");

    let attached = attach_translation(&mut result, &translator, "en").await;

    assert!(!attached);
    assert!(result.translated_transcript().is_none());
    assert!(translator.calls().is_empty());
}

#[tokio::test]
async fn given_empty_transcript_when_attaching_then_translator_is_not_called() {
    let translator = RecordingTranslator::new();
    let mut result = TranscriptionResult::new(json!({
        "results": {
            "channels": [{
                "detected_language": "de",
                "alternatives": [{ "transcript": "" }]
            }]
        }
    }));

    let attached = attach_translation(&mut result, &translator, "en").await;

    assert!(!attached);
    assert!(result.translated_transcript().is_none());
    assert!(translator.calls().is_empty());
}
