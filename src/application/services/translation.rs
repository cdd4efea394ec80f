use crate::application::ports::Translator;
use crate::domain::{TranscriptionResult, is_same_language};

/// Translates `text`, returning it unchanged if the translator fails.
pub async fn translate_or_original(
    translator: &dyn Translator,
    text: &str,
    source_language: &str,
    target_language: &str,
) -> String {
    match translator
        .translate(text, source_language, target_language)
        .await
    {
        Ok(translated) => translated,
        Err(e) => {
            tracing::warn!(
                error = %e,
                source_language,
                target_language,
                "Translation failed, keeping original transcript"
            );
            text.to_string()
        }
    }
}

/// Attaches `translated_transcript` when the detected language differs from the target.
///
/// Returns whether the field was attached. Responses with a missing or blank
/// transcript or detected language are left untouched.
pub async fn attach_translation(
    result: &mut TranscriptionResult,
    translator: &dyn Translator,
    target_language: &str,
) -> bool {
    let transcript = result.transcript().filter(|t| !t.trim().is_empty());
    let language = result.detected_language().filter(|l| !l.trim().is_empty());
    let (Some(transcript), Some(language)) = (transcript, language) else {
        tracing::debug!("Response has no transcript or detected language, skipping translation");
        return false;
    };

    if is_same_language(language, target_language) {
        tracing::debug!(language, "Transcript already in target language");
        return false;
    }

    let transcript = transcript.to_string();
    let language = language.to_string();
    let translated =
        translate_or_original(translator, &transcript, &language, target_language).await;

    tracing::info!(
        source_language = %language,
        target_language,
        chars = translated.len(),
        "Attaching translated transcript"
    );
    result.attach_translation(translated)
}
