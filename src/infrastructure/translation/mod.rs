mod chat_completion_translator;
mod google_translator;
mod translator_factory;

pub use chat_completion_translator::ChatCompletionTranslator;
pub use google_translator::{DEFAULT_GOOGLE_TRANSLATE_URL, GoogleTranslator};
pub use translator_factory::{TranslatorFactory, TranslatorFactoryError};
