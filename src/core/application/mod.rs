pub mod alert_translator;
pub mod entity_builder;
pub mod normalizer;
pub mod walker;
