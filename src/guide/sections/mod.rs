//! One module per guide section, emitted in document order.

pub(crate) mod ad_generator;
pub(crate) mod best_practices;
pub(crate) mod contents;
pub(crate) mod core_features;
pub(crate) mod cover;
pub(crate) mod discover;
pub(crate) mod gemini;
pub(crate) mod getting_started;
pub(crate) mod introduction;
pub(crate) mod support;
pub(crate) mod troubleshooting;
pub(crate) mod variations;
