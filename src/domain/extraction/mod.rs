//! Response extraction.
//!
//! Splits the model's raw reply into named fields. Pure; never fails on a
//! text reply.

mod extractor;
mod fields;
pub mod marker_sets;
mod reply;

pub use extractor::{
    Extraction, Extractor, MarkerExtractor, MarkerField, ShortReplyFallback, WholeBodyExtractor,
    BODY_FIELD,
};
pub use fields::{ExtractedField, ExtractedFields, FieldSource};
pub use reply::RawReply;
