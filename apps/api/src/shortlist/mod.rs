// CV shortlisting: keyword parsing, whole-word matching, scoring, ranking.
// Extraction lives in crate::extraction; this module never touches disk.

pub mod handlers;
pub mod keywords;
pub mod models;
pub mod pipeline;
pub mod scoring;
