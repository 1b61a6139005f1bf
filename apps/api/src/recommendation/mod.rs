// Career-aligned activity recommendation engine.
// Pipeline: intent expansion → high-recall retrieval → five-dimension scoring → ranking.
// Every result traces back to a literal catalog entry; nothing is generated.

pub mod domain_table;
pub mod engine;
pub mod handlers;
pub mod intent;
pub mod ranking;
pub mod rationale;
pub mod retrieval;
pub mod rules;
pub mod scoring;
