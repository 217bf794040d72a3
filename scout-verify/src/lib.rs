//! # scout-verify
//!
//! The candidate verification pipeline:
//!
//! 1. **Signal scorer**: pure additive heuristics over URL, contact, bio,
//!    and upstream rationale text.
//! 2. **Oracle adapter**: four normalized judgments from the external
//!    reasoning service, with strict-then-best-effort-then-fixed-default
//!    parsing and an owned response cache.
//! 3. **Multi-stage verifier**: category plausibility, specific identity,
//!    and disqualifiers, in strict order with short-circuit rejection.
//! 4. **Batch verifier**: bounded worker pool, per-URL score cache, and a
//!    borderline-band gate deciding who pays for oracle verification.
//! 5. **Search-result analysis**: oracle-driven candidate extraction with
//!    a direct-extraction fallback.

pub mod analysis;
pub mod batch;
pub mod engine;
pub mod oracle;
pub mod scorer;

pub use analysis::{ExtractedCandidate, SearchAnalyzer};
pub use batch::BatchVerifier;
pub use engine::VerificationEngine;
pub use oracle::OracleAdapter;
