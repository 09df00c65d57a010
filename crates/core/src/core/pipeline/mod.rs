//! Pipeline plumbing: inter-stage buffers, the forwarding network, and the
//! five stage operations.

/// Forwarding resolver.
pub mod hazards;

/// Inter-stage buffer types.
pub mod latches;

/// The five stage operations.
pub mod stages;
