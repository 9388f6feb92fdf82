/// Ports layer - Interface definitions for infrastructure
///
/// Ports describe what the application core needs from the outside world
/// without saying how it is provided.
pub mod outbound;
