// ============================================================================
// Utilities Module
// Helper functions for applications embedding the library
// ============================================================================

mod logging;

pub use logging::init_logging;
