// Shared Kernel
// Cross-cutting pieces used by every bounded context in `modules`

pub mod errors;          // Shared error types
pub mod infrastructure;  // Shared infrastructure (database, migrations)
pub mod utils;           // Shared utilities (logging, validation)

// Re-exports for convenience
pub use infrastructure::database::{Database, DatabaseConfig};
