//! Adapter implementations for port traits
//!
//! - `memory/` - in-process collaborators holding their state in maps and lists
//! - `file/` - collaborators that write to the local filesystem
//!
//! Each pair's collaborator has exactly one real implementation here; tests
//! substitute mocks through the same port traits.

pub mod file;
pub mod memory;

pub use file::{DEFAULT_LOG_FILE, FileLogger, TIMESTAMP_FORMAT, format_entry};
pub use memory::{
    CsvFormatter, EMAIL_ERROR, InMemoryEmailService, InMemoryGameWorld, InMemoryGradeBook,
    InMemoryImageStorage, InMemoryInventory, InMemoryMessageQueue, InMemoryNotificationService,
    InMemoryPaymentGateway, InMemoryTransactionLogger, InMemoryUserRepository, InvertedIndexer,
    MIN_PASSWORD_LEN, MemoryLogger, PASSWORD_ERROR, RatePriceCalculator, RuleValidator,
    StaticContentProvider, WELCOME_MESSAGE,
};
