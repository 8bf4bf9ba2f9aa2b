//! In-process collaborators
//!
//! State lives in plain collections and disappears with the value.
//! Stateless collaborators (formatter, validator, price calculator) live
//! here too.

mod content;
mod csv;
mod email;
mod grades;
mod images;
mod indexer;
mod inventory;
mod ledger;
mod logger;
mod notifications;
mod payments;
mod pricing;
mod queue;
mod users;
mod validator;
mod world;

pub use content::StaticContentProvider;
pub use csv::CsvFormatter;
pub use email::{InMemoryEmailService, WELCOME_MESSAGE};
pub use grades::InMemoryGradeBook;
pub use images::InMemoryImageStorage;
pub use indexer::InvertedIndexer;
pub use inventory::InMemoryInventory;
pub use ledger::InMemoryTransactionLogger;
pub use logger::MemoryLogger;
pub use notifications::InMemoryNotificationService;
pub use payments::InMemoryPaymentGateway;
pub use pricing::RatePriceCalculator;
pub use queue::InMemoryMessageQueue;
pub use users::InMemoryUserRepository;
pub use validator::{EMAIL_ERROR, MIN_PASSWORD_LEN, PASSWORD_ERROR, RuleValidator};
pub use world::InMemoryGameWorld;
