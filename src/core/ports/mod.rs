//! Port traits (interfaces) for collaborators
//!
//! Every consumer in `services` talks to its collaborator through one of
//! these traits. Implementations live in the `adapters` module.
//!
//! Under `cfg(test)` each trait also gets a `Mock*` type from
//! `mockall::automock`, re-exported here for the service tests.

// mockall-generated mocks do not carry docs
#![cfg_attr(test, allow(missing_docs, missing_debug_implementations, unused_qualifications))]

mod content_provider;
mod data_formatter;
mod data_validator;
mod document_indexer;
mod email_service;
mod game_world;
mod grade_book;
mod image_storage;
mod inventory_manager;
mod logger;
mod message_queue;
mod notification_service;
mod payment_gateway;
mod price_calculator;
mod transaction_logger;
mod user_repository;

pub use content_provider::ContentProvider;
pub use data_formatter::DataFormatter;
pub use data_validator::DataValidator;
pub use document_indexer::DocumentIndexer;
pub use email_service::EmailService;
pub use game_world::GameWorld;
pub use grade_book::GradeBook;
pub use image_storage::ImageStorage;
pub use inventory_manager::InventoryManager;
pub use logger::Logger;
pub use message_queue::MessageQueue;
pub use notification_service::NotificationService;
pub use payment_gateway::PaymentGateway;
pub use price_calculator::{PriceCalculator, PriceOptions};
pub use transaction_logger::TransactionLogger;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use content_provider::MockContentProvider;
#[cfg(test)]
pub use data_formatter::MockDataFormatter;
#[cfg(test)]
pub use data_validator::MockDataValidator;
#[cfg(test)]
pub use document_indexer::MockDocumentIndexer;
#[cfg(test)]
pub use email_service::MockEmailService;
#[cfg(test)]
pub use game_world::MockGameWorld;
#[cfg(test)]
pub use grade_book::MockGradeBook;
#[cfg(test)]
pub use image_storage::MockImageStorage;
#[cfg(test)]
pub use inventory_manager::MockInventoryManager;
#[cfg(test)]
pub use logger::MockLogger;
#[cfg(test)]
pub use message_queue::MockMessageQueue;
#[cfg(test)]
pub use notification_service::MockNotificationService;
#[cfg(test)]
pub use payment_gateway::MockPaymentGateway;
#[cfg(test)]
pub use price_calculator::MockPriceCalculator;
#[cfg(test)]
pub use transaction_logger::MockTransactionLogger;
#[cfg(test)]
pub use user_repository::MockUserRepository;
