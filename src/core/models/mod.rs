//! Domain models for duet
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`User`] / [`Role`] - accounts known to a user repository
//! - [`ConversionRecord`] - one logged currency conversion
//! - [`Order`] / [`Transaction`] - order book and payment ledger entries
//! - [`Location`] - a place in the game world
//! - [`Product`] / [`StockItem`] - catalog and inventory entries
//! - [`Task`] - a scheduled task
//! - [`PageContent`] - fields substituted into a page template
//! - [`SentEmail`] - an outgoing email
//! - [`Submission`] / [`FormOutcome`] - form handling results
//! - [`Record`] - one row handed to the CSV exporter

mod account;
mod commerce;
mod content;
mod form;
mod ledger;
mod location;
mod record;
mod task;

pub use account::{Role, User};
pub use commerce::{Order, Product, StockItem, Transaction};
pub use content::{PageContent, SentEmail};
pub use form::{FormOutcome, Submission};
pub use ledger::ConversionRecord;
pub use location::Location;
pub use record::{Record, render_value};
pub use task::Task;
