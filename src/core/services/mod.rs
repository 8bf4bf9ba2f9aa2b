//! Consumers of the component pairs
//!
//! Each service owns its collaborator and is generic over the port trait
//! it calls into, so the same service runs against a real adapter or a
//! mock.
//!
//! - [`auth`] - log users in against a user repository
//! - [`calculator`] - arithmetic with an audit log
//! - [`currency`] - conversions recorded by a transaction logger
//! - [`exporter`] - write formatted records to disk
//! - [`form`] - accept forms that pass validation
//! - [`image`] - process and enhance stored images
//! - [`messaging`] - drain a message queue
//! - [`orders`] - create orders once payment succeeds
//! - [`player`] - pick items up from the game world
//! - [`catalog`] - product prices through a price calculator
//! - [`search`] - rank documents through a word index
//! - [`cart`] - shopping cart backed by an inventory
//! - [`registry`] - student registration with a grade book
//! - [`scheduler`] - task scheduling with notifications
//! - [`renderer`] - fill page templates from a content provider
//! - [`accounts`] - user creation with welcome emails

pub mod accounts;
pub mod auth;
pub mod calculator;
pub mod cart;
pub mod catalog;
pub mod currency;
pub mod exporter;
pub mod form;
pub mod image;
pub mod messaging;
pub mod money;
pub mod orders;
pub mod player;
pub mod registry;
pub mod renderer;
pub mod scheduler;
pub mod search;

pub use accounts::UserManager;
pub use auth::AuthService;
pub use calculator::Calculator;
pub use cart::ShoppingCart;
pub use catalog::ProductCatalog;
pub use currency::{CurrencyConverter, default_rates};
pub use exporter::DataExporter;
pub use form::FormHandler;
pub use image::ImageProcessor;
pub use messaging::MessageProcessor;
pub use money::round_cents;
pub use orders::OrderProcessor;
pub use player::{Player, START_LOCATION};
pub use registry::StudentRegistry;
pub use renderer::{PAGE_NOT_FOUND, TemplateError, TemplateRenderer, fill_template};
pub use scheduler::TaskScheduler;
pub use search::SearchEngine;
