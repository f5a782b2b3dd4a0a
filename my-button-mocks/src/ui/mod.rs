//! Shared UI components for the catalog

mod link_card;

pub use link_card::LinkCard;
