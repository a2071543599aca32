//! Arcade Sales - console shop for arcade machines
//!
//! This crate provides two purchase workflows:
//! - Quick purchase of a machine from a fixed material and game price list
//! - An arcade store where managers curate a videogame catalog and clients
//!   build, equip and buy machines of five categories
//!
//! Sales are kept in flat text records and one JSON delivery file per purchase.

pub mod config;
pub mod console;
pub mod entities;
pub mod error;
pub mod records;
pub mod services;
pub mod state;
pub mod utils;
