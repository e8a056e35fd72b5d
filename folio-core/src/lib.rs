//! Folio content layer library exports

pub mod catalog;
pub mod config;
pub mod validator;
