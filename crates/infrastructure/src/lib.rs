//! rpp Infrastructure Layer
pub mod controller;
pub mod dns;
