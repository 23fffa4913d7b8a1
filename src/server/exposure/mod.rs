//! Protocol exposures for the echo service

pub mod rest;

pub use rest::RestExposure;
