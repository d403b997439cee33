//! Release Tracker - Release lifecycle tracking service
//!
//! Tracks software releases as they move through a fixed delivery pipeline
//! (Created, In Development, On DEV, ... , Done). Every status change is
//! checked against the workflow before it is stored.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
