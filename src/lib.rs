//! Sales Roleplay - Conversation engine for simulated sales pitches
//!
//! This crate drives a role-play in which a salesperson pitches to a
//! simulated company president. It tracks how receptive the counterpart
//! is, renders the counterpart's operating instructions for each turn, and
//! scores the salesperson once the conversation ends.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
