//! Outbound HTTP: the contract comparison and risk analysis webhooks.

pub mod webhook;
