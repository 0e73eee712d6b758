//! MCP tool handlers for the calculator server
//!
//! This module contains the implementation of all MCP tool handlers.
//! Each handler is in a separate file for better organization.

pub mod press;
pub mod set_base;
pub mod status;
