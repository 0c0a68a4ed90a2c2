//! Backend bridge: command queue from the UI and the worker that runs it.

pub mod commands;
pub mod runtime;
