pub mod error;
pub mod engine;
pub mod commands;
pub mod command_handler;
pub mod io_service;
