mod args;
mod commands;
mod edit;
mod session;
mod show;

pub use args::Cli;
