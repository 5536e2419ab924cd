mod cli;
mod demos;
mod error;
mod logger;
