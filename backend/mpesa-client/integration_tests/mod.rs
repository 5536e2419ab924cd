mod auth;
mod error;
mod helpers;
mod operations;
