mod api;
mod transport;
