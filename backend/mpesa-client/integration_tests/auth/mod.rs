mod expiry;
mod single_flight;
mod token_cache;
mod unauthorized_replay;
