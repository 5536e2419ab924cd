mod credentials;
mod response;
mod token_store;
