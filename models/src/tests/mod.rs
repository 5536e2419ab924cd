mod access_token;
mod requests;
mod timestamp;
