mod client;
mod responses;
