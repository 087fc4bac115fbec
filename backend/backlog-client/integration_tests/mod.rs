mod config;
mod helpers;
mod services;
mod transport;
