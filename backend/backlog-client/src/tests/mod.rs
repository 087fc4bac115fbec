mod error;
mod options;
mod services;
