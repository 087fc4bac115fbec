pub mod activity;
pub mod attachment;
pub mod project;
pub mod user;
pub mod wiki;
