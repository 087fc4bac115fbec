//! Backlog resource models.
//!
//! Plain serde data returned by the Backlog REST API. Models have no
//! behavior: the client crate decodes response bodies into them and hands
//! them to the caller.
//!
//! Field names follow Rust conventions; the wire names are camelCase and are
//! mapped with `#[serde(rename_all = "camelCase")]`. Fields the API may omit
//! are `Option` or `#[serde(default)]` so older spaces still decode.

pub mod resources;

pub use resources::activity::Activity;
pub use resources::attachment::Attachment;
pub use resources::project::Project;
pub use resources::user::User;
pub use resources::wiki::{Tag, Wiki, WikiCount};
