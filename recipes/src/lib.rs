//! Shared recipe domain model for the recipe-notes web app.
//!
//! This crate owns everything the UI decides without a browser: the wire
//! records exchanged with the recipe API, credential validation, endpoint
//! paths, notifications and the fetch lifecycle of recipe lists. The `client`
//! crate renders these; nothing here touches the DOM or the network.

pub mod credentials;
pub mod endpoints;
pub mod error;
pub mod list;
pub mod notification;
pub mod recipe;

pub use credentials::{
    CredentialError, LoginForm, LoginRequest, LoginResponse, RegisterForm, RegisterRequest,
    RegisterResponse,
};
pub use endpoints::Endpoints;
pub use error::ApiError;
pub use list::{ListPhase, RecipeListState};
pub use notification::{Notification, NotificationKind};
pub use recipe::{Recipe, SaveRecipeRequest, SavedRecipeIds};
