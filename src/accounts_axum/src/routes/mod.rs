pub mod current_user;
pub mod get_user;
pub mod login;
pub mod register;
pub mod update_user;

use std::sync::Arc;

use accounts_application::AccountService;
use accounts_core::{PasswordHasher, SessionTokenIssuer, UserStore};
use axum::{
    Router,
    routing::{get, post},
};

pub use current_user::current_user;
pub use get_user::get_user;
pub use login::{LoginBody, login};
pub use register::{RegisterBody, register};
pub use update_user::{UpdateUserBody, update_user};

/// Account routes relative to the API prefix. `/user` wins over `/{uuid}`.
pub fn router<U, H, T>(service: Arc<AccountService<U, H, T>>) -> Router
where
    U: UserStore + 'static,
    H: PasswordHasher + 'static,
    T: SessionTokenIssuer + 'static,
{
    Router::new()
        .route("/login", post(login::<U, H, T>))
        .route("/register", post(register::<U, H, T>))
        .route("/user", get(current_user::<U, H, T>))
        .route(
            "/{uuid}",
            get(get_user::<U, H, T>).put(update_user::<U, H, T>),
        )
        .with_state(service)
}
