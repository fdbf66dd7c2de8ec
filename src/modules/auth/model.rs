pub use scholaris_models::auth::{
    LoginRequest, LoginResponse, MessageResponse, RefreshRequest, RefreshResponse,
};
pub use scholaris_models::users::User;
