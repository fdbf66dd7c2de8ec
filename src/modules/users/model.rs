pub use scholaris_models::users::{
    CreateUserDto, USER_FILTER_FIELDS, UpdateUserDto, User, UserWithPassword,
};
