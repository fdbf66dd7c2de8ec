pub use scholaris_models::roles::{
    CreateRoleDto, CreateRoleGroupDto, ROLE_FILTER_FIELDS, ROLE_GROUP_FILTER_FIELDS, Role,
    RoleGroup, UpdateRoleDto, UpdateRoleGroupDto, generate_slug,
};
