pub use scholaris_models::branches::{
    BRANCH_FILTER_FIELDS, Branch, CreateBranchDto, UpdateBranchDto,
};
