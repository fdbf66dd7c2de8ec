pub use scholaris_models::fees::{
    CreateFeeDto, CreateFeeTypeDto, FEE_FILTER_FIELDS, FEE_TYPE_FILTER_FIELDS, Fee, FeeType,
    UpdateFeeDto, UpdateFeeTypeDto,
};
