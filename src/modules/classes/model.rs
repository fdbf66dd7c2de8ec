pub use scholaris_models::classes::{CLASS_FILTER_FIELDS, Class, CreateClassDto, UpdateClassDto};
