pub use scholaris_models::sections::{
    CreateSectionDto, SECTION_FILTER_FIELDS, Section, UpdateSectionDto,
};
