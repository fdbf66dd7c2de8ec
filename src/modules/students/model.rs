pub use scholaris_models::students::{
    CreateStudentDto, STUDENT_FILTER_FIELDS, Student, UpdateStudentDto,
};
