pub mod blogs;
pub mod clubs;
pub mod comments;
pub mod contact;
pub mod courses;
pub mod notes;
pub mod quizzes;
pub mod students;
pub mod teachers;
