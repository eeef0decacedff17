use utoipa::OpenApi;

use crate::modules::blogs::model::{Blog, BlogListResponse, BlogResponse, CreateBlogDto, UpdateBlogDto};
use crate::modules::clubs::model::{
    Club, ClubListResponse, ClubResponse, CreateClubDto, UpdateClubDto,
};
use crate::modules::comments::model::{
    Comment, CommentListResponse, CommentResponse, CreateCommentDto, UpdateCommentDto,
};
use crate::modules::contact::model::{
    ContactListResponse, ContactMessage, ContactResponse, CreateContactDto,
};
use crate::modules::courses::model::{
    Course, CourseListResponse, CourseResponse, CreateCourseDto, UpdateCourseDto,
};
use crate::modules::notes::model::{
    CreateNoteDto, Note, NoteListResponse, NoteResponse, UpdateNoteDto,
};
use crate::modules::quizzes::model::{
    CreateQuizDto, Quiz, QuizListResponse, QuizResponse, UpdateQuizDto,
};
use crate::modules::students::model::{
    CreateStudentDto, Student, StudentListResponse, StudentResponse, UpdateStudentDto,
};
use crate::modules::teachers::model::{
    CreateTeacherDto, Teacher, TeacherListResponse, TeacherResponse, TeacherSearchParams,
    UpdateTeacherDto,
};
use tutorbase_core::{ErrorResponse, MessageResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::teachers::controller::create_teacher,
        crate::modules::teachers::controller::get_all_teachers,
        crate::modules::teachers::controller::get_teacher,
        crate::modules::teachers::controller::update_teacher,
        crate::modules::teachers::controller::delete_teacher,
        crate::modules::teachers::controller::get_teachers_by_subject,
        crate::modules::teachers::controller::search_teachers,
        crate::modules::students::controller::create_student,
        crate::modules::students::controller::get_all_students,
        crate::modules::students::controller::get_student,
        crate::modules::students::controller::update_student,
        crate::modules::students::controller::delete_student,
        crate::modules::courses::controller::create_course,
        crate::modules::courses::controller::get_all_courses,
        crate::modules::courses::controller::get_course,
        crate::modules::courses::controller::update_course,
        crate::modules::courses::controller::delete_course,
        crate::modules::clubs::controller::create_club,
        crate::modules::clubs::controller::get_all_clubs,
        crate::modules::clubs::controller::get_club,
        crate::modules::clubs::controller::update_club,
        crate::modules::clubs::controller::delete_club,
        crate::modules::blogs::controller::create_blog,
        crate::modules::blogs::controller::get_all_blogs,
        crate::modules::blogs::controller::get_blog,
        crate::modules::blogs::controller::update_blog,
        crate::modules::blogs::controller::delete_blog,
        crate::modules::comments::controller::create_comment,
        crate::modules::comments::controller::get_all_comments,
        crate::modules::comments::controller::get_comments_by_blog,
        crate::modules::comments::controller::update_comment,
        crate::modules::comments::controller::delete_comment,
        crate::modules::notes::controller::create_note,
        crate::modules::notes::controller::get_all_notes,
        crate::modules::notes::controller::get_note,
        crate::modules::notes::controller::update_note,
        crate::modules::notes::controller::delete_note,
        crate::modules::quizzes::controller::create_quiz,
        crate::modules::quizzes::controller::get_all_quizzes,
        crate::modules::quizzes::controller::get_quiz,
        crate::modules::quizzes::controller::update_quiz,
        crate::modules::quizzes::controller::delete_quiz,
        crate::modules::contact::controller::create_message,
        crate::modules::contact::controller::get_all_messages,
        crate::modules::contact::controller::get_message,
        crate::modules::contact::controller::delete_message,
    ),
    components(
        schemas(
            Teacher,
            CreateTeacherDto,
            UpdateTeacherDto,
            TeacherSearchParams,
            TeacherResponse,
            TeacherListResponse,
            Student,
            CreateStudentDto,
            UpdateStudentDto,
            StudentResponse,
            StudentListResponse,
            Course,
            CreateCourseDto,
            UpdateCourseDto,
            CourseResponse,
            CourseListResponse,
            Club,
            CreateClubDto,
            UpdateClubDto,
            ClubResponse,
            ClubListResponse,
            Blog,
            CreateBlogDto,
            UpdateBlogDto,
            BlogResponse,
            BlogListResponse,
            Comment,
            CreateCommentDto,
            UpdateCommentDto,
            CommentResponse,
            CommentListResponse,
            Note,
            CreateNoteDto,
            UpdateNoteDto,
            NoteResponse,
            NoteListResponse,
            Quiz,
            CreateQuizDto,
            UpdateQuizDto,
            QuizResponse,
            QuizListResponse,
            ContactMessage,
            CreateContactDto,
            ContactResponse,
            ContactListResponse,
            MessageResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Teachers", description = "Teacher application endpoints"),
        (name = "Students", description = "Student enrollment endpoints"),
        (name = "Courses", description = "Course catalogue endpoints"),
        (name = "Clubs", description = "Extracurricular club endpoints"),
        (name = "Blogs", description = "Blog post endpoints"),
        (name = "Comments", description = "Blog comment endpoints"),
        (name = "Notes", description = "Study note endpoints"),
        (name = "Quizzes", description = "Quiz endpoints"),
        (name = "Contact", description = "Contact message endpoints"),
    ),
    info(
        title = "TutorBase API",
        description = "REST backend for the TutorBase tutoring platform"
    )
)]
pub struct ApiDoc;
