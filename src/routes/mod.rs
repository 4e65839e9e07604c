pub mod auth;

pub mod dashboard;

pub mod teachers;

pub mod course_requests;

pub use auth::configure_auth_routes;
pub use course_requests::configure_course_requests_routes;
pub use dashboard::configure_dashboard_routes;
pub use teachers::configure_teachers_routes;
