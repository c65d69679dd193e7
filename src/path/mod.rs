mod screen;

pub use screen::check_request_path;
