pub mod json_content_repo;
