pub mod comment;
pub mod issue;
pub mod issue_filters;
pub mod issue_priority;
pub mod issue_sort;
pub mod issue_status;
pub mod issue_update;
pub mod member;
pub mod project;
pub mod project_role;
pub mod timestamp;
pub mod user;
