mod issue;
mod issue_filters;
mod issue_sort;
mod issue_status;
mod issue_update;
mod member;
mod priority_and_role;
mod timestamp;
