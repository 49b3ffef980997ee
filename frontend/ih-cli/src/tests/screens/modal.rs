use crate::screens::{Modal, ModalState, ProjectForm};

#[test]
fn test_modal_starts_closed() {
    let modal: Modal<ProjectForm> = Modal::default();

    assert_eq!(modal.state(), ModalState::Closed);
    assert!(modal.error().is_none());
}

#[test]
fn test_begin_submit_rejects_missing_fields() {
    let mut modal: Modal<ProjectForm> = Modal::default();
    modal.open();
    modal.form.name = "Demo".to_string();

    assert!(!modal.begin_submit());
    assert_eq!(modal.error(), Some("Project key is required"));
    assert!(modal.is_open());
}

#[test]
fn test_failure_keeps_values_and_success_resets() {
    let mut modal: Modal<ProjectForm> = Modal::default();
    modal.open();
    modal.form.name = "Demo".to_string();
    modal.form.set_key("demo");

    assert!(modal.begin_submit());
    modal.fail("Project key already exists".to_string());

    assert!(modal.is_open());
    assert_eq!(modal.form.name, "Demo");
    assert_eq!(modal.error(), Some("Project key already exists"));

    assert!(modal.begin_submit());
    assert!(modal.error().is_none());
    modal.succeed();

    assert_eq!(modal.state(), ModalState::Closed);
    assert!(modal.form.name.is_empty());
    assert!(modal.form.key().is_empty());
}

#[test]
fn test_close_keeps_values() {
    let mut modal: Modal<ProjectForm> = Modal::default();
    modal.open();
    modal.form.name = "Draft".to_string();

    modal.close();

    assert!(!modal.is_open());
    assert_eq!(modal.form.name, "Draft");
}
