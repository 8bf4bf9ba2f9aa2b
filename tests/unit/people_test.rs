//! Pairs centred on people: auth, forms, students, accounts

use duet::adapters::{
    EMAIL_ERROR, InMemoryEmailService, InMemoryGradeBook, InMemoryUserRepository, PASSWORD_ERROR,
    RuleValidator, WELCOME_MESSAGE,
};
use duet::core::models::{Role, User};
use duet::core::ports::{EmailService, GradeBook};
use duet::core::services::{AuthService, FormHandler, StudentRegistry, UserManager};

use crate::common::assert_close;

// =============================================================================
// AUTH
// =============================================================================

#[test]
fn test_login_updates_last_login() {
    let mut auth = AuthService::new(InMemoryUserRepository::seeded());

    assert!(auth.login("alice", "pass123"));
    assert!(auth.is_logged_in("alice"));

    let today = chrono::Local::now().format("%Y-%m-%d").to_string();
    let alice = auth.repository().user("alice").unwrap();
    assert_eq!(alice.last_login.as_deref(), Some(today.as_str()));
    assert_eq!(alice.role, Role::Admin);
}

#[test]
fn test_wrong_password_leaves_user_untouched() {
    let mut auth = AuthService::new(InMemoryUserRepository::seeded());

    assert!(!auth.login("bob", "pass123"));
    assert!(!auth.is_logged_in("bob"));
    assert_eq!(auth.repository().user("bob").unwrap().last_login, None);
}

#[test]
fn test_unknown_user_cannot_log_in() {
    let mut auth = AuthService::new(InMemoryUserRepository::seeded());
    assert!(!auth.login("mallory", "pass123"));
    assert!(auth.logged_in_users().is_empty());
}

#[test]
fn test_repeated_logins_are_all_recorded() {
    let mut auth = AuthService::new(InMemoryUserRepository::seeded());
    auth.repository_mut()
        .insert("carol", User::new("secret", Role::User));

    assert!(auth.login("bob", "pass456"));
    assert!(auth.login("carol", "secret"));
    assert!(auth.login("bob", "pass456"));
    assert_eq!(auth.logged_in_users(), ["bob", "carol", "bob"]);
}

// =============================================================================
// FORMS
// =============================================================================

#[test]
fn test_valid_form_is_stored() {
    let mut handler = FormHandler::new(RuleValidator::new());

    let outcome = handler.submit_form("user@example.com", "longenough");
    assert!(outcome.success);
    assert!(outcome.errors.is_empty());

    let data = handler.submitted_data().unwrap();
    assert_eq!(data.email, "user@example.com");
    assert_eq!(data.password, "longenough");
}

#[test]
fn test_bad_email_reports_only_email_error() {
    let mut handler = FormHandler::new(RuleValidator::new());

    let outcome = handler.submit_form("not-an-email", "longenough");
    assert!(!outcome.success);
    assert_eq!(outcome.errors, vec![EMAIL_ERROR]);
    assert!(handler.submitted_data().is_none());
}

#[test]
fn test_short_password_reports_password_error() {
    let mut handler = FormHandler::new(RuleValidator::new());

    let outcome = handler.submit_form("user@example.com", "short");
    assert_eq!(outcome.errors, vec![PASSWORD_ERROR]);
}

#[test]
fn test_rejected_form_keeps_previous_submission() {
    let mut handler = FormHandler::new(RuleValidator::new());
    handler.submit_form("first@example.com", "password1");
    handler.submit_form("", "");

    assert_eq!(handler.submitted_data().unwrap().email, "first@example.com");
}

// =============================================================================
// STUDENTS
// =============================================================================

#[test]
fn test_grades_for_registered_student() {
    let mut registry = StudentRegistry::new(InMemoryGradeBook::new());

    assert!(registry.register_student("s1", "Ada"));
    assert!(registry.add_course_grade("s1", "math", 90.0));
    assert!(registry.add_course_grade("s1", "physics", 80.0));

    assert_close(registry.grade_book().get_average("s1").unwrap(), 85.0);
    assert_eq!(registry.student_name("s1"), Some("Ada"));
}

#[test]
fn test_grade_for_unknown_student_is_dropped() {
    let mut registry = StudentRegistry::new(InMemoryGradeBook::new());

    assert!(!registry.add_course_grade("ghost", "math", 100.0));
    assert_eq!(registry.grade_book().get_average("ghost"), None);
}

#[test]
fn test_duplicate_registration_is_refused() {
    let mut registry = StudentRegistry::new(InMemoryGradeBook::new());

    assert!(registry.register_student("s1", "Ada"));
    assert!(!registry.register_student("s1", "Grace"));
    assert_eq!(registry.student_name("s1"), Some("Ada"));
}

#[test]
fn test_regrading_a_course_replaces_the_grade() {
    let mut registry = StudentRegistry::new(InMemoryGradeBook::new());
    registry.register_student("s1", "Ada");
    registry.add_course_grade("s1", "math", 50.0);
    registry.add_course_grade("s1", "math", 70.0);

    assert_eq!(registry.grade_book().grade("s1", "math"), Some(70.0));
    assert_close(registry.grade_book().get_average("s1").unwrap(), 70.0);
}

// =============================================================================
// ACCOUNTS
// =============================================================================

#[test]
fn test_new_user_gets_welcome_email() {
    let mut manager = UserManager::new(InMemoryEmailService::new());

    assert!(manager.create_user("u1", "u1@example.com"));

    let sent = manager.email_service().sent_emails();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "u1@example.com");
    assert_eq!(sent[0].message, WELCOME_MESSAGE);
    assert_eq!(manager.email_of("u1"), Some("u1@example.com"));
}

#[test]
fn test_duplicate_user_sends_nothing() {
    let mut manager = UserManager::new(InMemoryEmailService::new());

    manager.create_user("u1", "u1@example.com");
    assert!(!manager.create_user("u1", "other@example.com"));
    assert_eq!(manager.email_service().get_sent_count(), 1);
    assert_eq!(manager.email_of("u1"), Some("u1@example.com"));
}
