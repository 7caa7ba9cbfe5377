use std::sync::Arc;

use civicedge_app::{
    bus::AppBus,
    command_handlers::{
        dismiss_install_prompt::DismissInstallPromptCommandHandler, login::LoginCommandHandler,
        logout::LogoutCommandHandler, register_user::RegisterUserCommandHandler,
    },
    config::Config,
    connectivity::ConnectivityState,
    cqrs::{
        commands::{DismissInstallPrompt, Login, Logout, RegisterUser},
        queries::GetSession,
    },
    queries_handlers::GetSessionHandler,
    test_utils::tests::{MockHarness, user_factory},
};
use civicedge_types::{
    common::NewUser,
    errors::{AppError, ApplicationError},
};

fn bus_for(harness: &MockHarness) -> AppBus {
    AppBus::new(Arc::new(Config::for_tests()), harness.services.clone())
}

#[tokio::test]
async fn test_login_persists_session_and_directory_entry() {
    let harness = MockHarness::new(ConnectivityState::Online);
    harness
        .auth
        .add_account(user_factory("u1", "Ada Lovelace", "ada@example.com"), "pw1");

    let bus = bus_for(&harness);
    bus.execute(
        Login {
            email: "ada@example.com".to_string(),
            password: "pw1".to_string(),
        },
        LoginCommandHandler::new(),
    )
    .await
    .unwrap();

    let session = bus.query(GetSession, GetSessionHandler::new()).await.unwrap();
    assert_eq!(session.unwrap().full_name, "Ada Lovelace");

    let names = harness.services.directory.display_names().await.unwrap();
    assert_eq!(names["u1"], "Ada Lovelace");
}

#[tokio::test]
async fn test_wrong_credentials_leave_no_session() {
    let harness = MockHarness::new(ConnectivityState::Online);
    harness
        .auth
        .add_account(user_factory("u1", "Ada Lovelace", "ada@example.com"), "pw1");

    let bus = bus_for(&harness);
    let result = bus
        .execute(
            Login {
                email: "ada@example.com".to_string(),
                password: "wrong".to_string(),
            },
            LoginCommandHandler::new(),
        )
        .await;

    assert!(matches!(
        result,
        Err(ApplicationError::App(AppError::WrongAuthCredentials))
    ));

    let session = bus.query(GetSession, GetSessionHandler::new()).await.unwrap();
    assert!(session.is_none());
}

#[tokio::test]
async fn test_register_establishes_a_session() {
    let harness = MockHarness::new(ConnectivityState::Online);
    let bus = bus_for(&harness);

    bus.execute(
        RegisterUser {
            new_user: NewUser {
                full_name: "Grace Hopper".to_string(),
                email: "grace@example.com".to_string(),
                mobile_number: "5550101".to_string(),
                password: "pw2".to_string(),
            },
        },
        RegisterUserCommandHandler::new(),
    )
    .await
    .unwrap();

    let session = bus.query(GetSession, GetSessionHandler::new()).await.unwrap();
    let user = session.unwrap();
    assert_eq!(user.email, "grace@example.com");

    // Registration also lands in the directory for name resolution.
    let names = harness.services.directory.display_names().await.unwrap();
    assert_eq!(names[&user.id], "Grace Hopper");
}

#[tokio::test]
async fn test_logout_clears_the_session() {
    let harness = MockHarness::logged_in(
        ConnectivityState::Online,
        user_factory("u1", "Ada Lovelace", "ada@example.com"),
    );
    let bus = bus_for(&harness);

    bus.execute(Logout, LogoutCommandHandler::new()).await.unwrap();

    let session = bus.query(GetSession, GetSessionHandler::new()).await.unwrap();
    assert!(session.is_none());
}

#[tokio::test]
async fn test_install_prompt_dismissal_is_remembered() {
    let harness = MockHarness::new(ConnectivityState::Online);
    let bus = bus_for(&harness);

    assert!(
        !harness
            .services
            .session
            .install_prompt_dismissed()
            .await
            .unwrap()
    );

    bus.execute(DismissInstallPrompt, DismissInstallPromptCommandHandler::new())
        .await
        .unwrap();

    assert!(
        harness
            .services
            .session
            .install_prompt_dismissed()
            .await
            .unwrap()
    );
}
