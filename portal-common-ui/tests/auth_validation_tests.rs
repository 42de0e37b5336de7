// Validation must short-circuit before any network call: these tests run
// against an unreachable API and still complete, because empty or
// mismatched fields never leave the client.

use portal_common::models::Role;
use portal_common_ui::commands::auth::AuthCommands;
use portal_common_ui::{ApiClient, CommandError, SessionStore};

fn unreachable_client() -> ApiClient {
    ApiClient::new("http://127.0.0.1:9/api").unwrap()
}

#[tokio::test]
async fn login_with_empty_fields_never_reaches_the_network() {
    let dir = tempfile::tempdir().unwrap();
    let store = SessionStore::with_path(dir.path().join("session.json"));
    let client = unreachable_client();

    let err = AuthCommands::login(&client, &store, Role::Aluno, "", "senha")
        .await
        .unwrap_err();
    assert!(matches!(err, CommandError::InvalidInput(_)));

    let err = AuthCommands::login(&client, &store, Role::Aluno, "a@b.com", "   ")
        .await
        .unwrap_err();
    assert!(matches!(err, CommandError::InvalidInput(_)));

    // Nothing was persisted.
    assert!(store.get().unwrap().is_none());
}

#[tokio::test]
async fn reset_with_mismatched_passwords_never_reaches_the_network() {
    let client = unreachable_client();

    let err = AuthCommands::reset_password(&client, Role::Aluno, "a@b.com", "nova", "outra")
        .await
        .unwrap_err();
    match err {
        CommandError::InvalidInput(msg) => {
            assert_eq!(msg, "A confirmação de senha não confere.")
        }
        other => panic!("expected InvalidInput, got {other:?}"),
    }
}

#[tokio::test]
async fn reset_with_missing_fields_never_reaches_the_network() {
    let client = unreachable_client();

    let err = AuthCommands::reset_password(&client, Role::Empresa, "", "x", "x")
        .await
        .unwrap_err();
    assert!(matches!(err, CommandError::InvalidInput(_)));
}
