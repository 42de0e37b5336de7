use crate::{ApiClient, CommandError, CommandResult, SessionStore};
use portal_common::models::{Role, Session};
use portal_common::Error;
use tracing::error;

pub struct AuthCommands;

impl AuthCommands {
    /// Validation runs before any network call; an empty field means the
    /// request is never sent.
    pub fn validate_login(email: &str, senha: &str) -> Result<(), CommandError> {
        if email.trim().is_empty() || senha.trim().is_empty() {
            return Err(CommandError::InvalidInput(
                "Preencha e-mail e senha.".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_reset(
        email: &str,
        nova_senha: &str,
        confirma_senha: &str,
    ) -> Result<(), CommandError> {
        if email.trim().is_empty() || nova_senha.is_empty() || confirma_senha.is_empty() {
            return Err(CommandError::InvalidInput(
                "Preencha todos os campos.".to_string(),
            ));
        }
        if nova_senha != confirma_senha {
            return Err(CommandError::InvalidInput(
                "A confirmação de senha não confere.".to_string(),
            ));
        }
        Ok(())
    }

    /// Posts credentials and persists the server's session object verbatim.
    /// A rejected login surfaces only the generic invalid-credentials
    /// message; the server's detail is logged, never shown. Routing is the
    /// caller's job and must follow the returned session's role, not the
    /// submitted one.
    pub async fn login(
        client: &ApiClient,
        store: &SessionStore,
        role: Role,
        email: &str,
        senha: &str,
    ) -> Result<CommandResult<Session>, CommandError> {
        Self::validate_login(email, senha)?;

        let session = match client.login(role, email.trim(), senha.trim()).await {
            Ok(session) => session,
            Err(Error::Api { status, body }) => {
                error!("login rejected: HTTP {status} => {body}");
                return Err(CommandError::ApiError(
                    "E-mail ou senha inválidos.".to_string(),
                ));
            }
            Err(e) => {
                error!("login request failed: {e}");
                return Err(CommandError::HttpError(
                    "Erro ao fazer login.".to_string(),
                ));
            }
        };

        store
            .set(&session)
            .map_err(|e| CommandError::DataError(e.to_string()))?;

        Ok(CommandResult::new(session))
    }

    /// Posts a password reset. Failures show a generic message; the server's
    /// error detail is only logged.
    pub async fn reset_password(
        client: &ApiClient,
        role: Role,
        email: &str,
        nova_senha: &str,
        confirma_senha: &str,
    ) -> Result<CommandResult<()>, CommandError> {
        Self::validate_reset(email, nova_senha, confirma_senha)?;

        match client.reset_password(role, email.trim(), nova_senha).await {
            Ok(()) => Ok(CommandResult::new(())),
            Err(Error::Api { status, body }) => {
                error!("password reset rejected: HTTP {status} => {body}");
                Err(CommandError::ApiError(
                    "Não foi possível redefinir a senha. Verifique o e-mail e o tipo de usuário."
                        .to_string(),
                ))
            }
            Err(e) => {
                error!("password reset request failed: {e}");
                Err(CommandError::HttpError(
                    "Erro ao conectar com o servidor. Tente novamente mais tarde.".to_string(),
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_validation_rejects_empty_fields() {
        assert!(AuthCommands::validate_login("", "x").is_err());
        assert!(AuthCommands::validate_login("a@b.com", "").is_err());
        assert!(AuthCommands::validate_login("  ", "senha").is_err());
        assert!(AuthCommands::validate_login("a@b.com", "senha").is_ok());
    }

    #[test]
    fn reset_validation_requires_all_fields_and_matching_passwords() {
        assert!(AuthCommands::validate_reset("", "x", "x").is_err());
        assert!(AuthCommands::validate_reset("a@b.com", "", "x").is_err());
        assert!(AuthCommands::validate_reset("a@b.com", "x", "").is_err());
        assert!(AuthCommands::validate_reset("a@b.com", "nova", "outra").is_err());
        assert!(AuthCommands::validate_reset("a@b.com", "nova", "nova").is_ok());
    }
}
