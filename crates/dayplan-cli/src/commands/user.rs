//! User commands - register, login, logout, and whoami
//!
//! Session state lives in the database, so login survives across
//! invocations. Login and registration failures print a short message
//! and exit cleanly; they are expected outcomes, not errors.

use anyhow::Result;
use clap::Args;
use tracing::info;

use crate::context::AppContext;
use crate::output::{get_formatter, OutputFormat};

#[derive(Debug, Args)]
pub struct RegisterCommand {
    /// User id to register (also the login name)
    user_id: String,

    /// Display name; defaults to the user id
    #[arg(long)]
    name: Option<String>,

    /// Login secret
    #[arg(long)]
    secret: String,
}

impl RegisterCommand {
    pub async fn execute(&self, ctx: &AppContext, format: OutputFormat) -> Result<()> {
        let fmt = get_formatter(format == OutputFormat::Json);
        let users = ctx.user_use_case();

        if users.exists(&self.user_id).await {
            fmt.error(&format!("User '{}' already exists", self.user_id));
            return Ok(());
        }

        let name = self.name.as_deref().unwrap_or(&self.user_id);
        if users.register(&self.user_id, name, &self.secret).await {
            info!(user_id = %self.user_id, "Registered user");
            fmt.success(&format!("Registered '{}'", self.user_id));
            fmt.info(&format!("Run 'dayplan login {}' to sign in", self.user_id));
        } else {
            fmt.error("Registration failed");
        }
        Ok(())
    }
}

#[derive(Debug, Args)]
pub struct LoginCommand {
    /// User id to sign in as
    user_id: String,

    /// Login secret
    #[arg(long)]
    secret: String,
}

impl LoginCommand {
    pub async fn execute(&self, ctx: &AppContext, format: OutputFormat) -> Result<()> {
        let fmt = get_formatter(format == OutputFormat::Json);
        let users = ctx.user_use_case();

        if !users.login(&self.user_id, &self.secret).await {
            fmt.error("Invalid user id or secret");
            return Ok(());
        }

        users.set_current_user(Some(&self.user_id)).await;
        info!(user_id = %self.user_id, "Logged in");
        fmt.success(&format!("Logged in as '{}'", self.user_id));
        Ok(())
    }
}

#[derive(Debug, Args)]
pub struct LogoutCommand {}

impl LogoutCommand {
    pub async fn execute(&self, ctx: &AppContext, format: OutputFormat) -> Result<()> {
        let fmt = get_formatter(format == OutputFormat::Json);
        let users = ctx.user_use_case();

        match users.current_user_id().await {
            Some(user_id) => {
                users.set_current_user(None).await;
                info!(user_id = %user_id, "Logged out");
                fmt.success(&format!("Logged out '{}'", user_id));
            }
            None => fmt.info("Not logged in. Nothing to do."),
        }
        Ok(())
    }
}

#[derive(Debug, Args)]
pub struct WhoamiCommand {}

impl WhoamiCommand {
    pub async fn execute(&self, ctx: &AppContext, format: OutputFormat) -> Result<()> {
        let fmt = get_formatter(format == OutputFormat::Json);
        let users = ctx.user_use_case();

        let user_id = match users.current_user_id().await {
            Some(id) => id,
            None => {
                fmt.info("Not logged in");
                return Ok(());
            }
        };

        match users.get_user(&user_id).await {
            Some(user) if format == OutputFormat::Json => {
                fmt.print_json(&serde_json::json!({
                    "user_id": user.id,
                    "name": user.name,
                }));
            }
            Some(user) => {
                fmt.success(&format!("{} ({})", user.name, user.id));
            }
            // Session entry points at a user row that no longer exists
            None => fmt.error(&format!("Logged in as '{}', but no such user", user_id)),
        }
        Ok(())
    }
}
