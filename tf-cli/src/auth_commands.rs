use crate::commands::to_value;
use crate::context::AppContext;

use tf_state::SessionViewModel;

use clap::Subcommand;
use serde_json::Value;

#[derive(Subcommand)]
pub enum AuthCommands {
    /// Sign in with email and password
    Login {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Create an account and sign in
    Register {
        #[arg(long)]
        username: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Remove the stored session
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Change your display name or avatar
    UpdateProfile {
        #[arg(long)]
        display_name: Option<String>,

        #[arg(long)]
        avatar_url: Option<String>,
    },
}

pub async fn run(action: AuthCommands, ctx: &AppContext) -> Result<Value, String> {
    let viewmodel =
        SessionViewModel::new(ctx.api.clone(), ctx.users.clone(), ctx.config.clone());

    match action {
        AuthCommands::Login { email, password } => viewmodel.login(email, password).await,
        AuthCommands::Register {
            username,
            email,
            password,
        } => viewmodel.register(username, email, password).await,
        AuthCommands::Logout => viewmodel.logout().await,
        AuthCommands::Whoami => viewmodel.load_current_user().await,
        AuthCommands::UpdateProfile {
            display_name,
            avatar_url,
        } => {
            viewmodel.load_current_user().await;
            viewmodel.update_profile(display_name, avatar_url).await;
        }
    }

    to_value(&viewmodel.state().await)
}
