use crate::commands::to_value;
use crate::context::AppContext;

use tf_state::MembersViewModel;

use clap::Subcommand;
use serde_json::Value;
use uuid::Uuid;

#[derive(Subcommand)]
pub enum MemberCommands {
    /// List members and outstanding invitations of a workspace
    List {
        /// Workspace ID (UUID)
        workspace_id: Uuid,

        /// Read the local cache only, skip the network
        #[arg(long)]
        cached: bool,
    },

    /// List invitations addressed to you
    Inbox,

    /// Add an existing user to a workspace directly
    Add {
        #[arg(long)]
        workspace_id: Uuid,

        #[arg(long)]
        user_id: Uuid,
    },

    /// Invite a user into a workspace by email
    Invite {
        #[arg(long)]
        workspace_id: Uuid,

        #[arg(long)]
        email: String,
    },

    /// Accept an invitation addressed to you
    Accept {
        /// Invitation ID (UUID)
        id: Uuid,
    },

    /// Decline an invitation addressed to you
    Decline {
        /// Invitation ID (UUID)
        id: Uuid,
    },

    /// Withdraw an invitation you sent
    Withdraw {
        /// Invitation ID (UUID)
        id: Uuid,

        #[arg(long)]
        workspace_id: Uuid,
    },

    /// Remove a member from a workspace
    Remove {
        #[arg(long)]
        workspace_id: Uuid,

        #[arg(long)]
        user_id: Uuid,
    },
}

pub async fn run(action: MemberCommands, ctx: &AppContext) -> Result<Value, String> {
    let viewmodel = MembersViewModel::new(ctx.workspaces.clone(), ctx.invitations.clone());

    match action {
        MemberCommands::List {
            workspace_id,
            cached: true,
        } => viewmodel.load_cached(workspace_id).await,
        MemberCommands::List {
            workspace_id,
            cached: false,
        } => viewmodel.refresh(workspace_id).await,
        MemberCommands::Inbox => viewmodel.load_inbox().await,
        MemberCommands::Add {
            workspace_id,
            user_id,
        } => viewmodel.add_member(workspace_id, user_id).await,
        MemberCommands::Invite {
            workspace_id,
            email,
        } => viewmodel.invite(workspace_id, email).await,
        MemberCommands::Accept { id } => viewmodel.accept_invitation(id).await,
        MemberCommands::Decline { id } => viewmodel.decline_invitation(id).await,
        MemberCommands::Withdraw { id, workspace_id } => {
            viewmodel.load_cached(workspace_id).await;
            viewmodel.withdraw_invitation(id).await;
        }
        MemberCommands::Remove {
            workspace_id,
            user_id,
        } => viewmodel.remove_member(workspace_id, user_id).await,
    }

    to_value(&viewmodel.state().await)
}
