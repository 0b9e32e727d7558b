//! Policy management commands

use clap::Subcommand;

use crate::config::{CompliancePolicy, TrustPaths};
use crate::error::{TrustError, TrustResult};

/// Policy subcommands
#[derive(Subcommand)]
pub enum PolicyCommands {
    /// Write the default policy file so it can be edited for your jurisdiction
    Init {
        /// Overwrite an existing policy file
        #[arg(long)]
        force: bool,
    },
    /// Show the active policy and where it was loaded from
    Show,
}

/// Handle a policy command
pub fn handle_policy_command(paths: &TrustPaths, cmd: PolicyCommands) -> TrustResult<()> {
    match cmd {
        PolicyCommands::Init { force } => {
            let policy_file = paths.policy_file();
            if policy_file.exists() && !force {
                return Err(TrustError::Policy(format!(
                    "{} already exists; pass --force to overwrite",
                    policy_file.display()
                )));
            }

            CompliancePolicy::default().save(paths)?;
            println!("Wrote default policy to {}", policy_file.display());
        }
        PolicyCommands::Show => {
            let policy = CompliancePolicy::load_or_default(paths)?;
            let policy_file = paths.policy_file();

            if policy_file.exists() {
                println!("Policy file: {}", policy_file.display());
            } else {
                println!(
                    "Policy file: {} (not present, using built-in defaults)",
                    policy_file.display()
                );
            }
            println!();
            println!("Prompt deposit hard limit:   {} hours", policy.prompt_deposit_hours);
            println!(
                "Prompt deposit guidance:     {} hours",
                policy.prompt_deposit_warning_hours
            );
            println!(
                "Reconciliation warning:      {} days",
                policy.reconciliation_warning_days
            );
            let methods: Vec<String> = policy
                .prohibited_withdrawal_methods
                .iter()
                .map(|m| m.to_string())
                .collect();
            println!("Prohibited withdrawal methods: {}", methods.join(", "));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_then_reinit_requires_force() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrustPaths::with_base_dir(temp_dir.path().to_path_buf());

        handle_policy_command(&paths, PolicyCommands::Init { force: false }).unwrap();
        assert!(paths.policy_file().exists());

        let err =
            handle_policy_command(&paths, PolicyCommands::Init { force: false }).unwrap_err();
        assert!(matches!(err, TrustError::Policy(_)));

        handle_policy_command(&paths, PolicyCommands::Init { force: true }).unwrap();
    }

    #[test]
    fn test_show_without_policy_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrustPaths::with_base_dir(temp_dir.path().to_path_buf());
        handle_policy_command(&paths, PolicyCommands::Show).unwrap();
    }
}
