use anyhow::Result;
use clap::{Parser, Subcommand};

use trustcomply::cli::{
    handle_deposit_command, handle_policy_command, handle_scan_command,
    handle_withdrawal_command, DepositCommands, PolicyCommands, ScanArgs, WithdrawalCommands,
};
use trustcomply::config::{CompliancePolicy, TrustPaths};

#[derive(Parser)]
#[command(
    name = "trustcomply",
    version,
    about = "IOLTA trust-account compliance checker",
    long_about = "TrustComply checks attorney trust (IOLTA) and escrow account data \
                  against state-bar trust-accounting rules: the zero balance principle, \
                  prompt deposit timing, payment method prohibitions, account title \
                  wording, reconciliation schedules, and signatory requirements."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a portfolio of trust accounts for compliance issues
    Scan(ScanArgs),

    /// Deposit pre-check commands
    #[command(subcommand)]
    Deposit(DepositCommands),

    /// Withdrawal pre-check commands
    #[command(subcommand)]
    Withdrawal(WithdrawalCommands),

    /// Compliance policy management
    #[command(subcommand)]
    Policy(PolicyCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = TrustPaths::new()?;
    let policy = CompliancePolicy::load_or_default(&paths)?;

    match cli.command {
        Some(Commands::Scan(args)) => handle_scan_command(&policy, args)?,
        Some(Commands::Deposit(cmd)) => handle_deposit_command(&policy, cmd)?,
        Some(Commands::Withdrawal(cmd)) => handle_withdrawal_command(&policy, cmd)?,
        Some(Commands::Policy(cmd)) => handle_policy_command(&paths, cmd)?,
        Some(Commands::Config) => {
            println!("TrustComply Configuration");
            println!("=========================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Policy file:      {}", paths.policy_file().display());
            println!();
            println!("Active policy:");
            println!("  Prompt deposit hard limit: {}h", policy.prompt_deposit_hours);
            println!(
                "  Prompt deposit guidance:   {}h",
                policy.prompt_deposit_warning_hours
            );
            println!(
                "  Reconciliation warning:    {} days",
                policy.reconciliation_warning_days
            );
        }
        None => {
            println!("TrustComply - IOLTA trust-account compliance checker");
            println!();
            println!("Run 'trustcomply --help' for usage information.");
            println!("Run 'trustcomply scan accounts.json' to scan a portfolio.");
        }
    }

    Ok(())
}
