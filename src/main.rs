use anyhow::Context;
use clap::Parser;
use vending_machine::utils::error::ErrorSeverity;
use vending_machine::utils::{logger, validation::Validate};
use vending_machine::{CliConfig, CustomerSession, VendingError, VendingMachine};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting vending machine");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let machine = match cli.validate().and_then(|_| build_machine(&cli)) {
        Ok(machine) => machine,
        Err(e) => exit_with(e),
    };

    if cli.snapshot {
        let json = machine
            .snapshot_json()
            .context("failed to serialize machine snapshot")?;
        println!("{}", json);
        return Ok(());
    }

    let stdin = std::io::stdin();
    let mut session = CustomerSession::new(machine, stdin.lock(), std::io::stdout());
    session.run().context("customer session failed")?;

    tracing::info!("✅ Session finished");
    Ok(())
}

fn build_machine(cli: &CliConfig) -> vending_machine::Result<VendingMachine> {
    let config = cli.load_configuration()?;
    VendingMachine::new(&config)
}

fn exit_with(e: VendingError) -> ! {
    tracing::error!("❌ Vending machine could not start: {} (Severity: {:?})", e, e.severity());
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
