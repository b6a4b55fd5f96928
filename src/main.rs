use cashpoint::application::workflow::ReservationWorkflow;
use cashpoint::domain::ports::{AtmDirectoryBox, ReservationStore, ReservationStoreBox};
use cashpoint::error::ReservationError;
use cashpoint::infrastructure::in_memory::{InMemoryDirectory, InMemoryLedger};
use cashpoint::infrastructure::random_token::RandomTokenGenerator;
use cashpoint::infrastructure::static_pin::StaticPinVerifier;
use cashpoint::interfaces::csv::directory_reader::DirectoryReader;
use cashpoint::interfaces::csv::intent_reader::{Intent, IntentReader};
use cashpoint::interfaces::csv::ledger_writer::{LedgerWriter, render_json};
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Intent script CSV file
    script: PathBuf,

    /// ATM directory CSV file. Defaults to the built-in directory.
    #[arg(long)]
    directory: Option<PathBuf>,

    /// Shared secret checked by the PIN gate.
    #[arg(long, default_value = "0000")]
    pin: String,

    /// Render the final ledger as JSON instead of CSV.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let directory: AtmDirectoryBox = if let Some(path) = &cli.directory {
        let file = File::open(path).into_diagnostic()?;
        let records = DirectoryReader::new(file)
            .records()
            .collect::<Result<Vec<_>, _>>()
            .into_diagnostic()?;
        Box::new(InMemoryDirectory::new(records))
    } else {
        Box::new(InMemoryDirectory::builtin())
    };

    let mut workflow = ReservationWorkflow::new(
        directory,
        Box::new(StaticPinVerifier::new(cli.pin)),
        Box::new(RandomTokenGenerator::new()),
    );
    let mut ledger: ReservationStoreBox = Box::new(InMemoryLedger::new());

    // Stream the script through the workflow. A rejected intent is reported
    // and the session continues, like a user correcting a form field.
    let file = File::open(&cli.script).into_diagnostic()?;
    for intent_result in IntentReader::new(file).intents() {
        match intent_result {
            Ok(intent) => {
                if let Err(e) = apply_intent(&mut workflow, ledger.as_mut(), intent) {
                    eprintln!("Error processing intent: {e}");
                }
            }
            Err(e) => {
                eprintln!("Error reading intent: {e}");
            }
        }
    }

    let reservations = ledger.list();
    if cli.json {
        println!("{}", render_json(&reservations).into_diagnostic()?);
    } else {
        let stdout = io::stdout();
        let mut writer = LedgerWriter::new(stdout.lock());
        writer.write_reservations(&reservations).into_diagnostic()?;
    }

    Ok(())
}

fn apply_intent(
    workflow: &mut ReservationWorkflow,
    ledger: &mut dyn ReservationStore,
    intent: Intent,
) -> Result<(), ReservationError> {
    match intent {
        Intent::Select(id) => workflow.select_atm(&id),
        Intent::Amount(text) => workflow.set_amount(text),
        Intent::Date(date) => workflow.set_date(date),
        Intent::Denomination {
            denomination,
            delta,
        } => workflow.adjust_denomination(denomination, delta),
        Intent::Submit => workflow.submit_details(),
        // The confirmed reservation is handed off to the ledger by value.
        Intent::Pin(pin) => workflow
            .submit_pin(&pin)
            .map(|reservation| ledger.append(reservation)),
        Intent::Cancel => workflow.cancel_pin(),
        Intent::Remove(index) => ledger.remove_at(index).map(|_| ()),
    }
}
