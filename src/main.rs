use anyhow::Context;
use clap::Parser;
use std::path::Path;

mod options {
    use std::path::PathBuf;

    #[derive(Debug, clap::Parser)]
    #[clap(
        name = "accountant-import",
        about = "Convert supplier and invoice CSV files into the accounting application's JSON import format"
    )]
    pub struct Args {
        /// The CSV file listing suppliers, one per row.
        #[clap(long, short = 's')]
        pub suppliers: PathBuf,
        /// The CSV file listing invoices, each of which becomes an expense.
        ///
        /// Suppliers named here but missing in the supplier file are added without details.
        #[clap(long, short = 'i')]
        pub invoices: PathBuf,
        /// The path to write the JSON document to.
        #[clap(long, short = 'o')]
        pub out: PathBuf,
        /// A RON file overriding the accepted column names of some fields.
        #[clap(long, short = 'a')]
        pub aliases: Option<PathBuf>,
        /// Log more, repeat for even more.
        #[clap(long, short = 'v', action = clap::ArgAction::Count)]
        pub verbose: u8,
    }
}

fn main() -> anyhow::Result<()> {
    let args = options::Args::parse();
    init_logging(args.verbose);

    let aliases = args
        .aliases
        .as_deref()
        .map(|path| {
            log::info!("Loading column aliases from '{}'", path.display());
            accountant_import::Aliases::from_path(path)
                .with_context(|| format!("Could not load aliases from '{}'", path.display()))
        })
        .transpose()?
        .unwrap_or_default();

    let mut document = Vec::new();
    let outcome = accountant_import::convert(
        read(&args.suppliers)?,
        read(&args.invoices)?,
        &mut document,
        accountant_import::convert::Options { aliases },
    )
    .context("Could not convert the supplier and invoice tables")?;
    std::fs::write(&args.out, document)
        .with_context(|| format!("Could not write document to '{}'", args.out.display()))?;

    println!("Wrote {}", args.out.display());
    println!("Suppliers: {}", outcome.suppliers);
    println!("Expenses: {}", outcome.expenses);
    Ok(())
}

fn read(path: &Path) -> anyhow::Result<impl std::io::Read> {
    std::fs::read(path)
        .map(std::io::Cursor::new)
        .with_context(|| format!("Could not read from CSV file at '{}'", path.display()))
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}
