//! Command definitions and execution for the `gridstore` binary.

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use gridstore_client::{RemoteStore, RestStore, StoreConfig};
use gridstore_query::{FilterNode, LoadOptions, Record, RecordKey, SortSpec};
use gridstore_validation::{RecordValidator, is_valid_email, is_valid_phone, is_valid_vat};
use serde_json::Value;
use std::io::Write;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "gridstore")]
#[command(about = "Query and edit a Django REST collection the way a data grid does")]
pub struct Cli {
    /// Collection endpoint, e.g. http://localhost:8000/api/contacts
    #[arg(long, env = "GRIDSTORE_URL", global = true)]
    pub url: Option<String>,

    /// Record attribute holding the primary key
    #[arg(long, default_value = StoreConfig::DEFAULT_KEY_FIELD, global = true)]
    pub key_field: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = StoreConfig::DEFAULT_TIMEOUT_SECS, global = true)]
    pub timeout: u64,

    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load one page of records
    Load(LoadArgs),

    /// Fetch a single record
    Get { key: RecordKey },

    /// Create a record from a JSON object
    Insert {
        values: String,
        /// Send without checking phone/email/VAT fields first
        #[arg(long)]
        no_validate: bool,
    },

    /// Partially update a record from a JSON object
    Update {
        key: RecordKey,
        values: String,
        /// Send without checking phone/email/VAT fields first
        #[arg(long)]
        no_validate: bool,
    },

    /// Delete a record
    Remove { key: RecordKey },

    /// Check values against the phone, email and VAT patterns
    Validate {
        #[arg(long)]
        phone: Vec<String>,
        #[arg(long)]
        email: Vec<String>,
        #[arg(long)]
        vat: Vec<String>,
    },
}

#[derive(Args, Debug, Default)]
pub struct LoadArgs {
    /// Page size
    #[arg(long)]
    pub take: Option<u64>,

    /// Offset of the first record
    #[arg(long)]
    pub skip: Option<u64>,

    /// Free-text search
    #[arg(long)]
    pub search: Option<String>,

    /// Sort order, e.g. "name,-age"
    #[arg(long, allow_hyphen_values = true)]
    pub sort: Option<String>,

    /// Filter tree as JSON, e.g. '[["age", ">", 30], "and", ["city", "=", "Rome"]]'
    #[arg(long)]
    pub filter: Option<String>,

    /// Full grid load request as JSON; the flags above override its fields
    #[arg(long)]
    pub request: Option<String>,
}

impl LoadArgs {
    pub fn to_options(&self) -> Result<LoadOptions> {
        let mut options = match &self.request {
            Some(raw) => {
                serde_json::from_str::<LoadOptions>(raw).context("Failed to parse --request")?
            }
            None => LoadOptions::default(),
        };

        if self.take.is_some() {
            options.take = self.take;
        }
        if self.skip.is_some() {
            options.skip = self.skip;
        }
        if let Some(search) = &self.search {
            options.search_value = Some(search.clone());
        }
        if let Some(sort) = &self.sort {
            options.sort = Some(SortSpec::parse_ordering(sort));
        }
        if let Some(raw) = &self.filter {
            let value: Value = serde_json::from_str(raw).context("Failed to parse --filter")?;
            options.filter =
                Some(FilterNode::try_from(value).context("Failed to read --filter")?);
        }

        Ok(options)
    }
}

impl Cli {
    /// Store configuration derived from the global flags.
    pub fn store_config(&self) -> Result<StoreConfig> {
        let url = self
            .url
            .as_deref()
            .context("No collection URL; pass --url or set GRIDSTORE_URL")?;

        Ok(StoreConfig::new(url)
            .with_key_field(self.key_field.as_str())
            .with_timeout_secs(self.timeout))
    }
}

/// Runs a parsed command, writing results to `out`.
///
/// Returns `false` when a `validate` check failed.
pub async fn run(cli: &Cli, out: &mut impl Write) -> Result<bool> {
    match &cli.command {
        Command::Load(args) => {
            let options = args.to_options()?;
            let result = open_store(cli)?.load(&options).await?;
            writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
        }
        Command::Get { key } => {
            let record = open_store(cli)?.by_key(key).await?;
            writeln!(out, "{}", serde_json::to_string_pretty(&record)?)?;
        }
        Command::Insert { values, no_validate } => {
            let record = parse_record(values, *no_validate)?;
            open_store(cli)?.insert(&record).await?;
            writeln!(out, "Inserted record")?;
        }
        Command::Update {
            key,
            values,
            no_validate,
        } => {
            let record = parse_record(values, *no_validate)?;
            open_store(cli)?.update(key, &record).await?;
            writeln!(out, "Updated record {key}")?;
        }
        Command::Remove { key } => {
            open_store(cli)?.remove(key).await?;
            writeln!(out, "Removed record {key}")?;
        }
        Command::Validate { phone, email, vat } => {
            return validate_values(phone, email, vat, out);
        }
    }

    Ok(true)
}

fn open_store(cli: &Cli) -> Result<RestStore> {
    let store = RestStore::with_config(cli.store_config()?)?;
    debug!("Using collection {}", store.collection_url());
    Ok(store)
}

fn parse_record(raw: &str, no_validate: bool) -> Result<Record> {
    let value = serde_json::from_str::<Value>(raw).context("Failed to parse record JSON")?;
    let record = match value {
        Value::Object(record) => record,
        other => bail!("Record must be a JSON object, got {other}"),
    };

    if !no_validate && let Err(errors) = RecordValidator::contact().validate(&record) {
        bail!("Refusing to send invalid record: {errors}");
    }

    Ok(record)
}

fn validate_values(
    phones: &[String],
    emails: &[String],
    vats: &[String],
    out: &mut impl Write,
) -> Result<bool> {
    let checks: [(&str, &[String], fn(&str) -> bool); 3] = [
        ("phone", phones, is_valid_phone),
        ("email", emails, is_valid_email),
        ("vat", vats, is_valid_vat),
    ];

    let mut all_valid = true;
    for (kind, values, check) in checks {
        for value in values {
            let valid = check(value);
            all_valid &= valid;
            writeln!(out, "{kind} {value:?}: {}", if valid { "ok" } else { "invalid" })?;
        }
    }

    Ok(all_valid)
}
