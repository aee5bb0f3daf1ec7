//! hostman CLI

use clap::{Parser, Subcommand};
use hostman_core::{Error, HostEntry, Severity, validate_entry};
use hostman_store::HostStore;
use std::path::PathBuf;

/// Manage SSH config hosts without disturbing the rest of the file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the SSH config file (defaults to ~/.ssh/config)
    #[arg(short, long, env = "HOSTMAN_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all hosts in declaration order
    List {
        /// Emit JSON instead of the human-readable table
        #[arg(long)]
        json: bool,
    },
    /// Show one host
    Show {
        name: String,
        #[arg(long)]
        json: bool,
    },
    /// Add a new host block at the end of the file
    Add {
        name: String,
        #[arg(long)]
        hostname: String,
        #[arg(long)]
        user: Option<String>,
        #[arg(long, default_value = "22")]
        port: String,
        #[arg(long)]
        identity_file: Option<String>,
        #[arg(long)]
        proxy_jump: Option<String>,
        /// Tag label, repeatable
        #[arg(long = "tag")]
        tags: Vec<String>,
    },
    /// Rewrite an existing host block with changed fields
    Edit {
        name: String,
        /// New host name
        #[arg(long)]
        rename: Option<String>,
        #[arg(long)]
        hostname: Option<String>,
        #[arg(long)]
        user: Option<String>,
        #[arg(long)]
        port: Option<String>,
        #[arg(long)]
        identity_file: Option<String>,
        #[arg(long)]
        proxy_jump: Option<String>,
        /// Replace the tag list, repeatable
        #[arg(long = "tag")]
        tags: Option<Vec<String>>,
    },
    /// Remove a host block
    Remove { name: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let store = match args.config {
        Some(path) => HostStore::new(path),
        None => HostStore::default_location()?,
    };

    match args.command {
        Command::List { json } => {
            let hosts = store.list_hosts().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&hosts)?);
            } else {
                for host in &hosts {
                    println!("{}", format_row(host));
                }
            }
        }
        Command::Show { name, json } => {
            let host = store.get_host(&name).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&host)?);
            } else {
                print_entry(&host);
            }
        }
        Command::Add {
            name,
            hostname,
            user,
            port,
            identity_file,
            proxy_jump,
            tags,
        } => {
            let mut entry = HostEntry::new(name, hostname).with_port(port).with_tags(tags);
            entry.user = user;
            entry.identity_file = identity_file;
            entry.proxy_jump = proxy_jump;

            check_fields(&entry)?;
            store.add_host(&entry).await?;
            println!("added '{}'", entry.name);
        }
        Command::Edit {
            name,
            rename,
            hostname,
            user,
            port,
            identity_file,
            proxy_jump,
            tags,
        } => {
            let mut entry = store.get_host(&name).await?;
            if let Some(new_name) = rename {
                entry.name = new_name;
            }
            if let Some(hostname) = hostname {
                entry.hostname = hostname;
            }
            if let Some(user) = user {
                entry.user = Some(user);
            }
            if let Some(port) = port {
                entry.port = port;
            }
            if let Some(identity_file) = identity_file {
                entry.identity_file = Some(identity_file);
            }
            if let Some(proxy_jump) = proxy_jump {
                entry.proxy_jump = Some(proxy_jump);
            }
            if let Some(tags) = tags {
                entry.tags = tags;
            }

            check_fields(&entry)?;
            store.update_host(&name, &entry).await?;
            println!("updated '{}'", entry.name);
        }
        Command::Remove { name } => {
            store.delete_host(&name).await?;
            println!("removed '{name}'");
        }
    }

    Ok(())
}

/// Run field validation; warnings go to stderr, errors abort.
fn check_fields(entry: &HostEntry) -> Result<(), Error> {
    let report = validate_entry(entry);
    for issue in report.issues_by_severity(Severity::Warning) {
        eprintln!("warning: {}: {}", issue.field, issue.message);
    }
    if report.has_failures() {
        let reasons: Vec<String> = report
            .issues_by_severity(Severity::Error)
            .iter()
            .map(|i| format!("{}: {}", i.field, i.message))
            .collect();
        return Err(Error::validation_error(reasons.join("; ")));
    }
    Ok(())
}

/// One-line summary for the list view.
fn format_row(host: &HostEntry) -> String {
    let mut target = String::new();
    if let Some(user) = host.user.as_deref() {
        target.push_str(user);
        target.push('@');
    }
    target.push_str(&host.hostname);
    if host.has_explicit_port() {
        target.push(':');
        target.push_str(&host.port);
    }

    if host.tags.is_empty() {
        format!("{:<24} {}", host.name, target)
    } else {
        format!("{:<24} {:<32} [{}]", host.name, target, host.tags.join(", "))
    }
}

/// Multi-line detail view for `show`.
fn print_entry(host: &HostEntry) {
    println!("Host {}", host.name);
    println!("  HostName      {}", host.hostname);
    if let Some(user) = host.user.as_deref() {
        println!("  User          {user}");
    }
    println!("  Port          {}", host.port);
    if let Some(identity) = host.identity_file.as_deref() {
        println!("  IdentityFile  {identity}");
    }
    if let Some(jump) = host.proxy_jump.as_deref() {
        println!("  ProxyJump     {jump}");
    }
    if !host.tags.is_empty() {
        println!("  Tags          {}", host.tags.join(", "));
    }
}
