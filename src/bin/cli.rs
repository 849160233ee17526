//! lirc-client CLI
//!
//! Command-line interface for a LIRC daemon, in the spirit of `irsend`.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use lirc_client::config::{DEFAULT_HOST, DEFAULT_PORT, DEFAULT_TIMEOUT_MS};
use lirc_client::{Config, ErrorKind, LircClient, LircError, Result};
use tracing_subscriber::{fmt, EnvFilter};

const EXIT_USAGE: u8 = 1;
const EXIT_SERVER: u8 = 2;
const EXIT_PROTOCOL: u8 = 3;
const EXIT_CONNECTION: u8 = 4;

/// lirc-client CLI
#[derive(Parser, Debug)]
#[command(name = "lirc-client")]
#[command(about = "Send IR commands to and query a LIRC daemon")]
#[command(version)]
struct Args {
    /// Host name or address of the daemon
    #[arg(short, long, default_value = DEFAULT_HOST)]
    address: String,

    /// TCP port of the daemon
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Path of the daemon's Unix socket (used instead of TCP)
    #[arg(short, long)]
    device: Option<PathBuf>,

    /// Timeout in milliseconds
    #[arg(short, long, default_value_t = DEFAULT_TIMEOUT_MS)]
    timeout: u64,

    /// Log the protocol exchange to stderr
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Send one or more commands of a remote
    Send {
        /// Number of times to send each command
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        count: u32,

        /// The remote
        remote: String,

        /// The commands to send, in order
        #[arg(required = true)]
        commands: Vec<String>,
    },

    /// Start sending a command until stopped
    Start {
        remote: String,
        command: String,
    },

    /// Stop a repeat-send (the last one started if no arguments are given)
    Stop {
        #[arg(requires = "command")]
        remote: Option<String>,
        command: Option<String>,
    },

    /// List the remotes known to the daemon
    Remotes,

    /// List the commands of a remote
    Commands {
        remote: String,
    },

    /// Enable the given transmitters (numbered from 1)
    Transmitters {
        #[arg(required = true)]
        transmitters: Vec<u32>,
    },

    /// Print the daemon's version
    Version,

    /// Log received input to a file, or stop logging if no path is given
    InputLog {
        path: Option<String>,
    },

    /// Set a driver option
    DriverOption {
        key: String,
        value: String,
    },

    /// Fake reception of a button press
    Simulate {
        /// Scan code (hex)
        #[arg(value_parser = parse_hex_u64)]
        code: u64,

        /// Repeat counter (hex)
        #[arg(value_parser = parse_hex_u8)]
        repeat: u8,

        button: String,
        remote: String,
    },
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(EXIT_USAGE)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    // Initialize tracing/logging
    let default_filter = if args.verbose {
        "warn,lirc_client=trace"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    // Build config from args
    let mut builder = Config::builder()
        .host(&args.address)
        .port(args.port)
        .timeout_ms(args.timeout);
    if let Some(device) = &args.device {
        builder = builder.socket_path(device);
    }
    let config = builder.build();

    match execute(&config, &args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("lirc-client: {}", e);
            ExitCode::from(exit_code(&e))
        }
    }
}

/// Connect, run one subcommand, and always release the connection
fn execute(config: &Config, command: &Commands) -> Result<()> {
    let mut client = LircClient::connect(config)?;
    let result = run(&mut client, command);
    let closed = client.close();
    result?;
    closed
}

fn run(client: &mut LircClient, command: &Commands) -> Result<()> {
    match command {
        Commands::Send {
            count,
            remote,
            commands,
        } => {
            for command in commands {
                client.send_command(remote, command, *count)?;
            }
        }
        Commands::Start { remote, command } => client.send_command_repeat(remote, command)?,
        Commands::Stop { remote, command } => match (remote, command) {
            (Some(remote), Some(command)) => client.stop_repeat(remote, command)?,
            // The daemon only remembers per connection, so this needs a
            // start earlier on the same client
            _ => client.stop_last_repeat()?,
        },
        Commands::Remotes => print_lines(client.list_remotes()?),
        Commands::Commands { remote } => print_lines(client.list_commands(remote)?),
        Commands::Transmitters { transmitters } => client.set_transmitters(transmitters)?,
        Commands::Version => println!("{}", client.version()?),
        Commands::InputLog { path } => client.set_input_log(path.as_deref())?,
        Commands::DriverOption { key, value } => client.set_driver_option(key, value)?,
        Commands::Simulate {
            code,
            repeat,
            button,
            remote,
        } => client.simulate(*code, *repeat, button, remote)?,
    }
    Ok(())
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{}", line);
    }
}

fn exit_code(error: &LircError) -> u8 {
    match error.kind() {
        ErrorKind::InvalidArgument => EXIT_USAGE,
        ErrorKind::Server => EXIT_SERVER,
        ErrorKind::Protocol => EXIT_PROTOCOL,
        ErrorKind::Connection => EXIT_CONNECTION,
    }
}

fn parse_hex_u64(s: &str) -> std::result::Result<u64, String> {
    let digits = s.trim_start_matches("0x").trim_start_matches("0X");
    u64::from_str_radix(digits, 16).map_err(|e| format!("`{}` is not a hex number: {}", s, e))
}

fn parse_hex_u8(s: &str) -> std::result::Result<u8, String> {
    let value = parse_hex_u64(s)?;
    u8::try_from(value).map_err(|_| format!("`{}` does not fit in two hex digits", s))
}
