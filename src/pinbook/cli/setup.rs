use clap::{ArgAction, CommandFactory, Parser, Subcommand};

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(
    name = "pinbook",
    bin_name = "pinbook",
    version = get_version(),
    disable_help_flag = true,
    disable_help_subcommand = true
)]
#[command(about = "Keep and share your PINs and card numbers offline", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (repeat for more)
    #[arg(short, long, global = true, action = ArgAction::Count, help_heading = "Options")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose", help_heading = "Options")]
    pub quiet: bool,

    /// Print help
    #[arg(short, long, global = true)]
    pub help: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Core,
    Record,
    Misc,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Core => "Core Commands:",
            CommandGroup::Record => "Per-Record Commands:",
            CommandGroup::Misc => "Miscellaneous:",
        }
    }

    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "add" | "list" | "format" => Some(CommandGroup::Core),
            "view" | "edit" | "delete" | "share" => Some(CommandGroup::Record),
            "config" | "init" | "help" => Some(CommandGroup::Misc),
            _ => None,
        }
    }

    pub fn all() -> &'static [CommandGroup] {
        &[CommandGroup::Core, CommandGroup::Record, CommandGroup::Misc]
    }
}

pub fn get_grouped_help() -> String {
    let cmd = Cli::command();
    let version = cmd.get_version().unwrap_or("unknown");

    let mut output = String::new();
    output.push_str(&format!("pinbook {version}\n"));
    output.push_str("Keep and share your PINs and card numbers offline\n");
    output.push('\n');
    output.push_str("Usage: pinbook [OPTIONS] [COMMAND]\n");

    let subcommands: Vec<_> = cmd.get_subcommands().collect();

    for group in CommandGroup::all() {
        let group_cmds: Vec<_> = subcommands
            .iter()
            .filter(|sc| {
                !sc.is_hide_set() && CommandGroup::for_command(sc.get_name()) == Some(*group)
            })
            .collect();

        if !group_cmds.is_empty() {
            output.push('\n');
            output.push_str(&format!("{}\n", group.heading()));
            for sc in group_cmds {
                let name = sc.get_name();
                let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
                output.push_str(&format!("  {:<12} {}\n", name, about));
            }
        }
    }

    output.push('\n');
    output.push_str("Options:\n");
    output.push_str("  -v, --verbose    Verbose output (repeat for more)\n");
    output.push_str("  -q, --quiet      Only log errors\n");
    output.push_str("  -h, --help       Print help\n");
    output.push_str("  -V, --version    Print version\n");
    output.push('\n');
    output.push_str("Records are kept in $PINBOOK_DATA, or the OS data directory when unset.\n");

    output
}

pub fn print_grouped_help() {
    print!("{}", get_grouped_help());
}

pub fn print_subcommand_help(command: &Option<Commands>) {
    let name = match command {
        Some(Commands::Core(c)) => match c {
            CoreCommands::Add { .. } => "add",
            CoreCommands::List { .. } => "list",
            CoreCommands::Format { .. } => "format",
        },
        Some(Commands::Record(c)) => match c {
            RecordCommands::View { .. } => "view",
            RecordCommands::Edit { .. } => "edit",
            RecordCommands::Delete { .. } => "delete",
            RecordCommands::Share { .. } => "share",
        },
        Some(Commands::Misc(c)) => match c {
            MiscCommands::Config { .. } => "config",
            MiscCommands::Init => "init",
            MiscCommands::Help { .. } => "help",
        },
        None => {
            print_grouped_help();
            return;
        }
    };

    print_help_for_command(name);
}

pub fn print_help_for_command(name: &str) {
    let mut cmd = Cli::command();

    for subcmd in cmd.get_subcommands_mut() {
        if subcmd.get_name() == name {
            let help = subcmd.render_help();
            print!("{}", help);
            return;
        }
    }

    eprintln!("Unknown command: {}", name);
    eprintln!();
    print_grouped_help();
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Core(CoreCommands),

    #[command(flatten)]
    Record(RecordCommands),

    #[command(flatten)]
    Misc(MiscCommands),
}

#[derive(Subcommand, Debug)]
pub enum CoreCommands {
    /// Add a record
    #[command(alias = "n", display_order = 1)]
    Add {
        /// Who or what the identifier belongs to
        name: String,

        /// The PIN or number, spaces allowed
        #[arg(required = true, num_args = 1..)]
        identifier: Vec<String>,
    },

    /// List records
    #[command(alias = "ls", display_order = 2)]
    List {
        /// Only records whose name or PIN contains this
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Print an identifier in canonical form without storing it
    #[command(display_order = 3)]
    Format {
        #[arg(required = true, num_args = 1..)]
        raw: Vec<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum RecordCommands {
    /// View one or more records
    #[command(alias = "v", display_order = 10)]
    View {
        /// Indexes or ids of the records (e.g. 1 3 6f1c)
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Change the name or PIN of a record
    #[command(alias = "e", display_order = 11)]
    Edit {
        /// Index or id of the record
        selector: String,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New PIN
        #[arg(long, alias = "identifier")]
        pin: Option<String>,
    },

    /// Delete one or more records
    #[command(alias = "rm", display_order = 12)]
    Delete {
        /// Indexes or ids of the records (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,

        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Share a record
    #[command(display_order = 13)]
    Share {
        /// Index or id of the record
        selector: String,

        /// clipboard, message, email or code
        #[arg(long, default_value = "clipboard")]
        via: String,

        /// Open the message or email link with the default app
        #[arg(long)]
        open: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum MiscCommands {
    /// Get or set configuration
    #[command(display_order = 30)]
    Config {
        /// Configuration key (e.g., identifier-label)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Create the data directory and an empty record list
    #[command(display_order = 31)]
    Init,

    /// Print help for pinbook or a subcommand
    #[command(display_order = 32)]
    Help {
        /// Subcommand to get help for
        command: Option<String>,
    },
}
