//! Keymap tool.
//!
//! Inspects the keymaps built into the console, and runs codes or text
//! through them to show what a user with that layout would get.
//!
//! The keymap defaults to `$HCI_KEYMAP`, then to "us".

use anyhow::{anyhow, Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use log::{debug, info, LevelFilter};

use hci_keymap::{layouts, Console, Keymap, Keystroke, Registry, RemapEntry};

mod codes;

#[derive(Parser)]
#[command(name = "hci-keymap-tool")]
#[command(about = "Inspect and exercise the console keymaps", long_about = None)]
struct Cli {
    /// Log more, repeat for even more
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the registered keymaps
    List,

    /// Show the remapping tables of a keymap
    Show {
        /// The keymap to show
        name: String,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check the built-in keymaps for malformed tables
    Check,

    /// Resolve codes through a keymap
    Resolve {
        /// The keymap to use
        #[arg(short, long, env = "HCI_KEYMAP", default_value = "us")]
        keymap: String,

        /// Use the AltGr table
        #[arg(long)]
        altgr: bool,

        /// Codes, as hex (0x71), decimal (113), or a character (q)
        #[arg(required = true, value_parser = codes::parse_code)]
        codes: Vec<u8>,
    },

    /// Remap text as if typed on a US keyboard with a keymap active
    Type {
        /// The keymap to use
        #[arg(short, long, env = "HCI_KEYMAP", default_value = "us")]
        keymap: String,

        /// The text to type
        text: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let registry = Registry::builtin();
    debug!("{} keymaps registered", registry.len());

    match &cli.command {
        Commands::List => {
            for keymap in registry.iter() {
                println!(
                    "{:<4} {:>3} basic {:>3} altgr",
                    keymap.name,
                    keymap.basic.len(),
                    keymap.altgr.len()
                );
            }
        }
        Commands::Show { name, json } => {
            let keymap = find(&registry, name)?;
            if *json {
                println!("{}", serde_json::to_string_pretty(keymap)?);
            } else {
                show(keymap);
            }
        }
        Commands::Check => check()?,
        Commands::Resolve {
            keymap,
            altgr,
            codes,
        } => {
            let keymap = find(&registry, keymap)?;
            info!("resolving {} codes through {}", codes.len(), keymap.name);
            for &code in codes {
                let out = keymap.resolve(code, *altgr);
                let note = if keymap.table(*altgr).contains(code) {
                    ""
                } else {
                    "  (unmapped)"
                };
                println!("{:#04x} => {:#04x}  {}{}", code, out, RemapEntry::new(code, out), note);
            }
        }
        Commands::Type { keymap, text } => {
            let keymap = find(&registry, keymap)?;
            println!("{}", type_text(keymap, text));
        }
    }

    Ok(())
}

/// `-v` steps the level up from warnings. `RUST_LOG` still wins.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Look up a keymap, naming the alternatives if it isn't there.
fn find<'r>(registry: &'r Registry, name: &str) -> Result<&'r Keymap> {
    registry.find_keymap(name).with_context(|| {
        let names: Vec<_> = registry.names().collect();
        format!("keymap {:?} (available: {})", name, names.join(", "))
    })
}

fn show(keymap: &Keymap) {
    println!("keymap {}", keymap.name);
    for (kind, table) in keymap.tables() {
        println!("{} ({} entries):", kind, table.len());
        for entry in table.iter() {
            println!("  {:#04x} => {:#04x}  {}", entry.from, entry.to, entry);
        }
    }
}

/// Register every built-in keymap into a fresh registry, reporting each
/// refusal rather than stopping at the first.
fn check() -> Result<()> {
    let mut builder = Registry::builder();
    let mut failed = 0;
    for keymap in layouts::ALL {
        match builder.register(*keymap) {
            Ok(()) => println!("{}: ok", keymap.name),
            Err(err) => {
                println!("{}: {}", keymap.name, err);
                failed += 1;
            }
        }
    }
    if failed > 0 {
        return Err(anyhow!("{} of {} keymaps failed", failed, layouts::ALL.len()));
    }
    Ok(())
}

/// Each ASCII character is one plain keystroke. Anything else is kept as is.
fn type_text(keymap: &Keymap, text: &str) -> String {
    let console = Console::with_keymap(*keymap);
    text.chars()
        .map(|ch| match u8::try_from(ch) {
            Ok(code) if code.is_ascii() => char::from(console.remap(Keystroke::plain(code))),
            _ => ch,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing() {
        assert_eq!(type_text(&layouts::FR, "qwerty"), "azerty");
        assert_eq!(type_text(&layouts::FR, "Qui?"), "Aui?");
        assert_eq!(type_text(&layouts::US, "qwerty"), "qwerty");
        assert_eq!(type_text(&layouts::PL, "zażółć"), "zażółć");
    }

    #[test]
    fn unknown_keymap_lists_names() {
        let registry = Registry::builtin();
        let err = find(&registry, "de").unwrap_err();
        let text = format!("{:#}", err);
        assert!(text.contains("\"de\""), "{}", text);
        assert!(text.contains("fr, pl, us"), "{}", text);
        assert!(text.contains("keymap not found"), "{}", text);
    }

    #[test]
    fn builtins_pass_check() {
        check().unwrap();
    }

    #[test]
    fn cli_parses() {
        let cli = Cli::try_parse_from(["hci-keymap-tool", "resolve", "-k", "fr", "--altgr", "0x37", "q"]).unwrap();
        match cli.command {
            Commands::Resolve { keymap, altgr, codes } => {
                assert_eq!(keymap, "fr");
                assert!(altgr);
                assert_eq!(codes, [0x37, b'q']);
            }
            _ => panic!("wrong command"),
        }
    }
}
