use clap::{Args, Parser, Subcommand, ValueEnum};
use qrmint::helper::{save_png, to_ascii, to_svg_string, RenderOptions};
use qrmint::payload::{ContactCard, Payload, WifiCredentials, WifiSecurity};
use qrmint::qrcode::{EncodeOptions, ErrorCorrectionLevel, QrModel};
use qrmint::version::Version;
use qrmint::QrError;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

const MAX_BORDER: i64 = 100;
const MAX_SCALE: i64 = 64;

#[derive(Parser)]
#[command(name = "qrmint", version, about = "Generate QR codes from text, contacts and Wi-Fi credentials")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    opts: GlobalOpts,
}

#[derive(Args)]
struct GlobalOpts {
    /// Error correction level: L, M, Q or H
    #[arg(short, long, global = true, default_value = "M")]
    level: ErrorCorrectionLevel,

    /// Smallest version to use (1-40)
    #[arg(long, global = true, value_parser = clap::value_parser!(u8).range(1..=40))]
    min_version: Option<u8>,

    #[arg(short, long, global = true, value_enum, default_value_t = Format::Ascii)]
    format: Format,

    /// Write to this file instead of stdout; PNG defaults to qrcode.png
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Quiet zone width in modules
    #[arg(long, global = true, default_value_t = 4, value_parser = clap::value_parser!(u32).range(0..=MAX_BORDER))]
    border: u32,

    /// Pixels per module for PNG output
    #[arg(long, global = true, default_value_t = 8, value_parser = clap::value_parser!(u32).range(1..=MAX_SCALE))]
    scale: u32,

    /// Log more (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Ascii,
    Svg,
    Png,
}

#[derive(Subcommand)]
enum Command {
    /// Encode arbitrary text
    Text { text: String },
    /// Encode Wi-Fi credentials
    Wifi {
        #[arg(long)]
        ssid: String,
        #[arg(long, default_value = "")]
        password: String,
        /// WPA, WEP or nopass
        #[arg(long, default_value = "WPA")]
        security: WifiSecurity,
        #[arg(long)]
        hidden: bool,
    },
    /// Encode a vCard contact
    Vcard {
        #[arg(long, default_value = "")]
        first_name: String,
        #[arg(long, default_value = "")]
        last_name: String,
        #[arg(long, default_value = "")]
        organization: String,
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long = "phone")]
        phones: Vec<String>,
        #[arg(long = "email")]
        emails: Vec<String>,
        #[arg(long, default_value = "")]
        url: String,
        #[arg(long, default_value = "")]
        address: String,
        #[arg(long, default_value = "")]
        note: String,
    },
}

impl Command {
    fn into_payload(self) -> Payload {
        match self {
            Command::Text { text } => Payload::Text(text),
            Command::Wifi { ssid, password, security, hidden } => Payload::Wifi(WifiCredentials {
                ssid,
                password,
                security,
                hidden,
            }),
            Command::Vcard {
                first_name,
                last_name,
                organization,
                title,
                phones,
                emails,
                url,
                address,
                note,
            } => Payload::Contact(ContactCard {
                first_name,
                last_name,
                organization,
                title,
                phones,
                emails,
                url,
                address,
                note,
            }),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(max_level(cli.opts.verbose))
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "failed to generate QR code");
            eprintln!("qrmint: {err}");
            ExitCode::FAILURE
        }
    }
}

fn max_level(verbose: u8) -> tracing::Level {
    match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    }
}

fn encode_options(args: &GlobalOpts) -> Result<EncodeOptions, QrError> {
    Ok(EncodeOptions {
        level: args.level,
        min_version: args.min_version.map(Version::try_from).transpose()?,
    })
}

fn run(cli: Cli) -> Result<(), QrError> {
    let args = cli.opts;
    let text = cli.command.into_payload().to_text();
    let options = encode_options(&args)?;
    let qr = QrModel::encode_with(&text, &options)?;
    let render = RenderOptions {
        border: args.border,
        scale: args.scale,
    };

    match args.format {
        Format::Png => {
            let path = args.output.unwrap_or_else(|| PathBuf::from("qrcode.png"));
            save_png(&qr, &path, &render)?;
            info!(path = %path.display(), "wrote PNG");
        }
        Format::Svg => emit(&to_svg_string(&qr, render.border)?, args.output)?,
        Format::Ascii => emit(&to_ascii(&qr, render.border)?, args.output)?,
    }
    Ok(())
}

fn emit(rendered: &str, output: Option<PathBuf>) -> Result<(), QrError> {
    match output {
        Some(path) => fs::write(path, rendered)?,
        None => print!("{rendered}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("qrmint").chain(args.iter().copied())).unwrap()
    }

    #[test_case(0, tracing::Level::WARN)]
    #[test_case(1, tracing::Level::DEBUG)]
    #[test_case(2, tracing::Level::TRACE)]
    #[test_case(5, tracing::Level::TRACE)]
    fn test_max_level(verbose: u8, expected: tracing::Level) {
        assert_eq!(max_level(verbose), expected);
    }

    #[test]
    fn test_verbose_flag_counts() {
        assert_eq!(parse(&["text", "hi"]).opts.verbose, 0);
        assert_eq!(parse(&["-vv", "text", "hi"]).opts.verbose, 2);
        assert_eq!(parse(&["text", "hi", "-v"]).opts.verbose, 1);
    }

    #[test]
    fn test_text_subcommand_payload() {
        let cli = parse(&["text", "hello world"]);
        assert_eq!(cli.command.into_payload(), Payload::Text("hello world".into()));
    }

    #[test]
    fn test_wifi_subcommand_payload() {
        let cli = parse(&["wifi", "--ssid", "Cafe", "--password", "pw", "--security", "wep", "--hidden"]);
        assert_eq!(
            cli.command.into_payload(),
            Payload::Wifi(WifiCredentials {
                ssid: "Cafe".into(),
                password: "pw".into(),
                security: WifiSecurity::Wep,
                hidden: true,
            })
        );
    }

    #[test]
    fn test_vcard_subcommand_payload() {
        let cli = parse(&[
            "vcard",
            "--first-name",
            "Ada",
            "--phone",
            "1",
            "--phone",
            "2",
            "--email",
            "ada@example.com",
        ]);
        assert_eq!(
            cli.command.into_payload(),
            Payload::Contact(ContactCard {
                first_name: "Ada".into(),
                phones: vec!["1".into(), "2".into()],
                emails: vec!["ada@example.com".into()],
                ..Default::default()
            })
        );
    }

    #[test]
    fn test_encode_options_from_flags() {
        let cli = parse(&["--level", "h", "--min-version", "7", "text", "x"]);
        let options = encode_options(&cli.opts).unwrap();
        assert_eq!(options.level, ErrorCorrectionLevel::H);
        assert_eq!(options.min_version, Some(Version::new(7)));

        let defaults = encode_options(&parse(&["text", "x"]).opts).unwrap();
        assert_eq!(defaults, EncodeOptions::default());
    }

    #[test_case(&["--min-version", "41", "text", "x"]; "version above forty")]
    #[test_case(&["--min-version", "0", "text", "x"]; "version zero")]
    #[test_case(&["--scale", "0", "text", "x"]; "zero scale")]
    #[test_case(&["--scale", "200000000", "text", "x"]; "huge scale")]
    #[test_case(&["--border", "101", "text", "x"]; "wide border")]
    #[test_case(&["--level", "X", "text", "x"]; "unknown level")]
    fn test_out_of_range_flags_are_rejected(args: &[&str]) {
        assert!(Cli::try_parse_from(std::iter::once("qrmint").chain(args.iter().copied())).is_err());
    }

    #[test]
    fn test_render_bounds_are_inclusive() {
        let cli = parse(&["--scale", "64", "--border", "100", "text", "x"]);
        assert_eq!((cli.opts.scale, cli.opts.border), (64, 100));
        let cli = parse(&["--scale", "1", "--border", "0", "text", "x"]);
        assert_eq!((cli.opts.scale, cli.opts.border), (1, 0));
    }
}
