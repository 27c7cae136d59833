//! Command-line front end: list HSL custom properties in CSS files, or render
//! a color in the same notation.
//!
//! This binary uses a small hand-rolled argument parser instead of a CLI
//! framework.

use std::fmt::Write as _;
use std::io::{self, Read};
use std::path::Path;
use std::process::ExitCode;

use hsl_swatch::color::{Color, Rgb};
use hsl_swatch::logging::SwatchLogger;
use hsl_swatch::position::LineIndex;
use hsl_swatch::provider::{DocumentColorProvider, DocumentSelector, HslVariableProvider};
use hsl_swatch::scanner::{find_tokens, render_token};
use log::LevelFilter;

const HELP: &str = r"hsl_swatch - find `--name: H S% L%` colors in CSS

USAGE:
    hsl_swatch [OPTIONS] [FILE...]

Reads stdin when no FILE is given or FILE is `-`.

OPTIONS:
    -h, --help            Print this help
        --render COLOR    Print COLOR (#rrggbb or r,g,b) as `H S% L%` and exit
        --language ID     Only scan files with this extension (default: css)
        --any-language    Scan every file regardless of extension
        --json            Print one JSON object per color (needs the `json` feature)
        --log-level LVL   off, error, warn, info, debug or trace (default: warn)

EXAMPLES:
    hsl_swatch src/styles/globals.css
    hsl_swatch --render '#3b82f6'
    cat theme.css | hsl_swatch --log-level debug
";

fn main() -> ExitCode {
    let cfg = match parse_args(std::env::args()) {
        Ok(cfg) => cfg,
        Err(message) => {
            eprintln!("error: {message}");
            return ExitCode::from(2);
        }
    };

    if cfg.help {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }

    if let Err(err) = SwatchLogger::new().level(cfg.log_level).init() {
        eprintln!("warning: logging disabled: {err}");
    }

    if let Some(color) = cfg.render {
        println!("{}", render_token(color));
        return ExitCode::SUCCESS;
    }

    match run(&cfg) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(1)
        }
    }
}

fn run(cfg: &Config) -> io::Result<()> {
    let provider = HslVariableProvider::with_selector(DocumentSelector::default().language(&cfg.language));
    let inputs = if cfg.files.is_empty() {
        vec!["-".to_string()]
    } else {
        cfg.files.clone()
    };

    let mut out = String::new();
    for input in &inputs {
        let text = read_input(input)?;
        if input != "-" && !cfg.any_language {
            let language = language_of(Path::new(input));
            if !provider.selector().matches(language, "file") {
                log::warn!("skipping {input}: language `{language}` is not `{}`", cfg.language);
                continue;
            }
        }
        if cfg.json {
            out.push_str(&json_report(&provider, &text)?);
        } else {
            out.push_str(&text_report(input, &text));
        }
    }
    print!("{out}");
    Ok(())
}

fn read_input(input: &str) -> io::Result<String> {
    if input == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        std::fs::read_to_string(input)
            .map_err(|err| io::Error::new(err.kind(), format!("{input}: {err}")))
    }
}

fn language_of(path: &Path) -> &str {
    path.extension().and_then(|ext| ext.to_str()).unwrap_or("")
}

/// One line per token: `path:line:col: --name value -> #rrggbb`.
fn text_report(label: &str, text: &str) -> String {
    let index = LineIndex::new(text);
    let mut out = String::new();
    for token in find_tokens(text) {
        let position = index.position_at(token.start_offset);
        let _ = writeln!(
            out,
            "{label}:{position}: {} {} -> {}",
            token.name(text).unwrap_or("?"),
            &text[token.range()],
            token.rgb().hex(),
        );
    }
    out
}

#[cfg(feature = "json")]
fn json_report(provider: &HslVariableProvider, text: &str) -> io::Result<String> {
    let mut out = String::new();
    for info in provider.provide_document_colors(text) {
        out.push_str(&info.to_json().to_string());
        out.push('\n');
    }
    Ok(out)
}

#[cfg(not(feature = "json"))]
fn json_report(_provider: &HslVariableProvider, _text: &str) -> io::Result<String> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "--json requires building with the `json` feature",
    ))
}

#[derive(Debug, Clone)]
struct Config {
    help: bool,
    json: bool,
    any_language: bool,
    language: String,
    log_level: LevelFilter,
    render: Option<Color>,
    files: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            help: false,
            json: false,
            any_language: false,
            language: DocumentSelector::default().language,
            log_level: LevelFilter::Warn,
            render: None,
            files: Vec::new(),
        }
    }
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Config, String> {
    let mut iter = args.into_iter();
    // Drop binary name if present.
    let _ = iter.next();

    let mut cfg = Config::default();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => cfg.help = true,
            "--json" => cfg.json = true,
            "--any-language" => cfg.any_language = true,
            "--language" => cfg.language = next_value(&mut iter, "--language")?,
            "--log-level" => {
                let raw = next_value(&mut iter, "--log-level")?;
                cfg.log_level = raw.parse::<LevelFilter>().map_err(|_| {
                    format!("Invalid --log-level value `{raw}` (expected off, error, warn, info, debug or trace).")
                })?;
            }
            "--render" => {
                if cfg.render.is_some() {
                    return Err("`--render` provided more than once.".to_string());
                }
                let raw = next_value(&mut iter, "--render")?;
                cfg.render = Some(Color::from_rgb(parse_rgb(&raw)?));
            }
            "-" => cfg.files.push(arg),
            flag if flag.starts_with('-') => {
                return Err(format!(
                    "Unknown flag: {flag}\n\nRun with `--help` to see valid options."
                ));
            }
            _ => cfg.files.push(arg),
        }
    }

    Ok(cfg)
}

fn next_value(iter: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, String> {
    iter.next()
        .ok_or_else(|| format!("Missing value for `{flag}`."))
}

/// Parse `#rrggbb`, `#rgb` or `r,g,b`.
fn parse_rgb(raw: &str) -> Result<Rgb, String> {
    let invalid = || format!("Invalid color `{raw}` (expected #rrggbb, #rgb or r,g,b).");
    let raw = raw.trim();

    if let Some(hex) = raw.strip_prefix('#') {
        let digits: Vec<u8> = hex
            .chars()
            .map(|c| c.to_digit(16).and_then(|d| u8::try_from(d).ok()))
            .collect::<Option<_>>()
            .ok_or_else(invalid)?;
        return match digits[..] {
            [r, g, b] => Ok(Rgb::new(r * 17, g * 17, b * 17)),
            [r1, r2, g1, g2, b1, b2] => Ok(Rgb::new(r1 * 16 + r2, g1 * 16 + g2, b1 * 16 + b2)),
            _ => Err(invalid()),
        };
    }

    let channels: Vec<u8> = raw
        .split(',')
        .map(|part| part.trim().parse::<u8>().ok())
        .collect::<Option<_>>()
        .ok_or_else(invalid)?;
    match channels[..] {
        [r, g, b] => Ok(Rgb::new(r, g, b)),
        _ => Err(invalid()),
    }
}
