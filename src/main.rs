// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process;

use pico_args::Arguments;
use svg2vectordrawable::{batch, source, usvg, Indent, WriteOptions};

const HELP: &str = "\
svg2vectordrawable converts SVG images into Android Vector Drawable XML.

USAGE:
  svg2vectordrawable [OPTIONS] -i <in-svg> -o <out-xml>   # from file to file
  svg2vectordrawable [OPTIONS] -f <in-dir> -o <out-dir>   # from folder to folder
  svg2vectordrawable [OPTIONS] -s '<svg>...</svg>'        # from string to stdout

OPTIONS:
  -h, --help                    Prints help information
  -v, --version                 Prints version information
  -i, --input FILE              Input file, must be a SVG file
  -f, --folder DIR              Input folder, convert all *.svg files
  -s, --string SVG              Input full SVG code, or a SVG tag code
  -o, --output PATH             Output file or folder
                                [default: the same as the input]

  --precision NUM               Sets the coordinates numeric precision
                                [values: 0..8 (inclusive)] [default: 2]
  --transforms-precision NUM    Sets the transform values numeric precision
                                [values: 0..8 (inclusive)] [default: 3]
  --leading-zero                Keeps the leading zero of fractional numbers
  --indent INDENT               Sets the XML nodes indent
                                [values: none, 0, 1, 2, 3, 4, tabs] [default: 4]
  --attrs-indent INDENT         Sets the XML attributes indent
                                [values: none, 0, 1, 2, 3, 4, tabs] [default: 4]
  --dpi DPI                     Sets the resolution
                                [default: 96] [possible values: 10..4000 (inclusive)]

  --skip-system-fonts           Disables system fonts loading.
                                Text elements are converted into paths
                                only with fonts loaded via --use-font-file
                                and/or --use-fonts-dir
  --use-font-file PATH          Load a specified font file into the fonts database.
                                This option can be set multiple times
  --use-fonts-dir PATH          Loads all fonts from the specified directory
                                into the fonts database.
                                This option can be set multiple times
  --quiet                       Disables warnings

ARGS:
  <in-svg>                      Input file, the same as --input

EXAMPLES:
  svg2vectordrawable -i input.svg -o output.xml
  svg2vectordrawable -f input_folder -o output_folder
  svg2vectordrawable -s '<svg>...</svg>'
";

#[derive(Debug)]
struct Args {
    input: Option<PathBuf>,
    folder: Option<PathBuf>,
    string: Option<String>,
    output: Option<PathBuf>,

    coordinates_precision: u8,
    transforms_precision: u8,
    leading_zero: bool,
    indent: Indent,
    attrs_indent: Indent,
    dpi: u32,

    skip_system_fonts: bool,
    font_files: Vec<PathBuf>,
    font_dirs: Vec<PathBuf>,

    quiet: bool,
}

fn collect_args() -> Result<Args, String> {
    let mut input = Arguments::from_env();

    if input.contains(["-h", "--help"]) {
        print!("{}", HELP);
        process::exit(0);
    }

    if input.contains(["-v", "--version"]) {
        println!("{}", env!("CARGO_PKG_VERSION"));
        process::exit(0);
    }

    let mut args = Args {
        input: opt_value(&mut input, ["-i", "--input"])?.map(PathBuf::from),
        folder: opt_value(&mut input, ["-f", "--folder"])?.map(PathBuf::from),
        string: opt_string(&mut input)?,
        output: opt_value(&mut input, ["-o", "--output"])?.map(PathBuf::from),

        coordinates_precision: input
            .opt_value_from_fn("--precision", parse_precision)
            .map_err(|e| e.to_string())?
            .unwrap_or(2),
        transforms_precision: input
            .opt_value_from_fn("--transforms-precision", parse_precision)
            .map_err(|e| e.to_string())?
            .unwrap_or(3),
        leading_zero: input.contains("--leading-zero"),
        indent: input
            .opt_value_from_fn("--indent", parse_indent)
            .map_err(|e| e.to_string())?
            .unwrap_or(Indent::Spaces(4)),
        attrs_indent: input
            .opt_value_from_fn("--attrs-indent", parse_indent)
            .map_err(|e| e.to_string())?
            .unwrap_or(Indent::Spaces(4)),
        dpi: input
            .opt_value_from_fn("--dpi", parse_dpi)
            .map_err(|e| e.to_string())?
            .unwrap_or(96),

        skip_system_fonts: input.contains("--skip-system-fonts"),
        font_files: input
            .values_from_str("--use-font-file")
            .map_err(|e| e.to_string())?,
        font_dirs: input
            .values_from_str("--use-fonts-dir")
            .map_err(|e| e.to_string())?,

        quiet: input.contains("--quiet"),
    };

    let free = input.finish();
    if let Some(arg) = free.iter().find(|arg| is_flag(arg)) {
        return Err(format!("Unknown option \"{}\".", arg.to_string_lossy()));
    }

    match free.len() {
        0 => {}
        1 if args.input.is_none() => args.input = free.into_iter().next().map(PathBuf::from),
        _ => {
            let free: Vec<_> = free.iter().map(|arg| arg.to_string_lossy()).collect();
            return Err(format!("Unexpected arguments: {}.", free.join(" ")));
        }
    }

    Ok(args)
}

/// Parses an option that must have a non-empty value.
fn opt_value(
    input: &mut Arguments,
    keys: [&'static str; 2],
) -> Result<Option<String>, String> {
    let must_have_value = || format!("Option \"{}, {}\" must have a value.", keys[0], keys[1]);

    match input.opt_value_from_str::<_, String>(keys) {
        Ok(Some(value)) if value.is_empty() => Err(must_have_value()),
        Ok(value) => Ok(value),
        Err(pico_args::Error::OptionWithoutAValue(_)) => Err(must_have_value()),
        Err(e) => Err(e.to_string()),
    }
}

fn opt_string(input: &mut Arguments) -> Result<Option<String>, String> {
    let not_svg = || "Option \"-s, --string\" must be a SVG code.".to_string();

    match input.opt_value_from_str::<_, String>(["-s", "--string"]) {
        Ok(Some(value)) if source::is_svg_code(&value) => Ok(Some(value.trim().to_string())),
        Ok(Some(_)) => Err(not_svg()),
        Ok(None) => Ok(None),
        Err(pico_args::Error::OptionWithoutAValue(_)) => Err(not_svg()),
        Err(e) => Err(e.to_string()),
    }
}

fn is_flag(arg: &OsString) -> bool {
    let arg = arg.to_string_lossy();
    arg.len() > 1 && arg.starts_with('-')
}

fn parse_precision(s: &str) -> Result<u8, String> {
    let n: u8 = s.parse().map_err(|_| "invalid precision NUM value")?;

    if n <= 8 {
        Ok(n)
    } else {
        Err("precision NUM cannot be larger than 8".to_string())
    }
}

fn parse_dpi(s: &str) -> Result<u32, String> {
    let n: u32 = s.parse().map_err(|_| "invalid number")?;

    if (10..=4000).contains(&n) {
        Ok(n)
    } else {
        Err("DPI out of bounds".to_string())
    }
}

fn parse_indent(s: &str) -> Result<Indent, String> {
    let indent = match s {
        "none" => Indent::None,
        "0" => Indent::Spaces(0),
        "1" => Indent::Spaces(1),
        "2" => Indent::Spaces(2),
        "3" => Indent::Spaces(3),
        "4" => Indent::Spaces(4),
        "tabs" => Indent::Tabs,
        _ => return Err("invalid INDENT value".to_string()),
    };

    Ok(indent)
}

fn main() {
    let args = match collect_args() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    if !args.quiet {
        if let Ok(()) = log::set_logger(&LOGGER) {
            log::set_max_level(log::LevelFilter::Warn);
        }
    }

    match process(args) {
        Ok(0) => {}
        Ok(_) => process::exit(1),
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}

/// Returns the number of failed conversions.
fn process(args: Args) -> Result<usize, String> {
    if args.string.is_none() && args.input.is_none() && args.folder.is_none() {
        print!("{}", HELP);
        return Ok(0);
    }

    let fontdb = load_fonts(&args);
    let xml_opt = WriteOptions {
        coordinates_precision: args.coordinates_precision,
        transforms_precision: args.transforms_precision,
        leading_zero: args.leading_zero,
        use_single_quote: false,
        indent: args.indent,
        attributes_indent: args.attrs_indent,
    };

    // A string input takes precedence over files.
    if let Some(ref svg) = args.string {
        let opt = usvg_options(&args, None);
        let xml = svg2vectordrawable::convert_str(svg, &opt, &fontdb, &xml_opt)
            .map_err(|e| e.to_string())?;

        match args.output {
            Some(ref output) => {
                let output = batch::string_output(output);
                batch::output_file(&output, &xml).map_err(|e| e.to_string())?;
                println!("Save to \"{}\".", output.display());
            }
            None => println!("\nAndroid Vector Drawable Code:\n\n{}", xml),
        }

        return Ok(0);
    }

    let jobs = batch::plan(
        args.folder.as_deref(),
        args.input.as_deref(),
        args.output.as_deref(),
    )
    .map_err(|e| e.to_string())?;

    let mut failed = 0;
    for job in &jobs {
        match convert_file(job, &args, &fontdb, &xml_opt) {
            Ok(()) => println!("∙ {} → {}", job.input.display(), job.output.display()),
            Err(e) => {
                eprintln!("{}", e);
                failed += 1;
            }
        }
    }

    Ok(failed)
}

fn convert_file(
    job: &batch::Job,
    args: &Args,
    fontdb: &usvg::fontdb::Database,
    xml_opt: &WriteOptions,
) -> Result<(), String> {
    let data = std::fs::read(&job.input)
        .map_err(|e| format!("Failed to read \"{}\" cause {}.", job.input.display(), e))?;

    let opt = usvg_options(args, Some(&job.input));
    let xml = svg2vectordrawable::convert_data(&data, &opt, fontdb, xml_opt)
        .map_err(|e| format!("Failed to convert \"{}\" cause {}.", job.input.display(), e))?;

    batch::output_file(&job.output, &xml)
        .map_err(|e| format!("Failed to write \"{}\" cause {}.", job.output.display(), e))
}

fn usvg_options(args: &Args, input: Option<&Path>) -> usvg::Options {
    // Get input file absolute directory.
    let resources_dir = input
        .and_then(|f| std::fs::canonicalize(f).ok())
        .and_then(|p| p.parent().map(|p| p.to_path_buf()));

    usvg::Options {
        resources_dir,
        dpi: args.dpi as f32,
        ..usvg::Options::default()
    }
}

fn load_fonts(args: &Args) -> usvg::fontdb::Database {
    let mut fontdb = usvg::fontdb::Database::new();
    if !args.skip_system_fonts {
        fontdb.load_system_fonts();
    }

    for path in &args.font_files {
        if let Err(e) = fontdb.load_font_file(path) {
            log::warn!("Failed to load '{}' cause {}.", path.display(), e);
        }
    }

    for path in &args.font_dirs {
        fontdb.load_fonts_dir(path);
    }

    fontdb.set_serif_family("Times New Roman");
    fontdb.set_sans_serif_family("Arial");
    fontdb.set_cursive_family("Comic Sans MS");
    fontdb.set_fantasy_family("Impact");
    fontdb.set_monospace_family("Courier New");

    fontdb
}

/// A simple stderr logger.
static LOGGER: SimpleLogger = SimpleLogger;
struct SimpleLogger;
impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::LevelFilter::Warn
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            let target = if !record.target().is_empty() {
                record.target()
            } else {
                record.module_path().unwrap_or_default()
            };

            let line = record.line().unwrap_or(0);
            let args = record.args();

            match record.level() {
                log::Level::Error => eprintln!("Error (in {}:{}): {}", target, line, args),
                log::Level::Warn => eprintln!("Warning (in {}:{}): {}", target, line, args),
                log::Level::Info => eprintln!("Info (in {}:{}): {}", target, line, args),
                log::Level::Debug => eprintln!("Debug (in {}:{}): {}", target, line, args),
                log::Level::Trace => eprintln!("Trace (in {}:{}): {}", target, line, args),
            }
        }
    }

    fn flush(&self) {}
}
