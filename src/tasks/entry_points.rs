/* ************************************************************************ **
** This file is part of matkit, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::FailResult;
use crate::config::{Settings, ValidatedSettings};
use crate::io::{format_matrix, format_vector, parse_vector, read_matrix};
use crate::logging::init_global_logger;
use crate::session::Session;

use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use matkit_kernel::{self as kernel, elim, Number};
use std::ffi::OsStr;
use std::io::{self, BufReader, Write};
use std::path::Path;

fn wrap_result_main<F>(main: F)
where F: FnOnce() -> FailResult<()>,
{
    main().unwrap_or_else(|e| {
        for cause in e.causes() {
            error!("{}", cause);
        }

        if ::std::env::var_os("RUST_BACKTRACE") == Some(OsStr::new("1").to_owned()) {
            error!("{}", e.backtrace());
        }
        ::std::process::exit(1);
    });
}

trait ArgMatchesExt {
    fn expect_value_of(&self, s: &str) -> &str;
}

impl<'a> ArgMatchesExt for ArgMatches<'a> {
    fn expect_value_of(&self, s: &str) -> &str
    { self.value_of(s).unwrap_or_else(|| panic!("BUG! ({} was required)", s)) }
}

fn file_arg(name: &'static str, help: &'static str) -> Arg<'static, 'static> {
    Arg::with_name(name).required(true).help(help)
}

fn app() -> App<'static, 'static> {
    let matrix_file = || file_arg("FILE", "matrix file, one row per line");
    let vector = |name| file_arg(name, "comma-separated vector, e.g. '1,2,-1/2'");

    App::new("matkit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Small exact-where-possible matrix toolkit")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .setting(AppSettings::VersionlessSubcommands)
        .args(&[
            Arg::with_name("config")
                .short("c").long("config").value_name("CONFIG")
                .global(true)
                .help("settings yaml"),
            Arg::with_name("verbose")
                .short("v").long("verbose")
                .multiple(true).global(true)
                .help("more logging (can be repeated)"),
        ])
        .subcommands(vec![
            SubCommand::with_name("reduce")
                .about("row-reduce to echelon form")
                .arg(matrix_file()),
            SubCommand::with_name("transpose")
                .arg(matrix_file()),
            SubCommand::with_name("multiply")
                .about("compute the product A B")
                .args(&[
                    file_arg("A", "left factor"),
                    file_arg("B", "right factor"),
                    Arg::with_name("outer").long("outer")
                        .help("accumulate the product as a sum of outer products"),
                ]),
            SubCommand::with_name("add")
                .args(&[file_arg("A", "matrix file"), file_arg("B", "matrix file")]),
            SubCommand::with_name("sub")
                .about("compute A - B")
                .args(&[file_arg("A", "matrix file"), file_arg("B", "matrix file")]),
            SubCommand::with_name("scale")
                .args(&[matrix_file(), file_arg("C", "scalar")]),
            SubCommand::with_name("matvec")
                .about("compute A v")
                .args(&[matrix_file(), vector("VEC")]),
            SubCommand::with_name("vecmat")
                .about("compute v A")
                .args(&[vector("VEC"), matrix_file()]),
            SubCommand::with_name("inner")
                .about("compute the inner product (A u) . (A v)")
                .args(&[matrix_file(), vector("U"), vector("V")]),
            SubCommand::with_name("normal")
                .about("build the augmented normal equations [A^T A | A^T b]")
                .args(&[matrix_file(), vector("VEC")]),
            SubCommand::with_name("gram-schmidt")
                .about("orthogonalize the rows of a matrix")
                .arg(matrix_file()),
            SubCommand::with_name("eliminate")
                .about("apply row operations interactively (or from a script)")
                .args(&[
                    matrix_file(),
                    Arg::with_name("SCRIPT").help("command file [default: stdin]"),
                ]),
        ])
}

// Global args may show up on either side of the subcommand name.
fn global_value_of<'a>(matches: &'a ArgMatches, sub: &'a ArgMatches, name: &str) -> Option<&'a str> {
    sub.value_of(name).or_else(|| matches.value_of(name))
}

fn verbosity(matches: &ArgMatches) -> u64 {
    let sub = matches.subcommand().1.map_or(0, |sub| sub.occurrences_of("verbose"));
    u64::max(sub, matches.occurrences_of("verbose"))
}

fn read_settings(matches: &ArgMatches, sub: &ArgMatches) -> FailResult<ValidatedSettings> {
    let settings = match global_value_of(matches, sub, "config") {
        Some(path) => Settings::read_file(Path::new(path))?,
        None => Settings::default(),
    };
    settings.validate()
}

// %% CRATES: binary: matkit %%
pub fn matkit() {
    wrap_result_main(|| {
        let matches = app().get_matches();
        init_global_logger(verbosity(&matches))?;

        let stdout = io::stdout();
        let mut out = stdout.lock();
        dispatch(&matches, &mut out)
    });
}

/// Run a parsed command line, writing results to `out`.
pub fn dispatch<W: Write>(matches: &ArgMatches, out: &mut W) -> FailResult<()> {
    let (name, sub) = match matches.subcommand() {
        (name, Some(sub)) => (name, sub),
        (_, None) => bail!("no subcommand given (try --help)"),
    };
    let settings = read_settings(matches, sub)?;
    let style = settings.display.style;
    debug!("running '{}'", name);

    let matrix_arg = |arg: &str| read_matrix(Path::new(sub.expect_value_of(arg)));
    let vector_arg = |arg: &str| parse_vector(sub.expect_value_of(arg));

    match name {
        "reduce" => {
            let a = matrix_arg("FILE")?;
            write!(out, "{}", format_matrix(&elim::reduce(&a)?, style))?;
        },
        "transpose" => {
            let a = matrix_arg("FILE")?;
            write!(out, "{}", format_matrix(&kernel::transpose(&a), style))?;
        },
        "multiply" => {
            let (a, b) = (matrix_arg("A")?, matrix_arg("B")?);
            let product = match sub.is_present("outer") {
                true => kernel::matmul_outer(&a, &b)?,
                false => kernel::matmul_direct(&a, &b)?,
            };
            write!(out, "{}", format_matrix(&product, style))?;
        },
        "add" => {
            let sum = kernel::mat_add(&matrix_arg("A")?, &matrix_arg("B")?)?;
            write!(out, "{}", format_matrix(&sum, style))?;
        },
        "sub" => {
            let diff = kernel::mat_sub(&matrix_arg("A")?, &matrix_arg("B")?)?;
            write!(out, "{}", format_matrix(&diff, style))?;
        },
        "scale" => {
            let a = matrix_arg("FILE")?;
            let c: Number = sub.expect_value_of("C").parse()?;
            write!(out, "{}", format_matrix(&kernel::mat_scale(&a, c), style))?;
        },
        "matvec" => {
            let v = kernel::mat_vec(&matrix_arg("FILE")?, &vector_arg("VEC")?)?;
            writeln!(out, "{}", format_vector(&v))?;
        },
        "vecmat" => {
            let v = kernel::vec_mat(&vector_arg("VEC")?, &matrix_arg("FILE")?)?;
            writeln!(out, "{}", format_vector(&v))?;
        },
        "inner" => {
            let a = matrix_arg("FILE")?;
            let x = kernel::mat_inner_product(&a, &vector_arg("U")?, &vector_arg("V")?)?;
            writeln!(out, "{}", x)?;
        },
        "normal" => {
            let a = matrix_arg("FILE")?;
            let system = kernel::normal_equations(&a, &vector_arg("VEC")?)?;
            write!(out, "{}", format_matrix(&system, style))?;
        },
        "gram-schmidt" => {
            let basis = matrix_arg("FILE")?.to_rows();
            for v in kernel::gram_schmidt(&basis)? {
                let v = match settings.gram_schmidt.normalize {
                    true => kernel::vnormalize(&v)?,
                    false => v,
                };
                writeln!(out, "{}", format_vector(&v))?;
            }
        },
        "eliminate" => {
            let a = matrix_arg("FILE")?;
            let mut session = Session::new(a, settings.clone());
            match sub.value_of("SCRIPT") {
                Some(path) => {
                    let file = ::std::fs::File::open(path)?;
                    session.run_script(BufReader::new(file), &mut *out)?;
                },
                None => {
                    let stdin = io::stdin();
                    session.run_script(stdin.lock(), &mut *out)?;
                },
            }
        },
        _ => bail!("unknown subcommand '{}'", name),
    }
    Ok(())
}
