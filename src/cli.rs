// src/cli.rs
use std::io::{self, BufRead, Write};
use std::{env, path::PathBuf};

use crate::category::Category;
use crate::config::options::{check_extension, CrawlOptions, DeptSelector, ExportFormat, FormTokens};
use crate::dept::Directory;
use crate::error::{CrawlError, CrawlResult};
use crate::progress::Progress;
use crate::specs::timetable::HttpSource;

pub const HELP: &str = include_str!("cli_help.txt");

pub enum Mode {
    Help,
    Run(CrawlOptions),
}

/// Prints progress lines to stdout, `* ` prefixed.
struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        println!("* {total} rows found");
    }

    fn log(&mut self, msg: &str) {
        println!("* {msg}");
    }

    fn finish(&mut self, kept: usize) {
        println!("* 파싱 완료! ({kept} courses)");
    }
}

pub fn run() -> CrawlResult<()> {
    match parse_args(env::args().skip(1))? {
        Mode::Help => {
            eprintln!("{HELP}");
            Ok(())
        }
        Mode::Run(opts) => crawl(opts),
    }
}

fn crawl(opts: CrawlOptions) -> CrawlResult<()> {
    crate::log::set_enabled(!opts.quiet);

    let directory = match &opts.depts_file {
        Some(p) => Directory::load(p)?,
        None => Directory::builtin(),
    };

    if opts.list_depts {
        for (name, code) in directory.iter() {
            println!("{},{}", name, code);
        }
        return Ok(());
    }
    if let Some(out) = &opts.export.out {
        check_extension(out)?;
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let dept_code = match &opts.dept {
        DeptSelector::Code(code) => code.clone(),
        DeptSelector::Name(name) => s!(directory.resolve_name(name)?),
        DeptSelector::Prompt => {
            let name = prompt(&mut input, &mut output, "Select your department name: ")?;
            s!(directory.resolve_name(&name)?)
        }
    };

    let label = match &opts.category {
        Some(label) => s!(label.trim()),
        None => prompt(
            &mut input,
            &mut output,
            "Select a course category which will be crawled: (전공, 교필, 영어, 핵교, 일교) ",
        )?,
    };
    let category: Category = label.parse()?;

    let tokens = FormTokens::from_env();
    let mut console = ConsoleProgress;
    let progress: Option<&mut dyn Progress> = if opts.quiet { None } else { Some(&mut console) };

    let courses = crate::scrape::collect_courses(
        &HttpSource,
        &tokens,
        &directory,
        &dept_code,
        category,
        progress,
    )?;
    let path = crate::file::export_courses(&opts.export, &label, &courses)?;
    println!("Wrote {} courses to {}", courses.len(), path.display());
    Ok(())
}

/// Ask one question; the answer comes back trimmed.
pub fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> CrawlResult<String> {
    write!(output, "{question}")?;
    output.flush()?;
    let mut line = s!();
    if input.read_line(&mut line)? == 0 {
        return Err(CrawlError::Usage(s!("no input on stdin")));
    }
    Ok(s!(line.trim()))
}

pub fn parse_args<I: IntoIterator<Item = String>>(argv: I) -> CrawlResult<Mode> {
    let mut opts = CrawlOptions::default();
    let mut args = argv.into_iter();
    let missing = |flag: &str| CrawlError::Usage(format!("Missing value for {flag}"));

    while let Some(a) = args.next() {
        match a.as_str() {
            "-d" | "--dept" => {
                opts.dept = DeptSelector::Name(args.next().ok_or_else(|| missing("--dept"))?);
            }
            "--code" => {
                opts.dept = DeptSelector::Code(args.next().ok_or_else(|| missing("--code"))?);
            }
            "-c" | "--category" => {
                opts.category = Some(args.next().ok_or_else(|| missing("--category"))?);
            }
            "-o" | "--out" => {
                opts.export.out = Some(PathBuf::from(args.next().ok_or_else(|| missing("--out"))?));
            }
            "--format" => {
                let v = args.next().ok_or_else(|| missing("--format"))?;
                opts.export.format = ExportFormat::parse(&v)
                    .ok_or_else(|| CrawlError::Usage(format!("Unknown format: {v}")))?;
            }
            "--include-headers" => opts.export.include_headers = true,
            "--depts-file" => {
                let path = args.next().ok_or_else(|| missing("--depts-file"))?;
                opts.depts_file = Some(PathBuf::from(path));
            }
            "--list-depts" => opts.list_depts = true,
            "-q" | "--quiet" => opts.quiet = true,
            "-h" | "--help" => return Ok(Mode::Help),
            _ => return Err(CrawlError::Usage(format!("Unknown arg: {a}"))),
        }
    }
    Ok(Mode::Run(opts))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|a| s!(*a)).collect()
    }

    fn run_opts(list: &[&str]) -> CrawlOptions {
        match parse_args(args(list)).unwrap() {
            Mode::Run(o) => o,
            Mode::Help => panic!("unexpected help"),
        }
    }

    #[test]
    fn parses_full_command_line() {
        let o = run_opts(&[
            "-d",
            "컴퓨터공학과",
            "-c",
            "교필",
            "-o",
            "a/b.csv",
            "--format",
            "CSV",
            "--include-headers",
            "-q",
        ]);
        assert_eq!(o.dept, DeptSelector::Name(s!("컴퓨터공학과")));
        assert_eq!(o.category.as_deref(), Some("교필"));
        assert_eq!(o.export.out, Some(PathBuf::from("a/b.csv")));
        assert_eq!(o.export.format, ExportFormat::Csv);
        assert!(o.export.include_headers);
        assert!(o.quiet);
    }

    #[test]
    fn defaults_prompt_for_everything() {
        let o = run_opts(&[]);
        assert_eq!(o.dept, DeptSelector::Prompt);
        assert_eq!(o.category, None);
        assert_eq!(o.export.format, ExportFormat::Json);
    }

    #[test]
    fn code_overrides_name() {
        let o = run_opts(&["--dept", "x", "--code", "0240"]);
        assert_eq!(o.dept, DeptSelector::Code(s!("0240")));
    }

    #[test]
    fn help_and_errors() {
        assert!(matches!(parse_args(args(&["-h"])), Ok(Mode::Help)));
        assert!(matches!(parse_args(args(&["--bogus"])), Err(CrawlError::Usage(_))));
        assert!(matches!(parse_args(args(&["--format", "xml"])), Err(CrawlError::Usage(_))));
        assert!(matches!(parse_args(args(&["-c"])), Err(CrawlError::Usage(_))));
    }

    #[test]
    fn prompt_trims_answer() {
        let mut input = io::Cursor::new("  컴퓨터공학과 \n");
        let mut output = Vec::new();
        let answer = prompt(&mut input, &mut output, "Q: ").unwrap();
        assert_eq!(answer, "컴퓨터공학과");
        assert_eq!(output, b"Q: ");
    }

    #[test]
    fn prompt_on_closed_stdin_is_usage_error() {
        let mut input = io::Cursor::new("");
        let mut output = Vec::new();
        assert!(matches!(prompt(&mut input, &mut output, "Q: "), Err(CrawlError::Usage(_))));
    }
}
