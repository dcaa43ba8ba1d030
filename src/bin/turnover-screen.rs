use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::{App, Arg};

use turnover_screen::ingest;
use turnover_screen::report::{CliReport, Report, Reports};
use turnover_screen::{Error, FileCsvReport, Pipeline, Result};

fn main() {
    let matches = App::new("turnover-screen")
        .about("Cleans delinquency turnover data and reports Tukey box-plot statistics")
        .arg(
            Arg::with_name("INPUT")
                .help("Input CSV file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .takes_value(true)
                .value_name("DIR")
                .help("Directory for the CSV and SVG outputs (default: current directory)"),
        )
        .get_matches();

    let input = Path::new(matches.value_of("INPUT").unwrap());
    let out_dir = PathBuf::from(matches.value_of("output").unwrap_or("."));

    if let Err(e) = run(input, &out_dir) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run(input: &Path, out_dir: &Path) -> Result<()> {
    let rows = ingest::read_rows_from_path(input)?;
    let output = Pipeline::default().run(rows);

    fs::create_dir_all(out_dir).map_err(|inner| Error::AccessError {
        path: out_dir.to_owned(),
        inner,
    })?;

    let reports = Reports::new(vec![
        Box::new(CliReport) as Box<dyn Report>,
        Box::new(FileCsvReport::new(out_dir)),
    ]);
    reports.dataset_complete(&output.filtered);
    reports.summary_complete(&output.summary);

    #[cfg(feature = "plotters")]
    turnover_screen::plot::grouped_boxplot(
        &output.filtered,
        "Turnover by delinquency status",
        &out_dir.join("boxplot.svg"),
    );

    Ok(())
}
