mod plan;

use clap::{CommandFactory, FromArgMatches};

use fakehdrs::args::GeneratorArgs;
use fakehdrs::error::AppResult;
use plan::{build_plan, execute_plan};

pub(crate) fn run() -> AppResult<()> {
    let args = parse_args()?;

    crate::system::logger::init_logging(args.verbose, args.no_color);

    let plan = build_plan(&args);
    execute_plan(&plan)
}

fn parse_args() -> AppResult<GeneratorArgs> {
    let matches = GeneratorArgs::command().get_matches_from(std::env::args_os());
    let args = GeneratorArgs::from_arg_matches(&matches)?;
    Ok(args)
}
