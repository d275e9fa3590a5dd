//! `neotrace inspect` command - Look up a single NEO

use clap::ArgGroup;
use console::style;
use miette::Result;

use crate::cli::helpers::load_database;
use crate::cli::GlobalOpts;

#[derive(clap::Args, Debug)]
#[command(group(ArgGroup::new("target").required(true).multiple(false)))]
pub struct InspectArgs {
    /// Primary designation of the NEO to inspect
    #[arg(long, short = 'p', group = "target")]
    pub pdes: Option<String>,

    /// IAU name of the NEO to inspect
    #[arg(long, short = 'n', group = "target")]
    pub name: Option<String>,

    /// Also list the object's close approaches, in time order
    #[arg(long, short = 'a')]
    pub approaches: bool,
}

pub fn run(args: InspectArgs, global: &GlobalOpts) -> Result<()> {
    let database = load_database(global)?;

    let neo = match (&args.pdes, &args.name) {
        (Some(pdes), None) => database.get_neo_by_designation(pdes),
        (None, Some(name)) => database.get_neo_by_name(name),
        _ => unreachable!("clap enforces exactly one of --pdes/--name"),
    };

    let Some(neo) = neo else {
        println!("{}", style("No matching NEO found.").yellow());
        return Ok(());
    };

    println!("{neo}");
    if args.approaches {
        for linked in database.approaches_of(neo) {
            println!("- {linked}");
        }
    }
    Ok(())
}
