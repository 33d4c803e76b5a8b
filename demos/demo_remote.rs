use optarg::{Command, CommandLine, Mode, Operand, OperandMode, OptionDef, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    List,
    Add,
    Remove,
}

fn main() {
    let mut getopt = match CommandLine::default()
        .script_name("remote")
        .banner("Manage a set of tracked repositories.")
        .option(OptionDef::new('h', "help", Mode::NoArgument).description("Show this help message and exit."))
        .option(OptionDef::new('v', "verbose", Mode::NoArgument).description("Print more detail (repeatable)."))
        .command(Command::new("list", Action::List).description("List the remotes."))
        .command(
            Command::new("add", Action::Add)
                .description("Add a remote.")
                .option(OptionDef::new('f', "fetch", Mode::NoArgument).description("Fetch once added."))
                .operand(Operand::new("name", OperandMode::REQUIRED))
                .operand(Operand::new("url", OperandMode::REQUIRED)),
        )
        .command(
            Command::new("remove", Action::Remove)
                .description("Remove remotes.")
                .operand(Operand::new("names", OperandMode::REQUIRED | OperandMode::MULTIPLE)),
        )
        .build()
    {
        Ok(getopt) => getopt,
        Err(error) => {
            eprintln!("{error}");
            std::process::exit(1);
        }
    };

    if let Err(error) = getopt.process_default().map(|_| ()) {
        eprintln!("{error}\n");
        eprintln!("{}", getopt.help_text());
        std::process::exit(2);
    }

    if getopt.option("help").is_some() {
        println!("{}", getopt.help_text());
        return;
    }

    let verbose = getopt.option("verbose").and_then(Value::count).unwrap_or(0);

    match getopt.command().map(|command| *command.handler()) {
        Some(Action::List) => println!("Listing remotes (verbosity {verbose})."),
        Some(Action::Add) => println!(
            "Adding '{}' at '{}' (fetch: {}).",
            getopt.operand(0).unwrap_or_default(),
            getopt.operand(1).unwrap_or_default(),
            getopt.option("fetch").is_some()
        ),
        Some(Action::Remove) => println!("Removing: {}.", getopt.operands().join(", ")),
        None => println!("{}", getopt.help_text()),
    }
}
